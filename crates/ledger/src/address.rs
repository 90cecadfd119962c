//! Canonical account address type for the quartz ledger.
//!
//! An address is **exactly 32 bytes**: the first 32 bytes of
//! `SHA-256(pubkey)` — i.e. the full digest. Keeping the whole digest means
//! address collisions are as hard as SHA-256 collisions; authentication
//! strength still comes from signature verification on transactions.
//!
//! The canonical display form is 64 lowercase hex characters.

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, Result};
use quartz_crypto::sha256;
use quartz_serde::{text, CodecError};

#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Address(pub [u8; 32]);

impl Address {
    #[inline]
    pub fn from_bytes(b: [u8; 32]) -> Self {
        Address(b)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        text::encode_hex(&self.0)
    }

    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = text::decode_hex(s)?;
        if bytes.len() != 32 {
            return Err(LedgerError::Codec(CodecError::InvalidHexEncoding(
                format!("address must be 64 hex characters, got {}", s.len()),
            )));
        }
        let mut out = [0u8; 32];
        out.copy_from_slice(&bytes);
        Ok(Address(out))
    }
}

impl AsRef<[u8]> for Address {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl core::fmt::Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Derive the account address for a public key.
pub fn derive_address(pubkey: &[u8]) -> Address {
    Address(sha256(pubkey))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        let pk = vec![0x42u8; 1952];
        assert_eq!(derive_address(&pk), derive_address(&pk));
        assert_ne!(derive_address(&pk), derive_address(&[0x43u8; 1952]));
    }

    #[test]
    fn hex_roundtrip() {
        let addr = derive_address(b"some pubkey");
        let s = addr.to_hex();
        assert_eq!(s.len(), 64);
        assert_eq!(s, s.to_lowercase());
        assert_eq!(Address::from_hex(&s).unwrap(), addr);
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        assert!(Address::from_hex("abcd").is_err());
        assert!(Address::from_hex(&"00".repeat(33)).is_err());
    }
}
