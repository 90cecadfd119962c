use serde::{Deserialize, Serialize};

use crate::address::{derive_address, Address};

/// The only wire version this library speaks. Version negotiation is
/// deliberately absent; any other value is a fatal decode error.
pub const TX_VERSION: u8 = 1;

/// Wire tag values for the two authentication modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum AuthMode {
    PqOnly = 0,
    Hybrid = 1,
}

/// Authentication payload. The wire auth tag is this enum's discriminant —
/// there is no way to pair the hybrid tag with a PQ-only payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxAuth {
    /// Single ML-DSA signature. An empty `sig` is the unsigned state: legal
    /// as signing-pipeline input, rejected by the pre-verify checks.
    PqOnly { sig: Vec<u8> },
    /// Ed25519 + ML-DSA, both over the same digest, both required.
    ///
    /// The Ed25519 public key travels with the payload: `from_pubkey` is
    /// sized for the PQ algorithm and cannot double as the classical key.
    Hybrid {
        classical_pubkey: Vec<u8>,
        classical_sig: Vec<u8>,
        pq_sig: Vec<u8>,
    },
}

impl TxAuth {
    /// Empty PQ-only payload — the unsigned state.
    pub fn unsigned() -> Self {
        TxAuth::PqOnly { sig: Vec::new() }
    }

    pub fn mode(&self) -> AuthMode {
        match self {
            TxAuth::PqOnly { .. } => AuthMode::PqOnly,
            TxAuth::Hybrid { .. } => AuthMode::Hybrid,
        }
    }

    #[inline]
    pub fn tag(&self) -> u8 {
        self.mode() as u8
    }
}

/// A value-transfer transaction, the single persistent wire record.
///
/// Field order here is canonical wire order. `nonce`, `amount` and `fee`
/// are opaque magnitudes to this layer; the policy checks in
/// [`crate::validate`] are the only place that interprets them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub version: u8,
    pub chain_id: u32,
    pub nonce: u64,
    pub from_pubkey: Vec<u8>,
    pub to: Address,
    pub amount: u64,
    pub fee: u64,
    pub auth: TxAuth,
}

impl Transaction {
    /// Build an unsigned transfer at the current wire version.
    pub fn unsigned(
        chain_id: u32,
        nonce: u64,
        from_pubkey: Vec<u8>,
        to: Address,
        amount: u64,
        fee: u64,
    ) -> Self {
        Transaction {
            version: TX_VERSION,
            chain_id,
            nonce,
            from_pubkey,
            to,
            amount,
            fee,
            auth: TxAuth::unsigned(),
        }
    }

    /// True once an auth payload with actual signature bytes is attached.
    pub fn is_signed(&self) -> bool {
        match &self.auth {
            TxAuth::PqOnly { sig } => !sig.is_empty(),
            TxAuth::Hybrid {
                classical_sig,
                pq_sig,
                ..
            } => !classical_sig.is_empty() && !pq_sig.is_empty(),
        }
    }

    /// The sender's account address, recomputed from `from_pubkey`.
    pub fn sender_address(&self) -> Address {
        derive_address(&self.from_pubkey)
    }
}
