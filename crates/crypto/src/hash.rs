use sha2::{Digest, Sha256};

/// 4-byte ASCII domain tag for transaction signing messages.
pub const TX_DOMAIN_PREFIX: &[u8; 4] = b"TXv1";

#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut h = Sha256::new();
    h.update(data);
    h.finalize().into()
}

#[inline]
pub fn sha256_concat(parts: &[&[u8]]) -> [u8; 32] {
    let mut h = Sha256::new();
    for p in parts {
        h.update(p);
    }
    h.finalize().into()
}

/// Domain-separated signing digest for a transaction.
///
/// `digest = SHA-256("TXv1" || chain_id_be || tx_bytes)` where `tx_bytes`
/// must be the signing encoding of the transaction (auth fields excluded so
/// the signature never covers itself). The order prefix → chain → payload is
/// fixed; a signature made for one chain id cannot collide with another.
#[inline]
pub fn signing_message(chain_id: u32, tx_bytes: &[u8]) -> [u8; 32] {
    let mut h = Sha256::new();
    h.update(TX_DOMAIN_PREFIX);
    h.update(chain_id.to_be_bytes());
    h.update(tx_bytes);
    h.finalize().into()
}
