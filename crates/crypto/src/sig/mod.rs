//! Signature schemes: trait surface plus the concrete backends.
//!
//! The byte-slice entry points on [`ml_dsa::PqAlgorithm`] and in
//! [`ed25519`] are what the transaction layer uses; the [`SignatureScheme`]
//! trait exists for typed keypair flows (wallet, tests) where the scheme is
//! fixed at compile time.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlgoId {
    // FIPS 204 lattice signatures
    MlDsa44,
    MlDsa65,
    MlDsa87,
    // RFC 8032 classical component for hybrid auth
    Ed25519,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PkBytes(pub Vec<u8>);
#[derive(Clone, Debug)]
pub struct SkBytes(pub Vec<u8>);
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigBytes(pub Vec<u8>);

impl Drop for SkBytes {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        self.0.zeroize();
    }
}

pub trait SignatureScheme {
    type PublicKey;
    type SecretKey;
    type Signature;

    const ALGO_ID: AlgoId;
    const PK_LEN: usize;
    const SK_LEN: usize;
    const SIG_LEN: usize;

    fn keypair() -> (Self::PublicKey, Self::SecretKey);
    fn sign(sk: &Self::SecretKey, msg: &[u8]) -> Self::Signature;
    fn verify(pk: &Self::PublicKey, msg: &[u8], sig: &Self::Signature) -> bool;

    fn pk_as_bytes(pk: &Self::PublicKey) -> &[u8];
    fn sk_as_bytes(sk: &Self::SecretKey) -> &[u8];
}

pub mod ed25519;
pub mod ml_dsa;
