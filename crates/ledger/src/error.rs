use quartz_crypto::CryptoError;
use quartz_serde::CodecError;

/// The closed failure taxonomy for the transaction layer.
///
/// Byte-level reader faults arrive through the transparent [`Codec`] wrapper
/// and backend faults through [`Crypto`]; everything the transaction layer
/// itself can reject has a dedicated variant. `verify` never reports an
/// invalid signature through this type — that outcome is `Ok(false)`.
///
/// [`Codec`]: LedgerError::Codec
/// [`Crypto`]: LedgerError::Crypto
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("transaction version must be 1, got {got}")]
    InvalidVersion { got: u8 },
    #[error("trailing bytes after transaction: {remaining}")]
    TrailingBytes { remaining: usize },
    #[error("invalid auth tag: {got}")]
    InvalidAuthTag { got: u8 },
    #[error("public key size mismatch: expected {expected}, got {got}")]
    InvalidPublicKey { expected: usize, got: usize },
    #[error("signature size mismatch: expected {expected}, got {got}")]
    InvalidSignature { expected: usize, got: usize },
    #[error("invalid transaction: {0}")]
    InvalidTransaction(&'static str),
    #[error("chain id mismatch: expected {expected}, got {got}")]
    InvalidChainId { expected: u32, got: u32 },
    #[error("amount cannot be zero")]
    InvalidAmount,
    #[error("fee cannot be zero")]
    InvalidFee,
    // Peripheral file adapter (wallet key storage).
    #[error("cannot read {path}: {reason}")]
    FileRead { path: String, reason: String },
    #[error("cannot write {path}: {reason}")]
    FileWrite { path: String, reason: String },
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Crypto(#[from] CryptoError),
    #[error("unknown error")]
    Unknown,
}

pub type Result<T> = core::result::Result<T, LedgerError>;
