#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Wrong-size key material. Also raised for wrong-size *secret* keys on
    /// the signing path; the code value is historical and kept for wire/API
    /// compatibility with earlier releases.
    #[error("public key size mismatch: expected {expected}, got {got}")]
    InvalidPublicKey { expected: usize, got: usize },
    /// A backend fault while signing or verifying. This is *not* the normal
    /// "signature does not verify" outcome, which is `Ok(false)`.
    #[error("signature backend failure: {0}")]
    SignatureVerificationFailed(String),
    #[error("key generation failed: {0}")]
    KeyGenerationFailed(String),
    #[error("hash input invalid: {0}")]
    HashError(String),
}

pub type Result<T> = core::result::Result<T, CryptoError>;
