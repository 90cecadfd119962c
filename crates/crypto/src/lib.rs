//! # Quartz — signature and digest primitives
//!
//! This crate provides the cryptographic floor of the quartz transaction
//! stack:
//!
//! * **PQ signatures** — ML-DSA-65 (default), ML-DSA-44 and ML-DSA-87 via
//!   the [`sig::ml_dsa::PqAlgorithm`] registry
//! * **Classical signatures** — Ed25519 over pre-hashed 32-byte digests,
//!   used by the hybrid authentication mode
//! * **Hashing** — SHA-256 plus the domain-separated transaction signing
//!   message
//!
//! ## Algorithm registry
//!
//! | Family | Variant | Pubkey | Signature | Notes |
//! |--------|---------|--------|-----------|-------|
//! | ML-DSA | 44 | 1312 | 2420 | Dilithium2 successor |
//! | ML-DSA | 65 | 1952 | 3309 | Default PQ signature (Dilithium3 successor) |
//! | ML-DSA | 87 | 2592 | 4627 | Dilithium5 successor |
//! | Ed25519 | — | 32 | 64 | Hybrid-mode classical component |
//!
//! Sizes above are informative only; callers must query the registry
//! (`pubkey_len()` / `signature_len()`), which reads them from the backend.
//!
//! Everything here is synchronous and stateless. Secret keys are owned by
//! the caller and never retained past the call that uses them.

pub mod error;
pub mod hash;
pub mod sig;

pub use error::CryptoError;
pub use hash::{sha256, signing_message, TX_DOMAIN_PREFIX};
pub use sig::ml_dsa::PqAlgorithm;
