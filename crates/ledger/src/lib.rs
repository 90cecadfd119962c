//! # Quartz ledger — transaction authentication core
//!
//! Construction, canonical serialization, signing and verification of
//! value-transfer transactions authenticated by ML-DSA signatures, with an
//! optional hybrid mode that stacks an Ed25519 signature alongside the PQ
//! one.
//!
//! The crate is organized leaves-first:
//!
//! * [`address`] — 32-byte account identifiers derived from public keys
//! * [`tx_types`] — the [`Transaction`] record and its [`TxAuth`] payload
//! * [`codec`] — strict canonical wire codec (the trust boundary)
//! * [`tx_sig`] — signing-digest construction, sign and verify
//! * [`validate`] — cheap policy checks ordered ahead of PQ verification
//!
//! Every operation is synchronous, stateless and total: untrusted bytes
//! become either a validated [`Transaction`] or a typed [`LedgerError`],
//! never a panic.

pub mod address;
pub mod codec;
pub mod error;
pub mod tx_sig;
pub mod tx_types;
pub mod validate;

pub use address::{derive_address, Address};
pub use codec::{decode, encode, encode_for_signing};
pub use error::{LedgerError, Result};
pub use tx_sig::{sign_hybrid, sign_pq, tx_signing_digest, verify_transaction};
pub use tx_types::{AuthMode, Transaction, TxAuth, TX_VERSION};
pub use validate::{validate_cheap_checks, validate_transaction};
