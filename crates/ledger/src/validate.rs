//! Pre-verification policy checks, ordered for DoS resistance.
//!
//! Everything in [`validate_cheap_checks`] is O(1) on sizes and integers;
//! it runs to completion before any signature math is attempted. The size
//! checks repeat what the decoder already enforced — a transaction built in
//! memory never went through the decoder, so the duplication is load-bearing.
//!
//! The zero checks on nonce/amount/fee are ledger policy, not codec
//! invariants; callers with different rules can skip this module and drive
//! [`crate::tx_sig::verify_transaction`] directly.

use quartz_crypto::sig::ed25519::{ED25519_PUBKEY_LEN, ED25519_SIG_LEN};
use quartz_crypto::PqAlgorithm;

use crate::error::{LedgerError, Result};
use crate::tx_sig::verify_transaction_with;
use crate::tx_types::{Transaction, TxAuth, TX_VERSION};

/// Cheap structural and policy gate against the default algorithm.
pub fn validate_cheap_checks(tx: &Transaction, expected_chain_id: u32) -> Result<()> {
    validate_cheap_checks_with(tx, expected_chain_id, PqAlgorithm::default())
}

pub fn validate_cheap_checks_with(
    tx: &Transaction,
    expected_chain_id: u32,
    alg: PqAlgorithm,
) -> Result<()> {
    if tx.version != TX_VERSION {
        return Err(LedgerError::InvalidVersion { got: tx.version });
    }
    if tx.chain_id != expected_chain_id {
        return Err(LedgerError::InvalidChainId {
            expected: expected_chain_id,
            got: tx.chain_id,
        });
    }
    if tx.nonce == 0 {
        return Err(LedgerError::InvalidTransaction("nonce cannot be zero"));
    }
    if tx.amount == 0 {
        return Err(LedgerError::InvalidAmount);
    }
    if tx.fee == 0 {
        return Err(LedgerError::InvalidFee);
    }

    let expected_pk = alg.pubkey_len();
    if tx.from_pubkey.len() != expected_pk {
        return Err(LedgerError::InvalidPublicKey {
            expected: expected_pk,
            got: tx.from_pubkey.len(),
        });
    }

    let expected_sig = alg.signature_len();
    match &tx.auth {
        TxAuth::PqOnly { sig } => {
            // The unsigned state (empty sig) is also rejected here: it only
            // exists as signing-pipeline input.
            if sig.len() != expected_sig {
                return Err(LedgerError::InvalidSignature {
                    expected: expected_sig,
                    got: sig.len(),
                });
            }
        }
        TxAuth::Hybrid {
            classical_pubkey,
            classical_sig,
            pq_sig,
        } => {
            if classical_pubkey.len() != ED25519_PUBKEY_LEN {
                return Err(LedgerError::InvalidPublicKey {
                    expected: ED25519_PUBKEY_LEN,
                    got: classical_pubkey.len(),
                });
            }
            if classical_sig.len() != ED25519_SIG_LEN {
                return Err(LedgerError::InvalidSignature {
                    expected: ED25519_SIG_LEN,
                    got: classical_sig.len(),
                });
            }
            if pq_sig.len() != expected_sig {
                return Err(LedgerError::InvalidSignature {
                    expected: expected_sig,
                    got: pq_sig.len(),
                });
            }
        }
    }

    Ok(())
}

/// Full validation pipeline: cheap checks, then signature verification.
///
/// A cheap-check failure is an `Ok(false)` — the caller asked "is this
/// transaction acceptable", and a malformed one simply is not. Backend
/// faults during the expensive phase still surface as errors.
pub fn validate_transaction(tx: &Transaction, chain_id: u32) -> Result<bool> {
    validate_transaction_with(tx, chain_id, PqAlgorithm::default())
}

pub fn validate_transaction_with(
    tx: &Transaction,
    chain_id: u32,
    alg: PqAlgorithm,
) -> Result<bool> {
    if let Err(err) = validate_cheap_checks_with(tx, chain_id, alg) {
        log::debug!("transaction rejected before verification: {err}");
        return Ok(false);
    }
    verify_transaction_with(tx, chain_id, alg)
}
