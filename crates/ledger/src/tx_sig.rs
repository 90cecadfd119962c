//! Transaction signing and verification.
//!
//! The digest both modes sign is
//! `SHA-256("TXv1" || chain_id_be || encode_for_signing(tx))`; see
//! [`quartz_crypto::signing_message`]. Verification derives the digest from
//! the *caller-supplied* chain id, so a signature made for one chain can
//! never validate on another.

use quartz_crypto::sig::ed25519;
use quartz_crypto::{signing_message, PqAlgorithm};

use crate::codec::encode_for_signing;
use crate::error::Result;
use crate::tx_types::{Transaction, TxAuth};

/// The 32-byte digest signed for `tx` on chain `chain_id`.
pub fn tx_signing_digest(chain_id: u32, tx: &Transaction) -> Result<[u8; 32]> {
    let bytes = encode_for_signing(tx)?;
    Ok(signing_message(chain_id, &bytes))
}

/// Sign with ML-DSA only. Replaces any existing auth payload in place; the
/// transaction is untouched if encoding or signing fails.
pub fn sign_pq(tx: &mut Transaction, sk: &[u8], alg: PqAlgorithm) -> Result<()> {
    let digest = tx_signing_digest(tx.chain_id, tx)?;
    let sig = alg.sign(&digest, sk)?;
    log::debug!(
        "signed tx nonce={} chain_id={} with {}",
        tx.nonce,
        tx.chain_id,
        alg.name()
    );
    tx.auth = TxAuth::PqOnly { sig };
    Ok(())
}

/// Sign with ML-DSA plus Ed25519 over the same digest. The classical public
/// key is derived from `classical_sk` and embedded in the auth payload. Both
/// signatures must succeed; on any failure the transaction is unchanged.
pub fn sign_hybrid(
    tx: &mut Transaction,
    pq_sk: &[u8],
    classical_sk: &[u8],
    alg: PqAlgorithm,
) -> Result<()> {
    let digest = tx_signing_digest(tx.chain_id, tx)?;
    let pq_sig = alg.sign(&digest, pq_sk)?;
    let classical_sig = ed25519::sign(&digest, classical_sk)?;
    let classical_pubkey = ed25519::public_key(classical_sk)?;
    log::debug!(
        "hybrid-signed tx nonce={} chain_id={} with {}+Ed25519",
        tx.nonce,
        tx.chain_id,
        alg.name()
    );
    tx.auth = TxAuth::Hybrid {
        classical_pubkey,
        classical_sig,
        pq_sig,
    };
    Ok(())
}

/// Verify `tx` against `chain_id` with the default algorithm (ML-DSA-65).
///
/// Strictly tri-state: `Ok(true)` valid, `Ok(false)` invalid, `Err(_)` only
/// for backend faults — never for a signature that simply does not verify.
pub fn verify_transaction(tx: &Transaction, chain_id: u32) -> Result<bool> {
    verify_transaction_with(tx, chain_id, PqAlgorithm::default())
}

/// Same as [`verify_transaction`] with an explicit PQ algorithm.
pub fn verify_transaction_with(
    tx: &Transaction,
    chain_id: u32,
    alg: PqAlgorithm,
) -> Result<bool> {
    let digest = tx_signing_digest(chain_id, tx)?;
    match &tx.auth {
        TxAuth::PqOnly { sig } => Ok(alg.verify(&digest, sig, &tx.from_pubkey)?),
        TxAuth::Hybrid {
            classical_pubkey,
            classical_sig,
            pq_sig,
        } => {
            // Classical first: microseconds vs. the ~ms ML-DSA verify. A bad
            // classical signature must not cost us the PQ work.
            if !ed25519::verify(&digest, classical_sig, classical_pubkey)? {
                return Ok(false);
            }
            Ok(alg.verify(&digest, pq_sig, &tx.from_pubkey)?)
        }
    }
}
