//! Canonical transaction codec — the trust boundary.
//!
//! `encode` is a total function on structurally valid transactions and two
//! semantically equal transactions always produce byte-identical output.
//! `decode` is its strict left inverse: every length is validated before the
//! bytes are read, algorithm-declared sizes are enforced, and any residue
//! after the final field is fatal. Nothing in here panics on untrusted
//! input.

use quartz_crypto::sig::ed25519::{ED25519_PUBKEY_LEN, ED25519_SIG_LEN};
use quartz_crypto::PqAlgorithm;
use quartz_serde::wire::{put_u32_be, put_u64_be, put_u8, put_var_bytes};
use quartz_serde::{text, Reader};

use crate::error::{LedgerError, Result};
use crate::tx_types::{Transaction, TxAuth, TX_VERSION};
use crate::Address;

/// Serialize the full record, auth payload included.
pub fn encode(tx: &Transaction) -> Result<Vec<u8>> {
    let mut out = encode_for_signing(tx)?;
    put_u8(&mut out, tx.auth.tag());
    match &tx.auth {
        TxAuth::PqOnly { sig } => {
            put_var_bytes(&mut out, sig)?;
        }
        TxAuth::Hybrid {
            classical_pubkey,
            classical_sig,
            pq_sig,
        } => {
            put_var_bytes(&mut out, classical_pubkey)?;
            put_var_bytes(&mut out, classical_sig)?;
            put_var_bytes(&mut out, pq_sig)?;
        }
    }
    Ok(out)
}

/// Serialize everything *except* the auth tag and payload. This is the byte
/// run the signing digest covers, so a signature never covers itself.
pub fn encode_for_signing(tx: &Transaction) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(1 + 4 + 8 + 2 + tx.from_pubkey.len() + 32 + 8 + 8);
    put_u8(&mut out, tx.version);
    put_u32_be(&mut out, tx.chain_id);
    put_u64_be(&mut out, tx.nonce);
    put_var_bytes(&mut out, &tx.from_pubkey)?;
    out.extend_from_slice(tx.to.as_bytes());
    put_u64_be(&mut out, tx.amount);
    put_u64_be(&mut out, tx.fee);
    Ok(out)
}

/// Strict decode against the default PQ algorithm (ML-DSA-65).
pub fn decode(data: &[u8]) -> Result<Transaction> {
    decode_with(data, PqAlgorithm::default())
}

/// Strict decode with explicit algorithm-driven size expectations.
pub fn decode_with(data: &[u8], alg: PqAlgorithm) -> Result<Transaction> {
    if data.is_empty() {
        return Err(LedgerError::InvalidTransaction("empty transaction data"));
    }
    let mut r = Reader::new(data);

    let version = r.read_u8()?;
    if version != TX_VERSION {
        return Err(LedgerError::InvalidVersion { got: version });
    }

    let chain_id = r.read_u32_be()?;
    let nonce = r.read_u64_be()?;

    let from_pubkey = r.read_var_bytes()?;
    let expected_pk = alg.pubkey_len();
    if from_pubkey.len() != expected_pk {
        return Err(LedgerError::InvalidPublicKey {
            expected: expected_pk,
            got: from_pubkey.len(),
        });
    }

    let mut to = [0u8; 32];
    to.copy_from_slice(r.read_bytes(32)?);

    let amount = r.read_u64_be()?;
    let fee = r.read_u64_be()?;

    let expected_sig = alg.signature_len();
    let tag = r.read_u8()?;
    let auth = match tag {
        0 => {
            let sig = r.read_var_bytes()?;
            // Length zero is the unsigned state; anything else must be the
            // exact algorithm signature size.
            if !sig.is_empty() && sig.len() != expected_sig {
                return Err(LedgerError::InvalidSignature {
                    expected: expected_sig,
                    got: sig.len(),
                });
            }
            TxAuth::PqOnly { sig: sig.to_vec() }
        }
        1 => {
            let classical_pubkey = r.read_var_bytes()?;
            if classical_pubkey.len() != ED25519_PUBKEY_LEN {
                return Err(LedgerError::InvalidPublicKey {
                    expected: ED25519_PUBKEY_LEN,
                    got: classical_pubkey.len(),
                });
            }
            let classical_sig = r.read_var_bytes()?;
            if classical_sig.len() != ED25519_SIG_LEN {
                return Err(LedgerError::InvalidSignature {
                    expected: ED25519_SIG_LEN,
                    got: classical_sig.len(),
                });
            }
            let pq_sig = r.read_var_bytes()?;
            if pq_sig.len() != expected_sig {
                return Err(LedgerError::InvalidSignature {
                    expected: expected_sig,
                    got: pq_sig.len(),
                });
            }
            TxAuth::Hybrid {
                classical_pubkey: classical_pubkey.to_vec(),
                classical_sig: classical_sig.to_vec(),
                pq_sig: pq_sig.to_vec(),
            }
        }
        other => return Err(LedgerError::InvalidAuthTag { got: other }),
    };

    if !r.at_end() {
        return Err(LedgerError::TrailingBytes {
            remaining: r.remaining(),
        });
    }

    Ok(Transaction {
        version,
        chain_id,
        nonce,
        from_pubkey: from_pubkey.to_vec(),
        to: Address::from_bytes(to),
        amount,
        fee,
        auth,
    })
}

/* -------- Text wrappers (thin re-encodings of the binary format) -------- */

pub fn encode_to_hex(tx: &Transaction) -> Result<String> {
    Ok(text::encode_hex(&encode(tx)?))
}

pub fn decode_from_hex(s: &str) -> Result<Transaction> {
    decode(&text::decode_hex(s)?)
}

pub fn encode_to_base64(tx: &Transaction) -> Result<String> {
    Ok(text::encode_base64(&encode(tx)?))
}

pub fn decode_from_base64(s: &str) -> Result<Transaction> {
    decode(&text::decode_base64(s)?)
}
