//! The cheap-check gate: specific errors per field, and the full pipeline's
//! DoS-aware mapping of structural failures to `Ok(false)`.

use quartz_crypto::PqAlgorithm;
use quartz_ledger::{
    sign_pq, validate_cheap_checks, validate_transaction, Address, LedgerError, Transaction,
    TxAuth,
};

const PK_LEN: usize = 1952;
const SIG_LEN: usize = 3309;

fn shaped_tx() -> Transaction {
    let mut tx = Transaction::unsigned(
        1,
        12345,
        vec![0x42; PK_LEN],
        Address::from_bytes([0xAA; 32]),
        1000,
        10,
    );
    tx.auth = TxAuth::PqOnly {
        sig: vec![0x55; SIG_LEN],
    };
    tx
}

#[test]
fn well_shaped_transaction_passes_cheap_checks() {
    assert!(validate_cheap_checks(&shaped_tx(), 1).is_ok());
}

#[test]
fn version_mismatch() {
    let mut tx = shaped_tx();
    tx.version = 3;
    assert_eq!(
        validate_cheap_checks(&tx, 1).unwrap_err(),
        LedgerError::InvalidVersion { got: 3 }
    );
}

#[test]
fn chain_id_mismatch() {
    let tx = shaped_tx();
    assert_eq!(
        validate_cheap_checks(&tx, 2).unwrap_err(),
        LedgerError::InvalidChainId {
            expected: 2,
            got: 1
        }
    );
}

#[test]
fn zero_nonce_amount_fee_each_rejected() {
    let mut tx = shaped_tx();
    tx.nonce = 0;
    assert_eq!(
        validate_cheap_checks(&tx, 1).unwrap_err(),
        LedgerError::InvalidTransaction("nonce cannot be zero")
    );

    let mut tx = shaped_tx();
    tx.amount = 0;
    assert_eq!(
        validate_cheap_checks(&tx, 1).unwrap_err(),
        LedgerError::InvalidAmount
    );

    let mut tx = shaped_tx();
    tx.fee = 0;
    assert_eq!(
        validate_cheap_checks(&tx, 1).unwrap_err(),
        LedgerError::InvalidFee
    );
}

#[test]
fn wrong_pubkey_size_rejected() {
    let mut tx = shaped_tx();
    tx.from_pubkey.truncate(100);
    assert_eq!(
        validate_cheap_checks(&tx, 1).unwrap_err(),
        LedgerError::InvalidPublicKey {
            expected: PK_LEN,
            got: 100
        }
    );
}

#[test]
fn unsigned_transaction_rejected_before_verification() {
    // The empty signature is signing-pipeline input only; the gate refuses
    // to forward it to the verifier.
    let mut tx = shaped_tx();
    tx.auth = TxAuth::unsigned();
    assert_eq!(
        validate_cheap_checks(&tx, 1).unwrap_err(),
        LedgerError::InvalidSignature {
            expected: SIG_LEN,
            got: 0
        }
    );
}

#[test]
fn hybrid_sizes_each_checked() {
    let hybrid = |cpk: usize, csig: usize, psig: usize| {
        let mut tx = shaped_tx();
        tx.auth = TxAuth::Hybrid {
            classical_pubkey: vec![0x11; cpk],
            classical_sig: vec![0x22; csig],
            pq_sig: vec![0x55; psig],
        };
        tx
    };

    assert!(validate_cheap_checks(&hybrid(32, 64, SIG_LEN), 1).is_ok());
    assert_eq!(
        validate_cheap_checks(&hybrid(31, 64, SIG_LEN), 1).unwrap_err(),
        LedgerError::InvalidPublicKey {
            expected: 32,
            got: 31
        }
    );
    assert_eq!(
        validate_cheap_checks(&hybrid(32, 63, SIG_LEN), 1).unwrap_err(),
        LedgerError::InvalidSignature {
            expected: 64,
            got: 63
        }
    );
    assert_eq!(
        validate_cheap_checks(&hybrid(32, 64, 100), 1).unwrap_err(),
        LedgerError::InvalidSignature {
            expected: SIG_LEN,
            got: 100
        }
    );
}

#[test]
fn pipeline_maps_cheap_failures_to_false() {
    // Garbage signature bytes with a zero fee: the gate must answer
    // Ok(false) without ever reaching the (expensive) verifier.
    let mut tx = shaped_tx();
    tx.fee = 0;
    assert_eq!(validate_transaction(&tx, 1).unwrap(), false);

    // Wrong chain likewise.
    assert_eq!(validate_transaction(&shaped_tx(), 9).unwrap(), false);
}

#[test]
fn pipeline_accepts_a_genuinely_signed_transaction() {
    let alg = PqAlgorithm::MlDsa65;
    let (pk, sk) = alg.keypair();
    let mut tx = Transaction::unsigned(
        1,
        1,
        pk.0.clone(),
        Address::from_bytes([0xAA; 32]),
        1000,
        10,
    );
    sign_pq(&mut tx, &sk.0, alg).unwrap();
    assert_eq!(validate_transaction(&tx, 1).unwrap(), true);

    // Same transaction fails the pipeline on the wrong chain: cheap check
    // catches the chain id before any signature math.
    assert_eq!(validate_transaction(&tx, 2).unwrap(), false);
}

#[test]
fn pipeline_rejects_valid_shape_bad_signature() {
    // Correct sizes, garbage contents: passes the gate, fails verification.
    assert_eq!(validate_transaction(&shaped_tx(), 1).unwrap(), false);
}
