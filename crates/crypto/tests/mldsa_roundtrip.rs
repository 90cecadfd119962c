//! ML-DSA end-to-end: keygen → sign → verify, plus totality contracts.

use quartz_crypto::sig::ml_dsa::MlDsa65;
use quartz_crypto::sig::SignatureScheme;
use quartz_crypto::{CryptoError, PqAlgorithm};

#[test]
fn mldsa65_sign_verify_roundtrip() {
    let (pk, sk) = MlDsa65::keypair();

    let msg = b"quartz::crypto::mldsa65 smoke";
    let sig = MlDsa65::sign(&sk, msg);

    assert!(MlDsa65::verify(&pk, msg, &sig));
    assert!(!MlDsa65::verify(&pk, b"quartz::crypto::mldsa65 sm0ke", &sig));
}

#[test]
fn mldsa65_sizes_match_backend() {
    let alg = PqAlgorithm::MlDsa65;
    assert_eq!(MlDsa65::PK_LEN, alg.pubkey_len());
    assert_eq!(MlDsa65::SK_LEN, alg.secret_key_len());
    assert_eq!(MlDsa65::SIG_LEN, alg.signature_len());
    // ML-DSA-65 parameters per FIPS 204
    assert_eq!(alg.pubkey_len(), 1952);
    assert_eq!(alg.signature_len(), 3309);
}

#[test]
fn registry_sign_verify_by_bytes() {
    let alg = PqAlgorithm::default();
    assert_eq!(alg, PqAlgorithm::MlDsa65);

    let (pk, sk) = alg.keypair();
    let digest = [0x42u8; 32];
    let sig = alg.sign(&digest, &sk.0).expect("sign");
    assert_eq!(sig.len(), alg.signature_len());

    assert!(alg.verify(&digest, &sig, &pk.0).unwrap());
    assert!(!alg.verify(&[0u8; 32], &sig, &pk.0).unwrap());
}

#[test]
fn verify_is_total_on_garbage_sizes() {
    let alg = PqAlgorithm::MlDsa65;
    let (pk, sk) = alg.keypair();
    let digest = [7u8; 32];
    let sig = alg.sign(&digest, &sk.0).unwrap();

    // Wrong-size inputs are a clean `Ok(false)`, never an error.
    assert_eq!(alg.verify(&digest, &sig[..100], &pk.0).unwrap(), false);
    assert_eq!(alg.verify(&digest, &sig, &pk.0[..100]).unwrap(), false);
    assert_eq!(alg.verify(&digest, &[], &[]).unwrap(), false);
}

#[test]
fn sign_rejects_wrong_size_secret() {
    let alg = PqAlgorithm::MlDsa65;
    let err = alg.sign(&[0u8; 32], &[0u8; 100]).unwrap_err();
    assert!(matches!(
        err,
        CryptoError::InvalidPublicKey { got: 100, .. }
    ));
}

#[test]
fn algorithm_names_parse_including_legacy_aliases() {
    assert_eq!(PqAlgorithm::from_name("ML-DSA-65"), Some(PqAlgorithm::MlDsa65));
    assert_eq!(PqAlgorithm::from_name("Dilithium3"), Some(PqAlgorithm::MlDsa65));
    assert_eq!(PqAlgorithm::from_name("Dilithium-2"), Some(PqAlgorithm::MlDsa44));
    assert_eq!(PqAlgorithm::from_name("ML-DSA-87"), Some(PqAlgorithm::MlDsa87));
    assert_eq!(PqAlgorithm::from_name("Falcon-512"), None);
    assert_eq!(PqAlgorithm::MlDsa65.name(), "ML-DSA-65");
}
