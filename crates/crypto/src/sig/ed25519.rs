//! Ed25519 classical backend for hybrid authentication.
//!
//! Messages are always pre-hashed 32-byte digests; the transaction layer
//! never feeds raw payloads through here. Verification follows the same
//! totality contract as the PQ backend: size-mismatched or undecodable key
//! and signature material is an `Ok(false)`, not an error.

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use zeroize::Zeroize;

use crate::error::{CryptoError, Result};

pub const ED25519_PUBKEY_LEN: usize = 32;
pub const ED25519_SECRET_LEN: usize = 32;
pub const ED25519_SIG_LEN: usize = 64;

/// Generate a keypair as raw `(pubkey, secret)` bytes.
pub fn keypair() -> (Vec<u8>, Vec<u8>) {
    let signing_key = SigningKey::generate(&mut rand::rngs::OsRng);
    let pk = signing_key.verifying_key().to_bytes().to_vec();
    let sk = signing_key.to_bytes().to_vec();
    (pk, sk)
}

/// Derive the public key from a raw 32-byte secret.
pub fn public_key(sk: &[u8]) -> Result<Vec<u8>> {
    let signing_key = signing_key_from_bytes(sk)?;
    Ok(signing_key.verifying_key().to_bytes().to_vec())
}

/// Sign a 32-byte digest with a raw 32-byte secret key.
pub fn sign(message: &[u8], sk: &[u8]) -> Result<Vec<u8>> {
    if message.len() != 32 {
        return Err(CryptoError::HashError(format!(
            "message must be a 32-byte digest, got {} bytes",
            message.len()
        )));
    }
    let signing_key = signing_key_from_bytes(sk)?;
    Ok(signing_key.sign(message).to_bytes().to_vec())
}

/// Verify a signature over a 32-byte digest.
pub fn verify(message: &[u8], signature: &[u8], pk: &[u8]) -> Result<bool> {
    if message.len() != 32 {
        return Err(CryptoError::HashError(format!(
            "message must be a 32-byte digest, got {} bytes",
            message.len()
        )));
    }
    if pk.len() != ED25519_PUBKEY_LEN || signature.len() != ED25519_SIG_LEN {
        return Ok(false);
    }
    let mut pk_arr = [0u8; ED25519_PUBKEY_LEN];
    pk_arr.copy_from_slice(pk);
    // A 32-byte run that is not a valid curve point fails verification, it
    // is not a backend fault.
    let Ok(verifying_key) = VerifyingKey::from_bytes(&pk_arr) else {
        return Ok(false);
    };
    let mut sig_arr = [0u8; ED25519_SIG_LEN];
    sig_arr.copy_from_slice(signature);
    let sig = Signature::from_bytes(&sig_arr);
    Ok(verifying_key.verify(message, &sig).is_ok())
}

fn signing_key_from_bytes(sk: &[u8]) -> Result<SigningKey> {
    if sk.len() != ED25519_SECRET_LEN {
        return Err(CryptoError::InvalidPublicKey {
            expected: ED25519_SECRET_LEN,
            got: sk.len(),
        });
    }
    let mut seed = [0u8; ED25519_SECRET_LEN];
    seed.copy_from_slice(sk);
    let key = SigningKey::from_bytes(&seed);
    seed.zeroize();
    Ok(key)
}
