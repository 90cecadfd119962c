//! ML-DSA (FIPS 204, CRYSTALS-Dilithium successor) signature backend.

use pqcrypto_traits::sign::{DetachedSignature as _, PublicKey as _, SecretKey as _};

use super::{AlgoId, PkBytes, SigBytes, SkBytes, SignatureScheme};
use crate::error::{CryptoError, Result};

/// Runtime registry over the supported ML-DSA parameter sets.
///
/// The transaction layer is parameterized by this enum; all key, signature
/// and size queries dispatch to the corresponding `pqcrypto` backend module,
/// so lengths are always the backend's own, never hardcoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PqAlgorithm {
    MlDsa44,
    #[default]
    MlDsa65,
    MlDsa87,
}

macro_rules! with_backend {
    ($alg:expr, $m:ident, $body:expr) => {
        match $alg {
            PqAlgorithm::MlDsa44 => {
                use pqcrypto_mldsa::mldsa44 as $m;
                $body
            }
            PqAlgorithm::MlDsa65 => {
                use pqcrypto_mldsa::mldsa65 as $m;
                $body
            }
            PqAlgorithm::MlDsa87 => {
                use pqcrypto_mldsa::mldsa87 as $m;
                $body
            }
        }
    };
}

impl PqAlgorithm {
    /// Parse an algorithm name. Accepts the NIST names and the Dilithium
    /// predecessor aliases still found in key material produced by older
    /// deployments.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ML-DSA-44" | "Dilithium2" | "Dilithium-2" => Some(PqAlgorithm::MlDsa44),
            "ML-DSA-65" | "Dilithium3" | "Dilithium-3" => Some(PqAlgorithm::MlDsa65),
            "ML-DSA-87" | "Dilithium5" | "Dilithium-5" => Some(PqAlgorithm::MlDsa87),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PqAlgorithm::MlDsa44 => "ML-DSA-44",
            PqAlgorithm::MlDsa65 => "ML-DSA-65",
            PqAlgorithm::MlDsa87 => "ML-DSA-87",
        }
    }

    pub fn algo_id(self) -> AlgoId {
        match self {
            PqAlgorithm::MlDsa44 => AlgoId::MlDsa44,
            PqAlgorithm::MlDsa65 => AlgoId::MlDsa65,
            PqAlgorithm::MlDsa87 => AlgoId::MlDsa87,
        }
    }

    #[inline]
    pub fn pubkey_len(self) -> usize {
        with_backend!(self, m, m::public_key_bytes())
    }

    #[inline]
    pub fn secret_key_len(self) -> usize {
        with_backend!(self, m, m::secret_key_bytes())
    }

    #[inline]
    pub fn signature_len(self) -> usize {
        with_backend!(self, m, m::signature_bytes())
    }

    /// Generate a fresh keypair as raw bytes. The secret half zeroizes on
    /// drop; the caller owns both.
    pub fn keypair(self) -> (PkBytes, SkBytes) {
        with_backend!(self, m, {
            let (pk, sk) = m::keypair();
            (
                PkBytes(pk.as_bytes().to_vec()),
                SkBytes(sk.as_bytes().to_vec()),
            )
        })
    }

    /// Detached-sign `msg` with a raw secret key.
    ///
    /// A wrong-size secret key is rejected up front with `InvalidPublicKey`
    /// (historical code value, see [`CryptoError::InvalidPublicKey`]).
    pub fn sign(self, msg: &[u8], sk: &[u8]) -> Result<Vec<u8>> {
        let expected = self.secret_key_len();
        if sk.len() != expected {
            return Err(CryptoError::InvalidPublicKey {
                expected,
                got: sk.len(),
            });
        }
        with_backend!(self, m, {
            let sk = m::SecretKey::from_bytes(sk)
                .map_err(|e| CryptoError::SignatureVerificationFailed(e.to_string()))?;
            Ok(m::detached_sign(msg, &sk).as_bytes().to_vec())
        })
    }

    /// Verify a detached signature. Total: wrong-size or undecodable key and
    /// signature material yields `Ok(false)`, never an error.
    pub fn verify(self, msg: &[u8], sig: &[u8], pk: &[u8]) -> Result<bool> {
        if pk.len() != self.pubkey_len() || sig.len() != self.signature_len() {
            return Ok(false);
        }
        with_backend!(self, m, {
            match (m::PublicKey::from_bytes(pk), m::DetachedSignature::from_bytes(sig)) {
                (Ok(pk), Ok(sig)) => Ok(m::verify_detached_signature(&sig, msg, &pk).is_ok()),
                _ => Ok(false),
            }
        })
    }
}

/// ML-DSA-65, the default transaction signature scheme.
pub struct MlDsa65;

use pqcrypto_mldsa::mldsa65::{
    detached_sign, keypair, verify_detached_signature, DetachedSignature, PublicKey, SecretKey,
};

impl SignatureScheme for MlDsa65 {
    const ALGO_ID: AlgoId = AlgoId::MlDsa65;
    const PK_LEN: usize = 1952;
    const SK_LEN: usize = 4032;
    const SIG_LEN: usize = 3309;

    type PublicKey = PkBytes;
    type SecretKey = SkBytes;
    type Signature = SigBytes;

    fn keypair() -> (Self::PublicKey, Self::SecretKey) {
        let (pk, sk) = keypair();
        (
            PkBytes(pk.as_bytes().to_vec()),
            SkBytes(sk.as_bytes().to_vec()),
        )
    }

    fn sign(sk: &Self::SecretKey, msg: &[u8]) -> Self::Signature {
        if let Ok(sk) = SecretKey::from_bytes(&sk.0) {
            let sig = detached_sign(msg, &sk);
            return SigBytes(sig.as_bytes().to_vec());
        }
        SigBytes(Vec::new())
    }

    fn verify(pk: &Self::PublicKey, msg: &[u8], sig: &Self::Signature) -> bool {
        if let (Ok(pk), Ok(sig)) = (
            PublicKey::from_bytes(&pk.0),
            DetachedSignature::from_bytes(&sig.0),
        ) {
            return verify_detached_signature(&sig, msg, &pk).is_ok();
        }
        false
    }

    #[inline]
    fn pk_as_bytes(pk: &Self::PublicKey) -> &[u8] {
        &pk.0
    }
    #[inline]
    fn sk_as_bytes(sk: &Self::SecretKey) -> &[u8] {
        &sk.0
    }
}
