//! Raw key-file storage: plain byte files, exact-length validated on load.
//!
//! Layout under a key directory, per algorithm:
//!
//! ```text
//! {dir}/mldsa65_pk.bin   (1952 bytes)
//! {dir}/mldsa65_sk.bin   (4032 bytes)
//! {dir}/ed25519_pk.bin   (32 bytes)
//! {dir}/ed25519_sk.bin   (32 bytes)
//! ```
//!
//! Secret files are written atomically with `0600` permissions. Loaded
//! secrets come back as [`SkBytes`], which zeroizes on drop; callers own the
//! material from there.

use std::fs;
use std::io::Write;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use quartz_crypto::sig::ed25519::{ED25519_PUBKEY_LEN, ED25519_SECRET_LEN};
use quartz_crypto::sig::SkBytes;
use quartz_crypto::PqAlgorithm;
use quartz_ledger::{LedgerError, Result};

fn file_stem(alg: PqAlgorithm) -> &'static str {
    match alg {
        PqAlgorithm::MlDsa44 => "mldsa44",
        PqAlgorithm::MlDsa65 => "mldsa65",
        PqAlgorithm::MlDsa87 => "mldsa87",
    }
}

pub fn pq_pubkey_path(dir: &Path, alg: PqAlgorithm) -> PathBuf {
    dir.join(format!("{}_pk.bin", file_stem(alg)))
}

pub fn pq_secret_path(dir: &Path, alg: PqAlgorithm) -> PathBuf {
    dir.join(format!("{}_sk.bin", file_stem(alg)))
}

pub fn ed25519_pubkey_path(dir: &Path) -> PathBuf {
    dir.join("ed25519_pk.bin")
}

pub fn ed25519_secret_path(dir: &Path) -> PathBuf {
    dir.join("ed25519_sk.bin")
}

fn read_exact_len(path: &Path, expected: usize) -> Result<Vec<u8>> {
    let bytes = fs::read(path).map_err(|e| LedgerError::FileRead {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    if bytes.len() != expected {
        return Err(LedgerError::InvalidPublicKey {
            expected,
            got: bytes.len(),
        });
    }
    Ok(bytes)
}

/// Write `bytes` via a temp file and rename, with `0600` perms for secrets.
fn write_atomic(path: &Path, bytes: &[u8], secret: bool) -> Result<()> {
    let wrap = |e: std::io::Error| LedgerError::FileWrite {
        path: path.display().to_string(),
        reason: e.to_string(),
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(wrap)?;
    }
    let tmp = path.with_extension("tmp");
    let mut f = fs::File::create(&tmp).map_err(wrap)?;
    #[cfg(unix)]
    if secret {
        let mut perm = f.metadata().map_err(wrap)?.permissions();
        perm.set_mode(0o600);
        fs::set_permissions(&tmp, perm).map_err(wrap)?;
    }
    #[cfg(not(unix))]
    let _ = secret;
    f.write_all(bytes).map_err(wrap)?;
    f.sync_all().map_err(wrap)?;
    fs::rename(&tmp, path).map_err(wrap)
}

/// Persist a PQ keypair under `dir`.
pub fn save_pq_keypair(dir: &Path, alg: PqAlgorithm, pk: &[u8], sk: &[u8]) -> Result<()> {
    write_atomic(&pq_pubkey_path(dir, alg), pk, false)?;
    write_atomic(&pq_secret_path(dir, alg), sk, true)
}

pub fn load_pq_pubkey(dir: &Path, alg: PqAlgorithm) -> Result<Vec<u8>> {
    read_exact_len(&pq_pubkey_path(dir, alg), alg.pubkey_len())
}

pub fn load_pq_secret(dir: &Path, alg: PqAlgorithm) -> Result<SkBytes> {
    read_exact_len(&pq_secret_path(dir, alg), alg.secret_key_len()).map(SkBytes)
}

/// Load the keypair from `dir`, generating and persisting a fresh one if
/// either file is missing.
pub fn load_or_create_pq_keypair(dir: &Path, alg: PqAlgorithm) -> Result<(Vec<u8>, SkBytes)> {
    let have_both = pq_pubkey_path(dir, alg).exists() && pq_secret_path(dir, alg).exists();
    if !have_both {
        let (pk, sk) = alg.keypair();
        save_pq_keypair(dir, alg, &pk.0, &sk.0)?;
        log::info!("generated new {} keypair in {}", alg.name(), dir.display());
        return Ok((pk.0.clone(), sk));
    }
    Ok((load_pq_pubkey(dir, alg)?, load_pq_secret(dir, alg)?))
}

pub fn save_ed25519_keypair(dir: &Path, pk: &[u8], sk: &[u8]) -> Result<()> {
    write_atomic(&ed25519_pubkey_path(dir), pk, false)?;
    write_atomic(&ed25519_secret_path(dir), sk, true)
}

pub fn load_ed25519_pubkey(dir: &Path) -> Result<Vec<u8>> {
    read_exact_len(&ed25519_pubkey_path(dir), ED25519_PUBKEY_LEN)
}

pub fn load_ed25519_secret(dir: &Path) -> Result<SkBytes> {
    read_exact_len(&ed25519_secret_path(dir), ED25519_SECRET_LEN).map(SkBytes)
}

/// Load a key file at an explicit path with an expected length.
pub fn load_key_file(path: &Path, expected: usize) -> Result<Vec<u8>> {
    read_exact_len(path, expected)
}
