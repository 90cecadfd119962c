//! Wallet-side glue for the quartz ledger: raw key files plus the command
//! helpers backing the `quartz` CLI binary. Everything in here is shallow —
//! the codec, signing and verification all live in `quartz-ledger`.

pub mod keyfile;

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use zeroize::Zeroize;

use quartz_crypto::sig::ed25519;
use quartz_crypto::PqAlgorithm;
use quartz_ledger::{
    codec, derive_address, sign_hybrid, sign_pq, validate_transaction, Address, Transaction,
};
use quartz_serde::text;

/// Output encoding for serialized transactions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TxFormat {
    Hex,
    Base64,
}

fn parse_algo(name: &str) -> Result<PqAlgorithm> {
    PqAlgorithm::from_name(name)
        .with_context(|| format!("unknown PQ algorithm {name:?} (try ML-DSA-65)"))
}

fn format_tx(tx: &Transaction, format: TxFormat) -> Result<String> {
    Ok(match format {
        TxFormat::Hex => codec::encode_to_hex(tx)?,
        TxFormat::Base64 => codec::encode_to_base64(tx)?,
    })
}

/// Transactions arrive as hex or base64; try hex first, fall back.
fn parse_tx(input: &str) -> Result<Transaction> {
    if let Ok(bytes) = text::decode_hex(input) {
        return codec::decode(&bytes).context("decoding transaction");
    }
    let bytes = text::decode_base64(input).context("transaction is neither hex nor base64")?;
    codec::decode(&bytes).context("decoding transaction")
}

/// Generate a PQ keypair (and optionally an Ed25519 one for hybrid mode)
/// under `out_dir`.
pub fn cmd_gen_key(algo: &str, out_dir: &Path, with_classical: bool) -> Result<()> {
    let alg = parse_algo(algo)?;
    let (pk, sk) = alg.keypair();
    keyfile::save_pq_keypair(out_dir, alg, &pk.0, &sk.0)
        .with_context(|| format!("writing {} key files", alg.name()))?;
    println!("generated {} keypair:", alg.name());
    println!("  public key:  {}", keyfile::pq_pubkey_path(out_dir, alg).display());
    println!("  private key: {}", keyfile::pq_secret_path(out_dir, alg).display());
    println!("  address:     {}", derive_address(&pk.0));

    if with_classical {
        let (ed_pk, mut ed_sk) = ed25519::keypair();
        let saved = keyfile::save_ed25519_keypair(out_dir, &ed_pk, &ed_sk);
        ed_sk.zeroize();
        saved.context("writing Ed25519 key files")?;
        println!("generated Ed25519 keypair:");
        println!("  public key:  {}", keyfile::ed25519_pubkey_path(out_dir).display());
        println!("  private key: {}", keyfile::ed25519_secret_path(out_dir).display());
    }
    Ok(())
}

/// Build an unsigned transaction and print its wire encoding.
#[allow(clippy::too_many_arguments)]
pub fn cmd_make_tx(
    to_hex: &str,
    amount: u64,
    fee: u64,
    nonce: u64,
    chain_id: u32,
    pubkey_path: &Path,
    algo: &str,
    format: TxFormat,
) -> Result<()> {
    let alg = parse_algo(algo)?;
    let to = Address::from_hex(to_hex).context("parsing --to address")?;
    let pubkey = keyfile::load_key_file(pubkey_path, alg.pubkey_len())
        .with_context(|| format!("loading pubkey from {}", pubkey_path.display()))?;

    let tx = Transaction::unsigned(chain_id, nonce, pubkey, to, amount, fee);
    println!("{}", format_tx(&tx, format)?);
    Ok(())
}

/// Sign an encoded transaction with the PQ key, hybrid if an Ed25519 key is
/// supplied, and print the signed encoding.
pub fn cmd_sign_tx(
    tx_input: &str,
    pq_key_path: &Path,
    ed25519_key_path: Option<&Path>,
    algo: &str,
    format: TxFormat,
) -> Result<()> {
    let alg = parse_algo(algo)?;
    let mut tx = parse_tx(tx_input)?;
    let mut sk = keyfile::load_key_file(pq_key_path, alg.secret_key_len())
        .with_context(|| format!("loading PQ private key from {}", pq_key_path.display()))?;

    let signed = match ed25519_key_path {
        Some(path) => {
            let mut ed_sk = keyfile::load_key_file(path, ed25519::ED25519_SECRET_LEN)
                .with_context(|| format!("loading Ed25519 private key from {}", path.display()))?;
            let r = sign_hybrid(&mut tx, &sk, &ed_sk, alg);
            ed_sk.zeroize();
            r.context("hybrid signing")
        }
        None => sign_pq(&mut tx, &sk, alg).context("signing"),
    };
    // Wipe the key material before reporting any signing failure.
    sk.zeroize();
    signed?;

    println!("{}", format_tx(&tx, format)?);
    Ok(())
}

/// Verify an encoded transaction against a chain id. Exit status follows
/// the verdict so scripts can branch on it.
pub fn cmd_verify_tx(tx_input: &str, chain_id: u32) -> Result<()> {
    let tx = parse_tx(tx_input)?;
    let valid = validate_transaction(&tx, chain_id).context("verification backend failure")?;
    if valid {
        println!("VALID");
        println!("sender: {}", tx.sender_address());
        Ok(())
    } else {
        println!("INVALID");
        bail!("transaction failed verification for chain {chain_id}")
    }
}

/// Print the address for a public-key file.
pub fn cmd_address(pubkey_path: &Path, algo: &str) -> Result<()> {
    let alg = parse_algo(algo)?;
    let pubkey = keyfile::load_key_file(pubkey_path, alg.pubkey_len())
        .with_context(|| format!("loading pubkey from {}", pubkey_path.display()))?;
    println!("{}", derive_address(&pubkey));
    Ok(())
}
