use std::path::PathBuf;

use clap::{Parser, Subcommand};

use quartz_wallet::{cmd_address, cmd_gen_key, cmd_make_tx, cmd_sign_tx, cmd_verify_tx, TxFormat};

#[derive(Parser)]
#[command(name = "quartz", version, about = "Post-quantum transaction tool")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a PQ keypair (and optionally an Ed25519 one) into a directory
    GenKey {
        /// PQ algorithm name (NIST or Dilithium alias)
        #[arg(long, default_value = "ML-DSA-65")]
        algo: String,
        /// Output directory for the key files
        #[arg(long)]
        out: PathBuf,
        /// Also generate an Ed25519 keypair for hybrid signing
        #[arg(long, default_value_t = false)]
        classical: bool,
    },
    /// Build an unsigned transaction and print its encoding
    MakeTx {
        /// Recipient address (64 hex chars)
        #[arg(long)]
        to: String,
        #[arg(long)]
        amount: u64,
        #[arg(long)]
        fee: u64,
        #[arg(long)]
        nonce: u64,
        #[arg(long)]
        chain: u32,
        /// Path to the sender's PQ public key file
        #[arg(long)]
        pubkey: PathBuf,
        #[arg(long, default_value = "ML-DSA-65")]
        algo: String,
        /// Output encoding
        #[arg(long, value_enum, default_value_t = TxFormat::Hex)]
        format: TxFormat,
    },
    /// Sign an encoded transaction; hybrid when an Ed25519 key is given
    SignTx {
        /// Transaction as hex or base64
        #[arg(long)]
        tx: String,
        /// Path to the PQ private key file
        #[arg(long)]
        pq_key: PathBuf,
        /// Path to an Ed25519 private key file (enables hybrid mode)
        #[arg(long)]
        ed25519_key: Option<PathBuf>,
        #[arg(long, default_value = "ML-DSA-65")]
        algo: String,
        #[arg(long, value_enum, default_value_t = TxFormat::Hex)]
        format: TxFormat,
    },
    /// Verify an encoded transaction against a chain id
    VerifyTx {
        /// Transaction as hex or base64
        #[arg(long)]
        tx: String,
        #[arg(long)]
        chain: u32,
    },
    /// Print the address derived from a public key file
    Address {
        #[arg(long)]
        pubkey: PathBuf,
        #[arg(long, default_value = "ML-DSA-65")]
        algo: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::GenKey { algo, out, classical } => cmd_gen_key(&algo, &out, classical),
        Command::MakeTx {
            to,
            amount,
            fee,
            nonce,
            chain,
            pubkey,
            algo,
            format,
        } => cmd_make_tx(&to, amount, fee, nonce, chain, &pubkey, &algo, format),
        Command::SignTx {
            tx,
            pq_key,
            ed25519_key,
            algo,
            format,
        } => cmd_sign_tx(&tx, &pq_key, ed25519_key.as_deref(), &algo, format),
        Command::VerifyTx { tx, chain } => cmd_verify_tx(&tx, chain),
        Command::Address { pubkey, algo } => cmd_address(&pubkey, &algo),
    }
}
