//! Kangaroo CLI
//!
//! File hashing, checksum verification, key derivation and identity
//! encoding on the command line.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check_mode, decode_identity, derive_keys, encode_identity, hash_files};
use std::path::PathBuf;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "kangaroo")]
#[command(about = "KangarooTwelve hash and identity tool", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Files to hash (if no subcommand)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Digest length in bytes (extendable output)
    #[arg(short, long, default_value_t = 32)]
    length: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify checksums from file (like sha256sum -c)
    Check {
        #[arg(value_name = "FILE")]
        checksum_file: PathBuf,
    },
    /// Derive subseed and private key from a 55-letter seed
    Derive {
        #[arg(value_name = "SEED")]
        seed: String,
    },
    /// Encode a 32-byte public key (hex) as a 60-character identity
    Encode {
        #[arg(value_name = "PUBKEY_HEX")]
        public_key: String,
    },
    /// Decode a 60-character identity back to its public key
    Decode {
        #[arg(value_name = "IDENTITY")]
        identity: String,
    },
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Check { checksum_file }) => check_mode(checksum_file)?,
        Some(Commands::Derive { seed }) => derive_keys(seed)?,
        Some(Commands::Encode { public_key }) => encode_identity(public_key)?,
        Some(Commands::Decode { identity }) => decode_identity(identity)?,
        None => {
            if cli.files.is_empty() {
                eprintln!("Error: No files specified");
                eprintln!("Usage: kangaroo [FILE]... or kangaroo --help");
                std::process::exit(1);
            }

            hash_files(&cli.files, cli.length)?;
        }
    }

    Ok(())
}
