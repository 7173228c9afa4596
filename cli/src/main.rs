//! Ascon-CXOF CLI
//!
//! Hashing and extendable-output command-line tool.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check_mode, compare_rounds, hash_files, xof_mode};
use std::path::PathBuf;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "ascon-cxof")]
#[command(about = "Ascon-CXOF128 customizable extendable-output function", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Files to hash (if no subcommand)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Produce XOF output from hex-encoded message and label
    Xof {
        /// Message as a hex string (may be empty, 0x prefix accepted)
        #[arg(value_name = "MSG_HEX")]
        msg: String,

        /// Customization label as a hex string (may be empty)
        #[arg(value_name = "LABEL_HEX")]
        label: String,

        /// Requested output length in bits
        #[arg(value_name = "OUT_BITS")]
        out_bits: usize,

        /// Permutation rounds (6, 8 or 12; unknown counts fall back to 12)
        #[arg(short, long, default_value_t = 12)]
        rounds: u32,
    },

    /// Compare the 6/8/12-round outputs on one message
    Rounds {
        /// Message to hash (UTF-8 bytes)
        #[arg(default_value = "abc")]
        message: String,
    },

    /// Verify checksums from file (like sha256sum -c)
    Check {
        #[arg(value_name = "FILE")]
        checksum_file: PathBuf,
    },
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Xof {
            msg,
            label,
            out_bits,
            rounds,
        }) => xof_mode(msg, label, *out_bits, *rounds)?,
        Some(Commands::Rounds { message }) => compare_rounds(message.as_bytes()),
        Some(Commands::Check { checksum_file }) => check_mode(checksum_file)?,
        None => {
            if cli.files.is_empty() {
                eprintln!("Error: No files specified");
                eprintln!("Usage: ascon-cxof [FILE]... or ascon-cxof --help");
                std::process::exit(1);
            }

            hash_files(&cli.files)?;
        }
    }

    Ok(())
}
