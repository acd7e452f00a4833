use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ledger_core::{chain::mine_chain, digest, pow::mine_block_with_stats, Block, Chain};
use serde::Serialize;
use std::{
    io::Read,
    path::{Path, PathBuf},
    process::ExitCode,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "ledger-cli")]
#[command(about = "Hash, mine and verify blocks of the minimal proof-of-work ledger")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the SHA-256 digest of the input string
    Hash {
        input: String,
    },
    /// Mine a single block and print it as JSON
    Mine {
        /// Hash of the block this one follows (empty for the first block)
        #[arg(long, default_value = "")]
        previous_hash: String,
        /// Block timestamp
        #[arg(long, allow_negative_numbers = true)]
        timestamp: i64,
        /// Nonce to start the search from
        #[arg(long, default_value_t = 0)]
        nonce: u64,
    },
    /// Mine a chain of linked blocks and print it as JSON
    Demo {
        /// Number of blocks
        #[arg(long, default_value_t = 3)]
        blocks: usize,
        /// Timestamp of the first block; later blocks add one second each
        #[arg(long, default_value_t = 1_600_000_000)]
        timestamp: i64,
    },
    /// Validate a chain stored as a JSON array of blocks ("-" reads stdin)
    Verify {
        file: PathBuf,
    },
}

#[derive(Serialize)]
struct Mined {
    block: Block,
    attempts: u64,
}

fn main() -> Result<ExitCode> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Hash { input } => {
            println!("{}", digest(input.as_bytes()));
        }
        Command::Mine {
            previous_hash,
            timestamp,
            nonce,
        } => {
            let candidate = Block::new(previous_hash, timestamp, nonce);
            let (block, stats) = mine_block_with_stats(&candidate);
            info!("mined in {:?}", stats.elapsed);
            let out = Mined {
                block,
                attempts: stats.attempts,
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Command::Demo { blocks, timestamp } => {
            let chain = mine_chain(blocks, timestamp);
            info!("mined {} blocks, valid: {}", chain.len(), chain.is_valid());
            println!("{}", serde_json::to_string_pretty(&chain)?);
        }
        Command::Verify { file } => {
            let json = read_input(&file)?;
            let chain = Chain::from_json(&json)
                .with_context(|| format!("failed to parse chain from {}", file.display()))?;
            match chain.verify() {
                Ok(()) => println!("valid ({} blocks)", chain.len()),
                Err(violation) => {
                    println!("invalid: {violation}");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
