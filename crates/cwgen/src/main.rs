//! CacheWork generator - writes an LRU workload input file

use anyhow::{Context, Result};
use cachework::{CAPACITY, DEFAULT_FILENAME, OPERATION_COUNT};
use clap::Parser;
use tracing::info;

/// Workload parameters are fixed; the tool takes no options beyond
/// `--help` and `--version`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    Args::parse();

    cachework::generate(DEFAULT_FILENAME)
        .with_context(|| format!("failed to write {}", DEFAULT_FILENAME))?;

    info!(
        "wrote {} (capacity {}, {} operations)",
        DEFAULT_FILENAME, CAPACITY, OPERATION_COUNT
    );

    Ok(())
}
