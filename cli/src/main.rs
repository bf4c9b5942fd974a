//! `ghintel` entry point.
//!
//! Parses arguments, then bootstraps the fixed `~/.ghintel` layout before
//! dispatching: the store itself never creates directories, so the memory
//! and cache directories must exist before the first load or scan. Usage
//! errors exit before any directory is touched.

use anyhow::{Context, Result};
use clap::Parser;
use ghintel_cli::intel_cmd::IntelCli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("ghintel v{} starting", env!("CARGO_PKG_VERSION"));

    let cli = IntelCli::parse();
    ensure_layout()?;
    cli.run()
}

/// Create the memory and cache directories if absent.
fn ensure_layout() -> Result<()> {
    for dir in [
        ghintel_store::paths::memory_dir()?,
        ghintel_store::paths::cache_dir()?,
    ] {
        std::fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    Ok(())
}
