//! Intelligence CLI subcommands.
//!
//! Thin front-end over `ghintel-store`: every subcommand opens the store at
//! its fixed default path (loading the document), then routes to the report
//! surface and prints to stdout. Diagnostics go to stderr via `tracing`.
//!
//! ## Commands
//!
//! - `ghintel scan`: refresh the intelligence file via the external scanner
//! - `ghintel summary`: human-readable actionable summary
//! - `ghintel check <REPO_NAME>`: per-repository health as JSON
//! - `ghintel daemon-report`: scheduler digest as JSON

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ghintel_store::IntelligenceStore;
use ghintel_store::report;
use ghintel_store::scanner;

/// GitHub intelligence reports from the scanner-maintained cache.
#[derive(Debug, Parser)]
#[command(name = "ghintel", version)]
pub struct IntelCli {
    #[command(subcommand)]
    pub command: IntelSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum IntelSubcommand {
    /// Run the external scanner to refresh the intelligence file.
    Scan,
    /// Print an actionable summary of tracked repositories.
    Summary,
    /// Check the health of a single repository.
    Check(CheckArgs),
    /// Print the machine-readable digest polled by the scheduler.
    DaemonReport,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Repository name as tracked in the intelligence file.
    pub repo_name: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Dispatch
// ─────────────────────────────────────────────────────────────────────────────

impl IntelCli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            IntelSubcommand::Scan => cmd_scan(),
            IntelSubcommand::Summary => cmd_summary(),
            IntelSubcommand::Check(args) => cmd_check(args),
            IntelSubcommand::DaemonReport => cmd_daemon_report(),
        }
    }
}

fn open_store() -> Result<IntelligenceStore> {
    IntelligenceStore::open_default().context("loading the intelligence file")
}

// ─────────────────────────────────────────────────────────────────────────────
// Command implementations
// ─────────────────────────────────────────────────────────────────────────────

fn cmd_scan() -> Result<()> {
    scanner::run_scan()?;
    println!("Scan complete");
    Ok(())
}

fn cmd_summary() -> Result<()> {
    let store = open_store()?;
    println!("{}", report::actionable_summary(&store));
    Ok(())
}

fn cmd_check(args: &CheckArgs) -> Result<()> {
    let store = open_store()?;
    let health = report::repo_health(&store, &args.repo_name);
    let json = serde_json::to_string_pretty(&health)?;
    println!("{json}");
    Ok(())
}

fn cmd_daemon_report() -> Result<()> {
    let store = open_store()?;
    let json = serde_json::to_string_pretty(&report::daemon_report(&store))?;
    println!("{json}");
    Ok(())
}
