//! Fixed on-disk layout under `~/.ghintel`.
//!
//! ```text
//! ~/.ghintel/
//!   memory/github-intelligence.json   the intelligence document
//!   cache/github/                     scratch space for the scanner
//!   scripts/github-tracker.sh         external scanner executable
//! ```
//!
//! The layout is not configurable; tests that need an ephemeral location pass
//! an explicit path to [`crate::IntelligenceStore::open`] instead. None of
//! these helpers create directories; the CLI bootstraps the layout before
//! first use.

use std::path::PathBuf;

use crate::errors::{IntelError, Result};

/// Filename of the persisted intelligence document.
pub const INTELLIGENCE_FILENAME: &str = "github-intelligence.json";

/// Filename of the external scanner executable.
pub const SCANNER_FILENAME: &str = "github-tracker.sh";

fn ghintel_home() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".ghintel"))
        .ok_or_else(|| IntelError::io("could not determine home directory"))
}

/// Directory holding the intelligence document.
pub fn memory_dir() -> Result<PathBuf> {
    Ok(ghintel_home()?.join("memory"))
}

/// Default path of the intelligence document.
pub fn intelligence_file() -> Result<PathBuf> {
    Ok(memory_dir()?.join(INTELLIGENCE_FILENAME))
}

/// Scratch directory used by the external scanner.
pub fn cache_dir() -> Result<PathBuf> {
    Ok(ghintel_home()?.join("cache").join("github"))
}

/// Path of the external scanner executable.
pub fn scanner_script() -> Result<PathBuf> {
    Ok(ghintel_home()?.join("scripts").join(SCANNER_FILENAME))
}
