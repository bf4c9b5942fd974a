//! External scanner invocation.
//!
//! The scan itself is an opaque executable (`~/.ghintel/scripts/`) that
//! rewrites the intelligence file as a side effect. This module only launches
//! it and propagates failure; callers re-open the store afterwards to observe
//! the refreshed state.

use std::path::Path;
use std::process::Command;

use crate::errors::{IntelError, Result};
use crate::paths;

/// Run the scanner at the fixed default path.
pub fn run_scan() -> Result<()> {
    run_scan_at(&paths::scanner_script()?)
}

/// Run the scanner at an explicit path with the single argument `scan`.
///
/// Stdio is inherited, so the scanner's own output reaches the terminal
/// unmodified. A spawn failure (including a missing executable) and a
/// non-zero exit status are both fatal; there are no retries.
pub fn run_scan_at(script: &Path) -> Result<()> {
    tracing::info!("running scanner {}", script.display());
    let status = Command::new(script).arg("scan").status().map_err(|e| {
        IntelError::subprocess_with_source(format!("launching {}", script.display()), e)
    })?;

    if !status.success() {
        return Err(IntelError::subprocess(format!(
            "{} failed with {status}",
            script.display()
        )));
    }

    tracing::info!("scanner finished");
    Ok(())
}
