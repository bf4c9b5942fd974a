//! Disk persistence and query surface for the intelligence document.
//!
//! The store follows load-on-open / explicit-save semantics: construction
//! reads the backing file (a missing file yields the defaulted document) and
//! queries run against the in-memory snapshot; `save` rewrites the whole
//! file. There is no locking; concurrent writers are last-writer-wins.

use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};

use crate::errors::{IntelError, Result};
use crate::paths;
use crate::types::{Alert, IntelligenceDocument, Metrics, RepositoryStatus, Suggestion};

/// Current UTC instant in the persisted timestamp format
/// (ISO-8601 with microseconds and a `Z` suffix).
pub(crate) fn now_utc() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// A repository with pending local work, from
/// [`IntelligenceStore::repos_needing_attention`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoAttention {
    pub name: String,
    pub uncommitted_files: u64,
    pub unpushed_commits: u64,
}

/// In-memory handle over the persisted intelligence document.
#[derive(Debug)]
pub struct IntelligenceStore {
    path: PathBuf,
    doc: IntelligenceDocument,
}

impl IntelligenceStore {
    /// Open the store at the fixed default path (`~/.ghintel/memory/`).
    pub fn open_default() -> Result<Self> {
        Self::open(paths::intelligence_file()?)
    }

    /// Open the store at an explicit backing path.
    ///
    /// A missing file yields the defaulted document; any other read failure
    /// and any parse failure is fatal.
    pub fn open(path: PathBuf) -> Result<Self> {
        let doc = match std::fs::read_to_string(&path) {
            Ok(data) => {
                tracing::debug!("loaded {} ({} bytes)", path.display(), data.len());
                serde_json::from_str(&data).map_err(|e| {
                    IntelError::malformed_with_source(
                        format!("{} is not a valid intelligence document", path.display()),
                        e,
                    )
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no intelligence file at {}, starting empty", path.display());
                IntelligenceDocument::default()
            }
            Err(e) => {
                return Err(IntelError::io_with_source(
                    format!("reading {}", path.display()),
                    e,
                ));
            }
        };
        Ok(Self { path, doc })
    }

    /// Backing path accessor.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The full in-memory document.
    pub fn document(&self) -> &IntelligenceDocument {
        &self.doc
    }

    // ── Write operations ─────────────────────────────────────────────────

    /// Persist the whole document, stamping `last_updated` with now.
    ///
    /// The backing directory must already exist; the CLI creates it at
    /// startup and library consumers are expected to do the same.
    pub fn save(&mut self) -> Result<()> {
        self.doc.last_updated = now_utc();
        let json = serde_json::to_string_pretty(&self.doc).map_err(|e| {
            IntelError::malformed_with_source("intelligence document failed to serialize", e)
        })?;
        self.atomic_write(json.as_bytes())?;
        tracing::debug!("wrote {} ({} bytes)", self.path.display(), json.len());
        Ok(())
    }

    /// Append an alert, stamping its `timestamp`, and persist immediately.
    pub fn add_alert(&mut self, mut alert: Alert) -> Result<()> {
        alert.timestamp = now_utc();
        self.doc.alerts.push(alert);
        tracing::debug!("alert appended ({} total)", self.doc.alerts.len());
        self.save()
    }

    /// Atomically write `data` to the backing path via a `.tmp` sibling.
    fn atomic_write(&self, data: &[u8]) -> Result<()> {
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, data)
            .map_err(|e| IntelError::io_with_source(format!("writing {}", tmp.display()), e))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| {
            IntelError::io_with_source(
                format!("renaming {} to {}", tmp.display(), self.path.display()),
                e,
            )
        })?;
        Ok(())
    }

    // ── Query operations ─────────────────────────────────────────────────

    /// Suggestions, optionally filtered to an exact `priority` match,
    /// in document order.
    pub fn suggestions(&self, priority: Option<&str>) -> Vec<&Suggestion> {
        self.doc
            .suggestions
            .iter()
            .filter(|s| priority.is_none_or(|p| s.priority == p))
            .collect()
    }

    /// Status of a single tracked repository, `None` when untracked.
    pub fn repo_status(&self, name: &str) -> Option<&RepositoryStatus> {
        self.doc.repositories.get(name)
    }

    /// Snapshot of the aggregate counters.
    pub fn metrics(&self) -> Metrics {
        self.doc.metrics
    }

    /// Repositories with uncommitted or unpushed work, ranked by the
    /// combined count, descending. The sort is stable, so repositories with
    /// equal totals keep the document's insertion order.
    pub fn repos_needing_attention(&self) -> Vec<RepoAttention> {
        let mut entries: Vec<(&String, &RepositoryStatus)> = self
            .doc
            .repositories
            .iter()
            .filter(|(_, repo)| repo.status.has_pending())
            .collect();
        entries.sort_by_key(|(_, repo)| std::cmp::Reverse(repo.status.pending_total()));
        entries
            .into_iter()
            .map(|(name, repo)| RepoAttention {
                name: name.clone(),
                uncommitted_files: repo.status.uncommitted_files,
                unpushed_commits: repo.status.unpushed_commits,
            })
            .collect()
    }
}
