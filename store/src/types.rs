//! Persisted document model for the intelligence file.
//!
//! Every struct tolerates missing fields at any nesting level: the document
//! is read and written by tooling on both older and newer schemas, so each
//! container defaults absent fields in one pass at deserialization time.
//! Unknown keys on [`Suggestion`] and [`Alert`] are preserved in a flattened
//! side-map so foreign attributes survive a load/save cycle.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Priority value that marks a suggestion as requiring action.
pub const PRIORITY_HIGH: &str = "high";

/// Root object persisted at the intelligence file path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntelligenceDocument {
    /// ISO-8601 UTC instant of the last save; empty when never saved.
    pub last_updated: String,
    /// Tracked repositories by name. Iteration order is the insertion order
    /// of the source document, which keeps report ordering deterministic.
    pub repositories: IndexMap<String, RepositoryStatus>,
    /// Written wholesale by the external scanner.
    pub suggestions: Vec<Suggestion>,
    /// Append-only; grown via `IntelligenceStore::add_alert`.
    pub alerts: Vec<Alert>,
    /// Aggregate counters, overwritten wholesale by the scanner.
    pub metrics: Metrics,
}

/// Per-repository state as captured by the scanner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryStatus {
    pub status: SyncStatus,
    pub stale_branches: Vec<String>,
    /// Repo-scoped suggestion strings, echoed verbatim in health reports.
    pub suggestions: Vec<String>,
}

/// Working-tree and remote-sync counters for one repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncStatus {
    pub uncommitted_files: u64,
    pub unpushed_commits: u64,
}

impl SyncStatus {
    /// True when the repository has any local work not yet committed or
    /// pushed.
    pub fn has_pending(self) -> bool {
        self.uncommitted_files > 0 || self.unpushed_commits > 0
    }

    /// Combined count used to rank repositories by urgency. Saturates at
    /// `u64::MAX` instead of wrapping.
    pub fn pending_total(self) -> u64 {
        self.uncommitted_files.saturating_add(self.unpushed_commits)
    }
}

/// A scanner-produced suggestion.
///
/// `priority` is an open string (`"high"`/`"medium"`/`"low"` by convention);
/// foreign documents may carry other values and must still parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Suggestion {
    pub repo: String,
    pub message: String,
    pub priority: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// An appended alert.
///
/// Callers supply any subset of the known fields plus arbitrary additional
/// attributes; `timestamp` is overwritten at append time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    pub timestamp: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Aggregate counters across all tracked repositories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metrics {
    pub total_repos: u64,
    pub uncommitted_files: u64,
    pub unpushed_commits: u64,
    pub open_prs: u64,
    pub open_issues: u64,
}
