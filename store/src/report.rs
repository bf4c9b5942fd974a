//! Report rendering over an intelligence snapshot.
//!
//! Pure functions over [`IntelligenceStore`]: the human-readable actionable
//! summary and per-repository health classification, plus the machine-readable
//! digest polled by the scheduling daemon. Nothing here mutates the store.

use serde::Serialize;

use crate::store::{IntelligenceStore, now_utc};
use crate::types::{Metrics, PRIORITY_HIGH};

/// `action_needed` trips when uncommitted files exceed this count.
pub const UNCOMMITTED_ACTION_THRESHOLD: u64 = 10;

/// `action_needed` trips when unpushed commits exceed this count.
pub const UNPUSHED_ACTION_THRESHOLD: u64 = 5;

/// Health classification for a single repository.
///
/// Serializes with a `status` discriminator so consumers can switch on
/// `"unknown"` / `"healthy"` / `"needs_attention"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RepoHealth {
    Unknown {
        message: String,
    },
    Healthy {
        message: String,
    },
    NeedsAttention {
        issues: Vec<String>,
        suggestions: Vec<String>,
    },
}

/// Digest polled periodically by the external scheduler.
///
/// Only computes the `action_needed` boolean; acting on it is the
/// scheduler's business.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaemonReport {
    pub timestamp: String,
    pub action_needed: bool,
    pub metrics: Metrics,
    pub high_priority_count: u64,
    pub repos_needing_attention: u64,
}

/// Multi-line human-readable summary: header, metrics counters, high
/// priority actions, and repositories with pending work. Sections with no
/// entries are omitted entirely.
pub fn actionable_summary(store: &IntelligenceStore) -> String {
    let metrics = store.metrics();
    let mut out = String::new();

    out.push_str("GitHub Intelligence Summary\n");
    out.push_str(&"=".repeat(40));
    out.push_str("\n\n");

    out.push_str("Metrics:\n");
    out.push_str(&format!("  Total repos: {}\n", metrics.total_repos));
    out.push_str(&format!(
        "  Uncommitted files: {}\n",
        metrics.uncommitted_files
    ));
    out.push_str(&format!(
        "  Unpushed commits: {}\n",
        metrics.unpushed_commits
    ));
    out.push_str(&format!("  Open PRs: {}\n", metrics.open_prs));

    let high = store.suggestions(Some(PRIORITY_HIGH));
    if !high.is_empty() {
        out.push_str("\nHIGH PRIORITY ACTIONS:\n");
        for suggestion in high {
            out.push_str(&format!("  {}: {}\n", suggestion.repo, suggestion.message));
        }
    }

    let attention = store.repos_needing_attention();
    if !attention.is_empty() {
        out.push_str("\nRepositories Needing Attention:\n");
        for entry in attention {
            let mut parts = Vec::new();
            if entry.uncommitted_files > 0 {
                parts.push(format!("{} uncommitted", entry.uncommitted_files));
            }
            if entry.unpushed_commits > 0 {
                parts.push(format!("{} unpushed", entry.unpushed_commits));
            }
            out.push_str(&format!("  {}: {}\n", entry.name, parts.join(", ")));
        }
    }

    out
}

/// Classify one repository's health.
///
/// Issue strings are appended in fixed order (uncommitted, unpushed, stale
/// branches) so output is deterministic for a given document.
pub fn repo_health(store: &IntelligenceStore, name: &str) -> RepoHealth {
    let Some(repo) = store.repo_status(name) else {
        return RepoHealth::Unknown {
            message: format!("Repository {name} not tracked"),
        };
    };

    let mut issues = Vec::new();
    if repo.status.uncommitted_files > 0 {
        issues.push(format!(
            "{} uncommitted files",
            repo.status.uncommitted_files
        ));
    }
    if repo.status.unpushed_commits > 0 {
        issues.push(format!("{} unpushed commits", repo.status.unpushed_commits));
    }
    if !repo.stale_branches.is_empty() {
        issues.push(format!("{} stale branches", repo.stale_branches.len()));
    }

    if issues.is_empty() {
        RepoHealth::Healthy {
            message: "No issues detected".to_string(),
        }
    } else {
        RepoHealth::NeedsAttention {
            issues,
            suggestions: repo.suggestions.clone(),
        }
    }
}

/// Build the scheduler digest from the current snapshot.
pub fn daemon_report(store: &IntelligenceStore) -> DaemonReport {
    let metrics = store.metrics();
    DaemonReport {
        timestamp: now_utc(),
        action_needed: metrics.uncommitted_files > UNCOMMITTED_ACTION_THRESHOLD
            || metrics.unpushed_commits > UNPUSHED_ACTION_THRESHOLD,
        metrics,
        high_priority_count: store.suggestions(Some(PRIORITY_HIGH)).len() as u64,
        repos_needing_attention: store.repos_needing_attention().len() as u64,
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::types::{IntelligenceDocument, RepositoryStatus, Suggestion, SyncStatus};

    fn make_repo(uncommitted: u64, unpushed: u64, stale: &[&str]) -> RepositoryStatus {
        RepositoryStatus {
            status: SyncStatus {
                uncommitted_files: uncommitted,
                unpushed_commits: unpushed,
            },
            stale_branches: stale.iter().map(|b| b.to_string()).collect(),
            ..Default::default()
        }
    }

    fn make_suggestion(repo: &str, message: &str, priority: &str) -> Suggestion {
        Suggestion {
            repo: repo.to_string(),
            message: message.to_string(),
            priority: priority.to_string(),
            ..Default::default()
        }
    }

    fn store_with(doc: &IntelligenceDocument) -> (tempfile::TempDir, IntelligenceStore) {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("github-intelligence.json");
        std::fs::write(&path, serde_json::to_string_pretty(doc).unwrap()).unwrap();
        let store = IntelligenceStore::open(path).unwrap();
        (tmp, store)
    }

    fn store_with_metrics(
        uncommitted: u64,
        unpushed: u64,
    ) -> (tempfile::TempDir, IntelligenceStore) {
        let doc = IntelligenceDocument {
            metrics: Metrics {
                uncommitted_files: uncommitted,
                unpushed_commits: unpushed,
                ..Default::default()
            },
            ..Default::default()
        };
        store_with(&doc)
    }

    // ── actionable_summary ───────────────────────────────────────────────

    #[test]
    fn summary_of_empty_store_is_metrics_only() {
        let (_tmp, store) = store_with(&IntelligenceDocument::default());

        let expected = "GitHub Intelligence Summary\n\
                        ========================================\n\
                        \n\
                        Metrics:\n\
                        \x20 Total repos: 0\n\
                        \x20 Uncommitted files: 0\n\
                        \x20 Unpushed commits: 0\n\
                        \x20 Open PRs: 0\n";
        assert_eq!(actionable_summary(&store), expected);
    }

    #[test]
    fn summary_lists_high_priority_and_attention_sections() {
        let doc = IntelligenceDocument {
            repositories: [
                ("api".to_string(), make_repo(3, 2, &[])),
                ("clean".to_string(), make_repo(0, 0, &[])),
            ]
            .into_iter()
            .collect(),
            suggestions: vec![
                make_suggestion("api", "commit pending work", "high"),
                make_suggestion("api", "tidy branches", "low"),
            ],
            metrics: Metrics {
                total_repos: 2,
                uncommitted_files: 3,
                unpushed_commits: 2,
                ..Default::default()
            },
            ..Default::default()
        };
        let (_tmp, store) = store_with(&doc);

        let summary = actionable_summary(&store);
        assert!(summary.contains("Total repos: 2"));
        assert!(summary.contains("HIGH PRIORITY ACTIONS:\n  api: commit pending work\n"));
        assert!(!summary.contains("tidy branches"));
        assert!(
            summary.contains("Repositories Needing Attention:\n  api: 3 uncommitted, 2 unpushed\n")
        );
        assert!(!summary.contains("clean:"));
    }

    #[test]
    fn summary_omits_zero_count_fragments() {
        let doc = IntelligenceDocument {
            repositories: [
                ("only-uncommitted".to_string(), make_repo(4, 0, &[])),
                ("only-unpushed".to_string(), make_repo(0, 2, &[])),
            ]
            .into_iter()
            .collect(),
            ..Default::default()
        };
        let (_tmp, store) = store_with(&doc);

        let summary = actionable_summary(&store);
        assert!(summary.contains("  only-uncommitted: 4 uncommitted\n"));
        assert!(summary.contains("  only-unpushed: 2 unpushed\n"));
        assert!(!summary.contains("only-uncommitted: 4 uncommitted,"));
    }

    // ── repo_health ──────────────────────────────────────────────────────

    #[test]
    fn health_of_untracked_repo_is_unknown() {
        let (_tmp, store) = store_with(&IntelligenceDocument::default());

        let health = repo_health(&store, "ghost");
        assert_eq!(
            health,
            RepoHealth::Unknown {
                message: "Repository ghost not tracked".to_string(),
            }
        );

        let json = serde_json::to_value(&health).unwrap();
        assert_eq!(json["status"], "unknown");
    }

    #[test]
    fn health_of_clean_repo_is_healthy() {
        let doc = IntelligenceDocument {
            repositories: [("clean".to_string(), make_repo(0, 0, &[]))]
                .into_iter()
                .collect(),
            ..Default::default()
        };
        let (_tmp, store) = store_with(&doc);

        let health = repo_health(&store, "clean");
        assert_eq!(
            health,
            RepoHealth::Healthy {
                message: "No issues detected".to_string(),
            }
        );

        let json = serde_json::to_value(&health).unwrap();
        assert_eq!(json["status"], "healthy");
    }

    #[test]
    fn health_issues_are_ordered_and_carry_repo_suggestions() {
        let doc = IntelligenceDocument {
            repositories: [(
                "messy".to_string(),
                RepositoryStatus {
                    suggestions: vec!["run the cleanup script".to_string()],
                    ..make_repo(7, 2, &["old-feature", "spike"])
                },
            )]
            .into_iter()
            .collect(),
            ..Default::default()
        };
        let (_tmp, store) = store_with(&doc);

        let health = repo_health(&store, "messy");
        assert_eq!(
            health,
            RepoHealth::NeedsAttention {
                issues: vec![
                    "7 uncommitted files".to_string(),
                    "2 unpushed commits".to_string(),
                    "2 stale branches".to_string(),
                ],
                suggestions: vec!["run the cleanup script".to_string()],
            }
        );

        let json = serde_json::to_value(&health).unwrap();
        assert_eq!(json["status"], "needs_attention");
        assert_eq!(json["issues"][0], "7 uncommitted files");
    }

    #[test]
    fn stale_branches_alone_need_attention() {
        let doc = IntelligenceDocument {
            repositories: [("tidy-ish".to_string(), make_repo(0, 0, &["stale"]))]
                .into_iter()
                .collect(),
            ..Default::default()
        };
        let (_tmp, store) = store_with(&doc);

        let health = repo_health(&store, "tidy-ish");
        assert_eq!(
            health,
            RepoHealth::NeedsAttention {
                issues: vec!["1 stale branches".to_string()],
                suggestions: Vec::new(),
            }
        );
    }

    // ── daemon_report ────────────────────────────────────────────────────

    #[test]
    fn action_needed_is_strictly_greater_than_thresholds() {
        let (_tmp, store) = store_with_metrics(11, 0);
        assert!(daemon_report(&store).action_needed);

        let (_tmp, store) = store_with_metrics(10, 5);
        assert!(!daemon_report(&store).action_needed);

        let (_tmp, store) = store_with_metrics(0, 6);
        assert!(daemon_report(&store).action_needed);
    }

    #[test]
    fn daemon_report_counts_and_timestamp() {
        let doc = IntelligenceDocument {
            repositories: [
                ("a".to_string(), make_repo(1, 0, &[])),
                ("b".to_string(), make_repo(0, 0, &[])),
            ]
            .into_iter()
            .collect(),
            suggestions: vec![
                make_suggestion("a", "push", "high"),
                make_suggestion("a", "later", "low"),
            ],
            metrics: Metrics {
                total_repos: 2,
                uncommitted_files: 1,
                ..Default::default()
            },
            ..Default::default()
        };
        let (_tmp, store) = store_with(&doc);

        let report = daemon_report(&store);
        assert_eq!(report.high_priority_count, 1);
        assert_eq!(report.repos_needing_attention, 1);
        assert_eq!(report.metrics, store.metrics());
        DateTime::parse_from_rfc3339(&report.timestamp).unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["action_needed"], false);
        assert_eq!(json["metrics"]["total_repos"], 2);
    }
}
