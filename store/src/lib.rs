//! GitHub intelligence store and reporting.
//!
//! Owns the on-disk JSON document describing tracked repositories,
//! suggestions, alerts, and aggregate metrics, and renders reports from it.
//! The document is written by an external scanner and read here with
//! load-on-open / explicit-save semantics; everything is synchronous and
//! fail-fast.
//!
//! - [`store::IntelligenceStore`]: document access, queries, and the
//!   append-only alert log
//! - [`report`]: rendered summaries plus the scheduler digest
//! - [`scanner`]: launches the external scan executable
//! - [`paths`]: the fixed `~/.ghintel` layout

pub mod errors;
pub mod paths;
pub mod report;
pub mod scanner;
pub mod store;
pub mod types;

pub use errors::{ErrorCategory, IntelError, Result};
pub use store::{IntelligenceStore, RepoAttention};
pub use types::{Alert, IntelligenceDocument, Metrics, RepositoryStatus, Suggestion, SyncStatus};
