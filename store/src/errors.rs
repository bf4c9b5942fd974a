//! Error types for the intelligence store.
//!
//! The surface is intentionally fail-fast: a missing backing file or an
//! untracked repository name is never an error (callers get defaults or
//! `None`), while a corrupt file, an unreadable/unwritable path, or a failing
//! scanner subprocess surfaces immediately with no retries.

use thiserror::Error;

/// Error category for structured logging and exit-path mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Backing file exists but is not a valid intelligence document
    MalformedState,
    /// Cannot read or write the backing path
    IoFailure,
    /// External scanner could not be launched or exited non-zero
    SubprocessFailure,
}

impl ErrorCategory {
    /// Machine-readable code for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MalformedState => "MALFORMED_STATE",
            Self::IoFailure => "IO_FAILURE",
            Self::SubprocessFailure => "SUBPROCESS_FAILURE",
        }
    }
}

/// Intelligence store error with category and context
#[derive(Debug, Error)]
pub enum IntelError {
    #[error("malformed intelligence file: {message}")]
    MalformedState {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("I/O failure: {message}")]
    Io {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("scanner failure: {message}")]
    Subprocess {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl IntelError {
    /// Get the error category
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MalformedState { .. } => ErrorCategory::MalformedState,
            Self::Io { .. } => ErrorCategory::IoFailure,
            Self::Subprocess { .. } => ErrorCategory::SubprocessFailure,
        }
    }

    /// Create a malformed-state error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedState {
            message: message.into(),
            source: None,
        }
    }

    /// Create a malformed-state error with source
    pub fn malformed_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::MalformedState {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a scanner subprocess error
    pub fn subprocess(message: impl Into<String>) -> Self {
        Self::Subprocess {
            message: message.into(),
            source: None,
        }
    }

    /// Create a scanner subprocess error with source
    pub fn subprocess_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Subprocess {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Result type for intelligence store operations
pub type Result<T> = std::result::Result<T, IntelError>;
