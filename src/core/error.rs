//! Error types for triage engine operations.

use thiserror::Error;

/// Errors produced by the triage engine.
///
/// Every variant is recoverable: the operation that raised it leaves the engine
/// untouched, because validation runs before any structural change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriageError {
    /// A required field was empty after trimming.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    /// Severity fell outside the accepted 1-10 range.
    #[error("severity must be between 1 and 10, got {0}")]
    SeverityOutOfRange(i64),
    /// Another live patient already uses this code.
    #[error("patient code {0} already exists")]
    DuplicateCode(String),
    /// Admission time is not an ISO-8601 timestamp.
    #[error("admission time must be an ISO-8601 timestamp: {0}")]
    InvalidTimestamp(String),
    /// Engine configuration was rejected.
    #[error("config invalid: {0}")]
    Config(String),
}

/// Coarse classification of [`TriageError`] for callers translating errors
/// into responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing field, severity out of range, or duplicate code.
    Validation,
    /// Unparsable admission timestamp.
    Format,
    /// Rejected configuration.
    Config,
}

impl TriageError {
    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingField(_) | Self::SeverityOutOfRange(_) | Self::DuplicateCode(_) => {
                ErrorKind::Validation
            }
            Self::InvalidTimestamp(_) => ErrorKind::Format,
            Self::Config(_) => ErrorKind::Config,
        }
    }

    /// True when the error stems from caller input and maps to a 4xx-style response.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::Validation | ErrorKind::Format)
    }
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
