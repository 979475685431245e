//! Formatting errors

use barline_types::SourceKind;
use thiserror::Error;

/// Errors raised while building or running an item formatter.
///
/// An unavailable data source is not an error; formatters report it as
/// `Ok(None)`.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("{expected} formatter received a {actual} snapshot")]
    KindMismatch {
        expected: SourceKind,
        actual: SourceKind,
    },

    #[error("malformed {source_kind} snapshot: {reason}")]
    MalformedSnapshot {
        source_kind: SourceKind,
        reason: String,
    },

    #[error("no formatter registered for {0}")]
    UnknownFormatter(String),

    #[error("unknown timezone: {0}")]
    InvalidTimezone(String),

    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

impl FormatError {
    pub fn malformed(source_kind: SourceKind, reason: impl Into<String>) -> Self {
        FormatError::MalformedSnapshot {
            source_kind,
            reason: reason.into(),
        }
    }
}

pub type FormatResult<T> = Result<T, FormatError>;
