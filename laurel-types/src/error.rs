use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the laurel workspace.
///
/// The interval engine itself never fails; these errors come from the import
/// boundary (malformed rows, CSV structure, I/O) and from configuration
/// validation in the orchestrator builder.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LaurelError {
    /// A single input row could not be turned into an award record.
    #[error("invalid record at line {line}: {reason}")]
    InvalidRecord {
        /// 1-based line number of the offending row in the source.
        line: u64,
        /// Human-readable description of what was wrong with the row.
        reason: String,
    },

    /// The CSV source is structurally malformed (ragged rows, bad encoding, missing header).
    #[error("csv error: {0}")]
    Csv(String),

    /// Reading the underlying source failed.
    #[error("io error: {0}")]
    Io(String),

    /// Invalid input argument or configuration value.
    #[error("invalid argument: {0}")]
    InvalidArg(String),
}

impl LaurelError {
    /// Helper: build an `InvalidRecord` error for a line and reason.
    pub fn invalid_record(line: u64, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            line,
            reason: reason.into(),
        }
    }

    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Line number of the offending row, when the error is tied to one.
    #[must_use]
    pub const fn line(&self) -> Option<u64> {
        match self {
            Self::InvalidRecord { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LaurelError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
