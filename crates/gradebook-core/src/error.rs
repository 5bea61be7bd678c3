use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Please enter a valid number: {input:?}")]
    Parse { input: String },

    #[error("Scores must be between 0 and 100 (got {value})")]
    Range { value: i64 },

    #[error("Number of scores must be between 1 and {max} (got {count})")]
    CountRange { count: i64, max: usize },

    #[error("Expected {expected} scores, got {actual}")]
    Cardinality { expected: usize, actual: usize },

    #[error("Student name cannot be empty")]
    Identity,

    #[error("No score fields configured; set the number of scores first")]
    NotConfigured,

    #[error("Score slot {index} does not exist ({count} slots configured)")]
    UnknownSlot { index: usize, count: usize },

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification used by front ends to pick a message style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    Range,
    Cardinality,
    Identity,
    State,
    Config,
    Unexpected,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse { .. } => ErrorKind::Parse,
            Self::Range { .. } | Self::CountRange { .. } => ErrorKind::Range,
            Self::Cardinality { .. } => ErrorKind::Cardinality,
            Self::Identity => ErrorKind::Identity,
            Self::NotConfigured | Self::UnknownSlot { .. } => ErrorKind::State,
            Self::ConfigParseError(_) => ErrorKind::Config,
            Self::Io(_) | Self::Json(_) => ErrorKind::Unexpected,
        }
    }

    /// True for errors the user can fix by correcting the form input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::Parse
                | ErrorKind::Range
                | ErrorKind::Cardinality
                | ErrorKind::Identity
                | ErrorKind::State
        )
    }
}

/// A failed log append. Not an [`Error`]: the record it belongs to is
/// already committed in memory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to write {}: {message}", path.display())]
pub struct PersistenceWarning {
    pub path: PathBuf,
    pub message: String,
}
