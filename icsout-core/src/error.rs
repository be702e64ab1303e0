//! Error types for icsout.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading, parsing or reporting a calendar.
#[derive(Error, Debug)]
pub enum IcsoutError {
    #[error("Unable to open {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed event at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Invalid date '{0}'. Expected yyyy/mm/dd or YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for icsout operations.
pub type IcsoutResult<T> = Result<T, IcsoutError>;
