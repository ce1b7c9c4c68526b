//! Error types for the csvsql library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for csvsql operations.
#[derive(Debug, Error)]
pub enum CsvSqlError {
    /// Error opening, reading, or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV stream failed part way through a file.
    #[error("Read failure: {0}")]
    Read(#[from] csv::Error),

    /// The input directory could not be listed.
    #[error("Cannot read input directory '{path}': {source}")]
    InputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CsvSqlError {
    /// Wrap an IO error with the path it occurred on.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CsvSqlError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for csvsql operations.
pub type Result<T> = std::result::Result<T, CsvSqlError>;
