//! Error types for the transaction reporter.

use thiserror::Error;

/// Result type alias for reporting operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while generating a report.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Input file does not exist
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading error that aborts the pass (per-row errors are
    /// counted and skipped instead)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unrecognized output format name
    #[error("unknown output format `{0}` (expected `text` or `json`)")]
    UnknownFormat(String),

    /// Command-line usage error
    #[error("{0}")]
    InvalidArguments(String),
}

impl ReportError {
    /// Maps the error onto the CLI exit-code contract:
    /// 1 for usage errors, 2 for a missing input file, 3 for anything
    /// that fails mid-processing.
    pub fn exit_code(&self) -> i32 {
        match self {
            ReportError::InvalidArguments(_) | ReportError::UnknownFormat(_) => 1,
            ReportError::FileNotFound(_) => 2,
            ReportError::Io(_) | ReportError::Csv(_) | ReportError::Json(_) => 3,
        }
    }
}
