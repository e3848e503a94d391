//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date: {0}. Use YYYY-MM-DD or DD-Mon-YYYY.")]
    InvalidDate(String),

    /// Report download failed.
    #[error(transparent)]
    Fetch(#[from] navboard_ext_amfi::FetchError),

    /// Report could not be read.
    #[error(transparent)]
    Report(#[from] navboard_core::NavError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

impl From<csv::Error> for CliError {
    fn from(e: csv::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
