//! Error types for report parsing.

use thiserror::Error;

/// A specialized Result type for report parsing.
pub type NavResult<T> = Result<T, NavError>;

/// Errors raised while reading a NAV report.
///
/// Malformed rows are never reported here; the tree builder drops them.
/// Only failures of the underlying record source abort a parse.
#[derive(Error, Debug)]
pub enum NavError {
    /// The delimited record stream could not be read.
    #[error("Failed to read report record {record}: {source}")]
    Read {
        /// 1-based position of the record that failed.
        record: u64,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// A field opens a quote that is not closed on the same line, or holds a
    /// stray quote.
    #[error("Unbalanced quote in report record {record}, field {field}")]
    Quote {
        /// 1-based position of the offending record.
        record: u64,
        /// 1-based position of the offending field.
        field: usize,
    },

    /// IO error from the input stream.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NavError {
    /// Creates a read error for the given record position.
    pub fn read(record: u64, source: csv::Error) -> Self {
        Self::Read { record, source }
    }
}
