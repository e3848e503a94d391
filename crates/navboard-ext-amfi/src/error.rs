//! Error types for portal access.

use std::path::PathBuf;

use thiserror::Error;

/// A specialized Result type for portal operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Errors raised while configuring or talking to the portal.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The HTTP request could not be completed.
    #[error("request to {url} failed: {source}")]
    Request {
        /// Requested URL.
        url: String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// The portal answered with a non-success status.
    #[error("portal returned HTTP {status} for {url}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The configured endpoint is not a valid URL.
    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint {
        /// Configured endpoint.
        endpoint: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        /// Config file path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::PortalConfig`].
    #[error("invalid config {path}: {source}")]
    ConfigParse {
        /// Config file path.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}
