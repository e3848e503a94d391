//! Portal configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use navboard_core::KeywordMatcher;

use crate::error::{FetchError, FetchResult};

/// Portal configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalConfig {
    /// NAV history report endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Query parameter carrying the report date
    #[serde(default = "default_date_param")]
    pub date_param: String,

    /// Substring that marks a scheme-category header
    #[serde(default = "default_category_marker")]
    pub category_marker: String,

    /// Request timeout in seconds; unset means the download may take as long
    /// as the portal needs
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_endpoint() -> String {
    "https://portal.amfiindia.com/DownloadNAVHistoryReport_Po.aspx".to_string()
}

fn default_date_param() -> String {
    "frmdt".to_string()
}

fn default_category_marker() -> String {
    navboard_core::DEFAULT_CATEGORY_MARKER.to_string()
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            date_param: default_date_param(),
            category_marker: default_category_marker(),
            request_timeout_secs: None,
        }
    }
}

impl PortalConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> FetchResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| FetchError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| FetchError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from `path` if it exists, otherwise use defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> FetchResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            info!("Loading configuration from {}", path.display());
            Self::from_file(path)
        } else {
            info!("Using default configuration");
            Ok(Self::default())
        }
    }

    /// Timeout applied to the whole download, if any.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Category-header matcher for this configuration.
    pub fn category_matcher(&self) -> KeywordMatcher {
        KeywordMatcher::new(self.category_marker.clone())
    }
}
