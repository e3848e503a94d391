//! Blocking download of NAV history reports.

use chrono::NaiveDate;
use reqwest::blocking::Client;
use reqwest::Url;
use tracing::{debug, info};

use crate::config::PortalConfig;
use crate::date::format_report_date;
use crate::error::{FetchError, FetchResult};

/// Downloads reports from the portal.
///
/// Each call issues exactly one GET request. There is no retry, and no
/// timeout unless the configuration sets one.
#[derive(Debug, Clone)]
pub struct PortalClient {
    config: PortalConfig,
    http: Client,
}

impl PortalClient {
    /// Creates a client for the given configuration.
    pub fn new(config: PortalConfig) -> FetchResult<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { config, http })
    }

    /// The configuration in use.
    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    /// URL of the report for `date`.
    pub fn report_url(&self, date: NaiveDate) -> FetchResult<Url> {
        let mut url =
            Url::parse(&self.config.endpoint).map_err(|e| FetchError::InvalidEndpoint {
                endpoint: self.config.endpoint.clone(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut()
            .append_pair(&self.config.date_param, &format_report_date(date));
        Ok(url)
    }

    /// Downloads the raw report for `date`.
    pub fn fetch(&self, date: NaiveDate) -> FetchResult<Vec<u8>> {
        let url = self.report_url(date)?;
        info!(%url, "downloading NAV report");

        let request_error = |source: reqwest::Error| FetchError::Request {
            url: url.to_string(),
            source,
        };

        let response = self.http.get(url.clone()).send().map_err(request_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().map_err(request_error)?;
        debug!(bytes = body.len(), "report downloaded");
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_report_url() {
        let client = PortalClient::new(PortalConfig::default()).unwrap();
        let url = client.report_url(ymd(2024, 1, 1)).unwrap();

        assert_eq!(
            url.as_str(),
            "https://portal.amfiindia.com/DownloadNAVHistoryReport_Po.aspx?frmdt=01-Jan-2024"
        );
    }

    #[test]
    fn test_report_url_keeps_existing_query() {
        let config = PortalConfig {
            endpoint: "https://example.test/nav?type=1".to_string(),
            date_param: "from".to_string(),
            ..PortalConfig::default()
        };
        let url = PortalClient::new(config)
            .unwrap()
            .report_url(ymd(2026, 10, 17))
            .unwrap();

        assert_eq!(url.as_str(), "https://example.test/nav?type=1&from=17-Oct-2026");
    }

    #[test]
    fn test_invalid_endpoint() {
        let config = PortalConfig {
            endpoint: "not a url".to_string(),
            ..PortalConfig::default()
        };
        let err = PortalClient::new(config)
            .unwrap()
            .report_url(ymd(2024, 1, 1))
            .unwrap_err();

        assert!(matches!(err, FetchError::InvalidEndpoint { .. }));
    }
}
