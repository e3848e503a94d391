//! CLI command implementations.

pub mod fetch;
pub mod parse;

// Re-export submodules for convenience
pub use fetch::FetchArgs;
pub use parse::ParseArgs;

use std::io;

use chrono::NaiveDate;
use tracing::debug;

use navboard_core::{total_entries, ParsedReport, TreeFilter};
use navboard_ext_amfi::{PortalConfig, REPORT_DATE_FORMAT};

use crate::cli::{Cli, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::output::{self, print_info, print_warning};

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Session {
    /// Portal configuration.
    pub config: PortalConfig,
    /// Output format.
    pub format: OutputFormat,
    /// Name filters applied before display.
    pub filter: TreeFilter,
    /// Suppress status messages.
    pub quiet: bool,
}

impl Session {
    /// Builds the session from global arguments.
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        let config = PortalConfig::load_or_default(&cli.config)?;

        let mut filter = TreeFilter::new();
        if let Some(needle) = &cli.category {
            filter = filter.with_category(needle.as_str());
        }
        if let Some(needle) = &cli.fund_house {
            filter = filter.with_fund_house(needle.as_str());
        }

        Ok(Self {
            config,
            format: cli.format,
            filter,
            quiet: cli.quiet,
        })
    }
}

/// Filters a parsed report and writes it to stdout.
pub fn display(report: ParsedReport, session: &Session) -> CliResult<()> {
    debug!(stats = ?report.stats, "parse statistics");

    let categories = session.filter.apply(report.categories);
    if categories.is_empty() && !session.quiet {
        print_warning("No NAV entries found");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::render(&categories, session.format, &mut out)?;

    if !session.quiet && session.format == OutputFormat::Table && !categories.is_empty() {
        print_info(&format!(
            "{} entries across {} scheme categories",
            total_entries(&categories),
            categories.len()
        ));
    }
    Ok(())
}

/// Parses a date in YYYY-MM-DD or the portal's DD-Mon-YYYY format.
pub fn parse_date(s: &str) -> CliResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, REPORT_DATE_FORMAT))
        .map_err(|_| CliError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(
            parse_date("2024-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
    }

    #[test]
    fn test_parse_portal_date() {
        assert_eq!(
            parse_date("17-Oct-2026").unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
        );
    }

    #[test]
    fn test_parse_invalid_date() {
        assert!(matches!(parse_date("2024/01/15"), Err(CliError::InvalidDate(_))));
        assert!(matches!(parse_date("2024-02-30"), Err(CliError::InvalidDate(_))));
    }
}
