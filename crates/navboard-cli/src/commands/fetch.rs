//! Fetch command implementation.
//!
//! Downloads the NAV history report for one day and displays it.

use clap::Args;

use navboard_core::read_report;
use navboard_ext_amfi::{format_report_date, yesterday, PortalClient};

use crate::commands::{display, parse_date, Session};
use crate::error::CliResult;

/// Arguments for the fetch command.
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Report date (YYYY-MM-DD or DD-Mon-YYYY). Defaults to yesterday.
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Execute the fetch command.
pub fn execute(args: FetchArgs, session: &Session) -> CliResult<()> {
    let date = match args.date.as_deref() {
        Some(s) => parse_date(s)?,
        None => yesterday(),
    };
    tracing::info!(date = %format_report_date(date), "fetching NAV report");

    let client = PortalClient::new(session.config.clone())?;
    let body = client.fetch(date)?;
    let report = read_report(body.as_slice(), session.config.category_matcher())?;

    display(report, session)?;
    Ok(())
}
