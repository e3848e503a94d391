//! Report date selection.

use chrono::{Local, NaiveDate};

/// Date format used by the portal, e.g. `17-Oct-2026`.
pub const REPORT_DATE_FORMAT: &str = "%d-%b-%Y";

/// The report published for `today` covers the previous calendar day.
pub fn report_date(today: NaiveDate) -> NaiveDate {
    today.pred_opt().unwrap_or(today)
}

/// Yesterday in local time.
pub fn yesterday() -> NaiveDate {
    report_date(Local::now().date_naive())
}

/// Renders a date the way the portal expects it.
pub fn format_report_date(date: NaiveDate) -> String {
    date.format(REPORT_DATE_FORMAT).to_string()
}
