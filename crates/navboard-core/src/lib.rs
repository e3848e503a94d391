//! # Navboard Core
//!
//! Data model and parser for the semicolon-delimited NAV history report
//! published by the AMFI portal.
//!
//! The report has no explicit structure markers. Single-field lines are either
//! scheme-category headers or fund-house headers, eight-field lines are NAV
//! rows, and blank lines separate sections. [`TreeBuilder`] classifies each
//! record in one pass and produces a three-level tree:
//!
//! - [`SchemeCategory`] owns [`FundHouse`] groups
//! - [`FundHouse`] owns [`FundEntry`] rows
//!
//! Fund houses without rows and categories without fund houses are never
//! part of the result.
//!
//! ## Example
//!
//! ```rust
//! use navboard_core::prelude::*;
//!
//! let report = "Open Ended Schemes\n\
//!               ABC Mutual Fund\n\
//!               101;Scheme One;ISIN1;ISIN2;10.50;10.40;10.60;01-Jan-2024\n";
//!
//! let parsed = read_report(report.as_bytes(), KeywordMatcher::default()).unwrap();
//! assert_eq!(parsed.categories[0].name, "Open Ended Schemes");
//! assert_eq!(parsed.categories[0].fund_houses[0].entries[0].scheme_code, "101");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classify;
pub mod error;
pub mod filter;
pub mod model;
pub mod parser;

pub use classify::{classify, CategoryMatcher, KeywordMatcher, RecordKind, DEFAULT_CATEGORY_MARKER};
pub use error::{NavError, NavResult};
pub use filter::TreeFilter;
pub use model::{total_entries, FundEntry, FundHouse, SchemeCategory, FUND_RECORD_FIELDS};
pub use parser::{
    build_tree, read_report, read_report_path, ParseStats, ParsedReport, TreeBuilder,
    REPORT_DELIMITER,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::classify::{CategoryMatcher, KeywordMatcher};
    pub use crate::error::{NavError, NavResult};
    pub use crate::filter::TreeFilter;
    pub use crate::model::{FundEntry, FundHouse, SchemeCategory};
    pub use crate::parser::{build_tree, read_report, read_report_path, ParsedReport, TreeBuilder};
}
