//! Single-pass tree builder for NAV reports.
//!
//! [`TreeBuilder`] consumes records one at a time and keeps two cursors: the
//! open scheme category and the open fund house. Headers close whatever is
//! open, data rows append to the open fund house, and [`TreeBuilder::finish`]
//! closes both cursors at end of input.
//!
//! Empty fund houses and empty categories are elided when they close, so the
//! returned tree never needs re-filtering.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::StringRecord;
use serde::Serialize;
use tracing::{debug, trace};

use crate::classify::{classify, CategoryMatcher, RecordKind};
use crate::error::{NavError, NavResult};
use crate::model::{FundEntry, FundHouse, SchemeCategory};

/// Field delimiter of the portal's report format.
pub const REPORT_DELIMITER: u8 = b';';

// =============================================================================
// PARSE STATISTICS
// =============================================================================

/// Counters collected while building a tree.
///
/// These are diagnostics only; none of the counted conditions is an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Records consumed.
    pub records: u64,
    /// Blank single-field lines skipped.
    pub blank_lines: u64,
    /// Category headers seen.
    pub categories_opened: u64,
    /// Fund-house headers seen.
    pub fund_houses_opened: u64,
    /// Entries appended to a fund house.
    pub entries: u64,
    /// Data rows dropped because no fund house was open.
    pub orphan_rows: u64,
    /// Records with a field count other than 1 or 8.
    pub unrecognised_rows: u64,
    /// Fund houses closed without being attached to a category.
    pub fund_houses_elided: u64,
    /// Categories closed without any attached fund house.
    pub categories_elided: u64,
}

/// Finalized tree plus the statistics gathered while building it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedReport {
    /// Categories in input order.
    pub categories: Vec<SchemeCategory>,
    /// Parse diagnostics.
    pub stats: ParseStats,
}

// =============================================================================
// TREE BUILDER
// =============================================================================

/// Stateful record classifier and tree builder.
#[derive(Debug)]
pub struct TreeBuilder<M> {
    matcher: M,
    categories: Vec<SchemeCategory>,
    open_category: Option<SchemeCategory>,
    open_fund_house: Option<FundHouse>,
    stats: ParseStats,
}

impl<M: CategoryMatcher> TreeBuilder<M> {
    /// Creates a builder that recognises category headers with `matcher`.
    pub fn new(matcher: M) -> Self {
        Self {
            matcher,
            categories: Vec::new(),
            open_category: None,
            open_fund_house: None,
            stats: ParseStats::default(),
        }
    }

    /// Statistics gathered so far.
    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    /// Processes one record.
    pub fn push<S: AsRef<str>>(&mut self, fields: &[S]) {
        self.stats.records += 1;

        match classify(fields, &self.matcher) {
            RecordKind::Blank => {
                self.stats.blank_lines += 1;
            }
            RecordKind::CategoryHeader(name) => {
                self.stats.categories_opened += 1;
                self.close_category();
                trace!(category = name, "opening scheme category");
                self.open_category = Some(SchemeCategory::new(name));
            }
            RecordKind::FundHouseHeader(name) => {
                self.stats.fund_houses_opened += 1;
                self.close_fund_house();
                trace!(fund_house = name, "opening fund house");
                self.open_fund_house = Some(FundHouse::new(name));
            }
            RecordKind::FundData => match self.open_fund_house.as_mut() {
                Some(fund_house) => {
                    if let Some(entry) = FundEntry::from_fields(fields) {
                        fund_house.push(entry);
                        self.stats.entries += 1;
                    }
                }
                None => {
                    self.stats.orphan_rows += 1;
                    debug!(
                        record = self.stats.records,
                        "dropping fund-data row outside any fund house"
                    );
                }
            },
            RecordKind::Unrecognised { field_count } => {
                self.stats.unrecognised_rows += 1;
                debug!(
                    record = self.stats.records,
                    field_count, "dropping record with unrecognised shape"
                );
            }
        }
    }

    /// Closes the open cursors and returns the finalized tree.
    pub fn finish(mut self) -> ParsedReport {
        self.close_category();
        debug!(
            categories = self.categories.len(),
            entries = self.stats.entries,
            "report parsed"
        );
        ParsedReport {
            categories: self.categories,
            stats: self.stats,
        }
    }

    /// Moves the open fund house into the open category, if it has entries.
    fn close_fund_house(&mut self) {
        let Some(fund_house) = self.open_fund_house.take() else {
            return;
        };

        let attached = match self.open_category.as_mut() {
            Some(category) => category.attach(fund_house),
            None => false,
        };
        if !attached {
            self.stats.fund_houses_elided += 1;
        }
    }

    /// Closes the open fund house, then moves the open category into the
    /// result if it has fund houses.
    fn close_category(&mut self) {
        self.close_fund_house();

        let Some(category) = self.open_category.take() else {
            return;
        };

        if category.is_empty() {
            self.stats.categories_elided += 1;
            debug!(category = %category.name, "eliding empty scheme category");
        } else {
            self.categories.push(category);
        }
    }
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Builds a tree from a fallible sequence of records.
///
/// Stops at the first record-source error and returns it; no partial tree is
/// produced in that case.
pub fn build_tree<I, S, E, M>(records: I, matcher: M) -> Result<Vec<SchemeCategory>, E>
where
    I: IntoIterator<Item = Result<Vec<S>, E>>,
    S: AsRef<str>,
    M: CategoryMatcher,
{
    let mut builder = TreeBuilder::new(matcher);
    for record in records {
        builder.push(record?.as_slice());
    }
    Ok(builder.finish().categories)
}

/// Strips the quotes from a fully quoted field and collapses doubled inner
/// quotes. Returns `None` for an unterminated quote or a stray quote.
fn unquote(field: &str) -> Option<Cow<'_, str>> {
    if !field.contains('"') {
        return Some(Cow::Borrowed(field));
    }

    let inner = field.strip_prefix('"')?.strip_suffix('"')?;
    let mut unquoted = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '"' && chars.next() != Some('"') {
            return None;
        }
        unquoted.push(c);
    }
    Some(Cow::Owned(unquoted))
}

/// Reads a semicolon-delimited report and builds its tree.
///
/// Records may have any number of fields. Quoting is strict: a field is
/// either quote-free or wrapped in quotes on a single line, with inner quotes
/// doubled. Anything else aborts the parse with [`NavError::Quote`]. The
/// reader is consumed and dropped before returning, on success and on failure
/// alike.
pub fn read_report<R, M>(reader: R, matcher: M) -> NavResult<ParsedReport>
where
    R: Read,
    M: CategoryMatcher,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(REPORT_DELIMITER)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut builder = TreeBuilder::new(matcher);
    let mut record = StringRecord::new();
    let mut position: u64 = 0;
    loop {
        position += 1;
        let more = csv_reader
            .read_record(&mut record)
            .map_err(|e| NavError::read(position, e))?;
        if !more {
            break;
        }
        let fields = record
            .iter()
            .enumerate()
            .map(|(index, field)| {
                unquote(field).ok_or(NavError::Quote {
                    record: position,
                    field: index + 1,
                })
            })
            .collect::<NavResult<Vec<_>>>()?;
        builder.push(&fields);
    }

    Ok(builder.finish())
}

/// Opens a report file and builds its tree.
pub fn read_report_path<P, M>(path: P, matcher: M) -> NavResult<ParsedReport>
where
    P: AsRef<Path>,
    M: CategoryMatcher,
{
    let file = File::open(path.as_ref())?;
    debug!(path = %path.as_ref().display(), "reading report file");
    read_report(BufReader::new(file), matcher)
}
