//! Record classification.
//!
//! The report carries no explicit record-type markers. A record's role is
//! derived from its field count and, for single-field headers, from a
//! [`CategoryMatcher`] predicate applied to the header text.

use crate::model::FUND_RECORD_FIELDS;

/// Keyword that marks a scheme-category header in AMFI reports.
pub const DEFAULT_CATEGORY_MARKER: &str = "Schemes";

// =============================================================================
// CATEGORY MATCHER
// =============================================================================

/// Decides whether a single-field header names a scheme category.
///
/// Headers that do not match are fund-house headers.
pub trait CategoryMatcher {
    /// Returns true if `header` (already trimmed) is a category header.
    fn is_category(&self, header: &str) -> bool;
}

impl<F> CategoryMatcher for F
where
    F: Fn(&str) -> bool,
{
    fn is_category(&self, header: &str) -> bool {
        self(header)
    }
}

/// Substring matcher on the header text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMatcher {
    keyword: String,
}

impl KeywordMatcher {
    /// Creates a matcher for the given keyword.
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
        }
    }

    /// The keyword being matched.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORY_MARKER)
    }
}

impl CategoryMatcher for KeywordMatcher {
    fn is_category(&self, header: &str) -> bool {
        header.contains(self.keyword.as_str())
    }
}

// =============================================================================
// RECORD KIND
// =============================================================================

/// Role of a single record in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordKind<'a> {
    /// Single empty or whitespace-only field.
    Blank,
    /// Single field naming a scheme category (trimmed).
    CategoryHeader(&'a str),
    /// Single field naming a fund house (trimmed).
    FundHouseHeader(&'a str),
    /// Eight-field fund-data row.
    FundData,
    /// Any other shape.
    Unrecognised {
        /// Number of fields in the record.
        field_count: usize,
    },
}

/// Classifies a record.
///
/// Checks run in a fixed order: blank line, single-field header, fund data.
pub fn classify<'a, S, M>(fields: &'a [S], matcher: &M) -> RecordKind<'a>
where
    S: AsRef<str>,
    M: CategoryMatcher + ?Sized,
{
    match fields {
        [single] => {
            let header = single.as_ref().trim();
            if header.is_empty() {
                RecordKind::Blank
            } else if matcher.is_category(header) {
                RecordKind::CategoryHeader(header)
            } else {
                RecordKind::FundHouseHeader(header)
            }
        }
        _ if fields.len() == FUND_RECORD_FIELDS => RecordKind::FundData,
        _ => RecordKind::Unrecognised {
            field_count: fields.len(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines() {
        let matcher = KeywordMatcher::default();
        assert_eq!(classify(&[""], &matcher), RecordKind::Blank);
        assert_eq!(classify(&["   \t"], &matcher), RecordKind::Blank);
    }

    #[test]
    fn test_category_header() {
        let matcher = KeywordMatcher::default();
        assert_eq!(
            classify(&["  Open Ended Schemes(Debt Scheme - Banking and PSU Fund) "], &matcher),
            RecordKind::CategoryHeader("Open Ended Schemes(Debt Scheme - Banking and PSU Fund)")
        );
    }

    #[test]
    fn test_fund_house_header() {
        let matcher = KeywordMatcher::default();
        assert_eq!(
            classify(&["Aditya Birla Sun Life Mutual Fund"], &matcher),
            RecordKind::FundHouseHeader("Aditya Birla Sun Life Mutual Fund")
        );
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        let matcher = KeywordMatcher::default();
        assert_eq!(
            classify(&["schemes of XYZ"], &matcher),
            RecordKind::FundHouseHeader("schemes of XYZ")
        );
    }

    #[test]
    fn test_fund_data() {
        let matcher = KeywordMatcher::default();
        let row = ["101", "Scheme", "I1", "I2", "1", "1", "1", "01-Jan-2024"];
        assert_eq!(classify(&row, &matcher), RecordKind::FundData);
    }

    #[test]
    fn test_data_row_mentioning_marker_is_still_data() {
        let matcher = KeywordMatcher::default();
        let row = ["1", "Schemes", "", "", "", "", "", ""];
        assert_eq!(classify(&row, &matcher), RecordKind::FundData);
    }

    #[test]
    fn test_unrecognised_shapes() {
        let matcher = KeywordMatcher::default();
        assert_eq!(
            classify::<&str, _>(&[], &matcher),
            RecordKind::Unrecognised { field_count: 0 }
        );
        assert_eq!(
            classify(&["a", "b"], &matcher),
            RecordKind::Unrecognised { field_count: 2 }
        );
        assert_eq!(
            classify(&["x"; 9], &matcher),
            RecordKind::Unrecognised { field_count: 9 }
        );
    }

    #[test]
    fn test_closure_matcher() {
        let matcher = |header: &str| header.starts_with("Interval");
        assert_eq!(
            classify(&["Interval Fund"], &matcher),
            RecordKind::CategoryHeader("Interval Fund")
        );
        assert_eq!(
            classify(&["Open Ended Schemes"], &matcher),
            RecordKind::FundHouseHeader("Open Ended Schemes")
        );
    }

    #[test]
    fn test_custom_keyword() {
        let matcher = KeywordMatcher::new("Category");
        assert_eq!(matcher.keyword(), "Category");
        assert!(matcher.is_category("Equity Category"));
        assert!(!matcher.is_category("Open Ended Schemes"));
    }
}
