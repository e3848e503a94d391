//! Report data model.
//!
//! A report is an ordered list of [`SchemeCategory`] values. Each category
//! owns its [`FundHouse`] groups and each fund house owns its [`FundEntry`]
//! rows. Trees produced by the parser never contain empty groups.

use serde::{Deserialize, Serialize};

/// Number of fields in a fund-data record.
pub const FUND_RECORD_FIELDS: usize = 8;

// =============================================================================
// FUND ENTRY
// =============================================================================

/// One NAV observation for one scheme on one date.
///
/// All fields are verbatim copies of the source record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FundEntry {
    /// Scheme code.
    pub scheme_code: String,
    /// Scheme name.
    pub scheme_name: String,
    /// ISIN of the dividend payout / growth plan.
    pub isin_div_payout: String,
    /// ISIN of the dividend reinvestment plan.
    pub isin_div_reinvestment: String,
    /// Net asset value, as published.
    pub net_asset_value: String,
    /// Repurchase price, as published.
    pub repurchase_price: String,
    /// Sale price, as published.
    pub sale_price: String,
    /// Observation date, as published.
    pub date: String,
}

impl FundEntry {
    /// Builds an entry from a fund-data record.
    ///
    /// Returns `None` unless the record has exactly eight fields.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Option<Self> {
        match fields {
            [code, name, payout, reinvestment, nav, repurchase, sale, date] => Some(Self {
                scheme_code: code.as_ref().to_string(),
                scheme_name: name.as_ref().to_string(),
                isin_div_payout: payout.as_ref().to_string(),
                isin_div_reinvestment: reinvestment.as_ref().to_string(),
                net_asset_value: nav.as_ref().to_string(),
                repurchase_price: repurchase.as_ref().to_string(),
                sale_price: sale.as_ref().to_string(),
                date: date.as_ref().to_string(),
            }),
            _ => None,
        }
    }
}

// =============================================================================
// FUND HOUSE
// =============================================================================

/// An asset-management company and the schemes it published in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundHouse {
    /// Fund house name.
    pub name: String,
    /// Entries in input order.
    pub entries: Vec<FundEntry>,
}

impl FundHouse {
    /// Creates an empty fund house.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: FundEntry) {
        self.entries.push(entry);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the fund house holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// SCHEME CATEGORY
// =============================================================================

/// A top-level grouping such as "Open Ended Schemes".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeCategory {
    /// Category name.
    pub name: String,
    /// Non-empty fund houses in first-occurrence order.
    pub fund_houses: Vec<FundHouse>,
}

impl SchemeCategory {
    /// Creates an empty category.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fund_houses: Vec::new(),
        }
    }

    /// Attaches a fund house if it has entries.
    ///
    /// Returns false when the fund house was empty and got discarded.
    pub fn attach(&mut self, fund_house: FundHouse) -> bool {
        if fund_house.is_empty() {
            return false;
        }
        self.fund_houses.push(fund_house);
        true
    }

    /// Returns true if no fund house is attached.
    pub fn is_empty(&self) -> bool {
        self.fund_houses.is_empty()
    }

    /// Total number of entries across all fund houses.
    pub fn entry_count(&self) -> usize {
        self.fund_houses.iter().map(FundHouse::len).sum()
    }
}

/// Total number of entries in a report.
pub fn total_entries(categories: &[SchemeCategory]) -> usize {
    categories.iter().map(SchemeCategory::entry_count).sum()
}
