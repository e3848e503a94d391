//! Name-based filtering of a parsed tree.

use crate::model::{FundHouse, SchemeCategory};

/// Case-insensitive name filters.
///
/// An unset filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeFilter {
    category: Option<String>,
    fund_house: Option<String>,
}

impl TreeFilter {
    /// Creates a filter that keeps everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps only categories whose name contains `needle`.
    pub fn with_category(mut self, needle: impl Into<String>) -> Self {
        self.category = Some(needle.into().to_lowercase());
        self
    }

    /// Keeps only fund houses whose name contains `needle`.
    pub fn with_fund_house(mut self, needle: impl Into<String>) -> Self {
        self.fund_house = Some(needle.into().to_lowercase());
        self
    }

    /// Returns true if no filter is set.
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.fund_house.is_none()
    }

    fn keeps_category(&self, category: &SchemeCategory) -> bool {
        matches_needle(self.category.as_deref(), &category.name)
    }

    fn keeps_fund_house(&self, fund_house: &FundHouse) -> bool {
        matches_needle(self.fund_house.as_deref(), &fund_house.name)
    }

    /// Applies the filter.
    ///
    /// Categories left without fund houses are dropped, so the result keeps
    /// the parser's non-empty guarantees.
    pub fn apply(&self, categories: Vec<SchemeCategory>) -> Vec<SchemeCategory> {
        if self.is_empty() {
            return categories;
        }

        categories
            .into_iter()
            .filter(|category| self.keeps_category(category))
            .filter_map(|mut category| {
                category
                    .fund_houses
                    .retain(|fund_house| self.keeps_fund_house(fund_house));
                (!category.is_empty()).then_some(category)
            })
            .collect()
    }
}

fn matches_needle(needle: Option<&str>, name: &str) -> bool {
    match needle {
        Some(needle) => name.to_lowercase().contains(needle),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FundEntry;

    fn house(name: &str) -> FundHouse {
        let mut house = FundHouse::new(name);
        house.push(FundEntry::from_fields(&["1"; 8]).unwrap());
        house
    }

    fn tree() -> Vec<SchemeCategory> {
        let mut open = SchemeCategory::new("Open Ended Schemes(Equity)");
        open.attach(house("ABC Mutual Fund"));
        open.attach(house("XYZ Mutual Fund"));
        let mut close = SchemeCategory::new("Close Ended Schemes(Debt)");
        close.attach(house("XYZ Mutual Fund"));
        vec![open, close]
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let filter = TreeFilter::new();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(tree()), tree());
    }

    #[test]
    fn test_fund_house_filter_drops_emptied_categories() {
        let filtered = TreeFilter::new().with_fund_house("abc").apply(tree());

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Open Ended Schemes(Equity)");
        assert_eq!(filtered[0].fund_houses.len(), 1);
        assert_eq!(filtered[0].fund_houses[0].name, "ABC Mutual Fund");
    }

    #[test]
    fn test_category_filter() {
        let filtered = TreeFilter::new().with_category("DEBT").apply(tree());

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Close Ended Schemes(Debt)");
    }

    #[test]
    fn test_combined_filters() {
        let filtered = TreeFilter::new()
            .with_category("equity")
            .with_fund_house("xyz")
            .apply(tree());

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].fund_houses[0].name, "XYZ Mutual Fund");
    }

    #[test]
    fn test_no_match() {
        let filtered = TreeFilter::new().with_fund_house("nothing").apply(tree());
        assert!(filtered.is_empty());
    }
}
