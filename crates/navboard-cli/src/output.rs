//! Output formatting.

use std::io::Write;

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use navboard_core::{total_entries, FundEntry, SchemeCategory};

use crate::cli::OutputFormat;
use crate::error::CliResult;

/// Writes a report tree in the requested format.
pub fn render<W: Write>(
    categories: &[SchemeCategory],
    format: OutputFormat,
    out: &mut W,
) -> CliResult<()> {
    match format {
        OutputFormat::Table => write_tables(categories, out),
        OutputFormat::Json => write_json(categories, out),
        OutputFormat::Csv => write_csv(categories, out),
        OutputFormat::Summary => write_summary(categories, out),
    }
}

// =============================================================================
// TABLE
// =============================================================================

/// Table row for one fund entry.
///
/// Repurchase and sale prices are not shown.
#[derive(Debug, Clone, Tabled)]
pub struct FundRow<'a> {
    #[tabled(rename = "Scheme Code")]
    pub scheme_code: &'a str,
    #[tabled(rename = "Scheme Name")]
    pub scheme_name: &'a str,
    #[tabled(rename = "ISIN Div Payout")]
    pub isin_div_payout: &'a str,
    #[tabled(rename = "ISIN Div Reinvestment")]
    pub isin_div_reinvestment: &'a str,
    #[tabled(rename = "Net Asset Value")]
    pub net_asset_value: &'a str,
    #[tabled(rename = "Date")]
    pub date: &'a str,
}

impl<'a> From<&'a FundEntry> for FundRow<'a> {
    fn from(entry: &'a FundEntry) -> Self {
        Self {
            scheme_code: &entry.scheme_code,
            scheme_name: &entry.scheme_name,
            isin_div_payout: &entry.isin_div_payout,
            isin_div_reinvestment: &entry.isin_div_reinvestment,
            net_asset_value: &entry.net_asset_value,
            date: &entry.date,
        }
    }
}

fn write_tables<W: Write>(categories: &[SchemeCategory], out: &mut W) -> CliResult<()> {
    if categories.is_empty() {
        writeln!(out, "No results.")?;
        return Ok(());
    }

    for category in categories {
        writeln!(out, "\nScheme Category: {}\n", category.name)?;

        for fund_house in &category.fund_houses {
            writeln!(out, "Fund House: {}", fund_house.name)?;

            let table = Table::new(fund_house.entries.iter().map(FundRow::from))
                .with(Style::rounded())
                .with(Modify::new(Columns::first()).with(Alignment::left()))
                .to_string();

            writeln!(out, "{}", table)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

// =============================================================================
// JSON
// =============================================================================

fn write_json<W: Write>(categories: &[SchemeCategory], out: &mut W) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *out, categories)?;
    writeln!(out)?;
    Ok(())
}

// =============================================================================
// CSV
// =============================================================================

/// Flattened CSV row carrying the full entry and its grouping.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    category: &'a str,
    fund_house: &'a str,
    scheme_code: &'a str,
    scheme_name: &'a str,
    isin_div_payout: &'a str,
    isin_div_reinvestment: &'a str,
    net_asset_value: &'a str,
    repurchase_price: &'a str,
    sale_price: &'a str,
    date: &'a str,
}

fn write_csv<W: Write>(categories: &[SchemeCategory], out: &mut W) -> CliResult<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for category in categories {
        for fund_house in &category.fund_houses {
            for entry in &fund_house.entries {
                wtr.serialize(CsvRow {
                    category: &category.name,
                    fund_house: &fund_house.name,
                    scheme_code: &entry.scheme_code,
                    scheme_name: &entry.scheme_name,
                    isin_div_payout: &entry.isin_div_payout,
                    isin_div_reinvestment: &entry.isin_div_reinvestment,
                    net_asset_value: &entry.net_asset_value,
                    repurchase_price: &entry.repurchase_price,
                    sale_price: &entry.sale_price,
                    date: &entry.date,
                })?;
            }
        }
    }
    wtr.flush()?;
    Ok(())
}

// =============================================================================
// SUMMARY
// =============================================================================

/// Per-category counts.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct SummaryRow {
    #[tabled(rename = "Scheme Category")]
    pub category: String,
    #[tabled(rename = "Fund Houses")]
    pub fund_houses: usize,
    #[tabled(rename = "Entries")]
    pub entries: usize,
}

impl From<&SchemeCategory> for SummaryRow {
    fn from(category: &SchemeCategory) -> Self {
        Self {
            category: category.name.clone(),
            fund_houses: category.fund_houses.len(),
            entries: category.entry_count(),
        }
    }
}

fn write_summary<W: Write>(categories: &[SchemeCategory], out: &mut W) -> CliResult<()> {
    if categories.is_empty() {
        writeln!(out, "No results.")?;
        return Ok(());
    }

    let rows: Vec<SummaryRow> = categories.iter().map(SummaryRow::from).collect();
    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    writeln!(out, "{}", table)?;
    writeln!(
        out,
        "Total: {} entries in {} categories",
        total_entries(categories),
        categories.len()
    )?;
    Ok(())
}

// =============================================================================
// STATUS MESSAGES
// =============================================================================

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use navboard_core::FundHouse;

    fn sample() -> Vec<SchemeCategory> {
        let mut house = FundHouse::new("ABC Mutual Fund");
        house.push(
            FundEntry::from_fields(&[
                "101",
                "Scheme One",
                "ISIN1",
                "ISIN2",
                "10.50",
                "10.40",
                "10.60",
                "01-Jan-2024",
            ])
            .unwrap(),
        );
        let mut category = SchemeCategory::new("Open Ended Schemes");
        category.attach(house);
        vec![category]
    }

    fn rendered(format: OutputFormat) -> String {
        let mut out = Vec::new();
        render(&sample(), format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_table_layout() {
        let text = rendered(OutputFormat::Table);

        assert!(text.starts_with("\nScheme Category: Open Ended Schemes\n\nFund House: ABC Mutual Fund\n"));
        for header in [
            "Scheme Code",
            "Scheme Name",
            "ISIN Div Payout",
            "ISIN Div Reinvestment",
            "Net Asset Value",
            "Date",
        ] {
            assert!(text.contains(header), "missing column {header}");
        }
        assert!(text.contains("10.50"));
        assert!(text.contains("01-Jan-2024"));
        assert!(!text.contains("10.40"));
        assert!(!text.contains("10.60"));
        assert!(text.ends_with("\n\n"));
    }

    #[test]
    fn test_table_empty() {
        let mut out = Vec::new();
        render(&[], OutputFormat::Table, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No results.\n");
    }

    #[test]
    fn test_json() {
        let text = rendered(OutputFormat::Json);
        let back: Vec<SchemeCategory> = serde_json::from_str(&text).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn test_csv() {
        let text = rendered(OutputFormat::Csv);
        let mut lines = text.lines();

        assert_eq!(
            lines.next().unwrap(),
            "category,fund_house,scheme_code,scheme_name,isin_div_payout,isin_div_reinvestment,net_asset_value,repurchase_price,sale_price,date"
        );
        assert_eq!(
            lines.next().unwrap(),
            "Open Ended Schemes,ABC Mutual Fund,101,Scheme One,ISIN1,ISIN2,10.50,10.40,10.60,01-Jan-2024"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_summary() {
        let text = rendered(OutputFormat::Summary);
        assert!(text.contains("Open Ended Schemes"));
        assert!(text.contains("Total: 1 entries in 1 categories"));
    }

    #[test]
    fn test_render_does_not_mutate_tree() {
        let tree = sample();
        let before = tree.clone();
        let mut sink = Vec::new();
        for format in [
            OutputFormat::Table,
            OutputFormat::Json,
            OutputFormat::Csv,
            OutputFormat::Summary,
        ] {
            render(&tree, format, &mut sink).unwrap();
        }
        assert_eq!(tree, before);
    }
}
