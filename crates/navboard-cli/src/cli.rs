//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{FetchArgs, ParseArgs};

/// Navboard - AMFI mutual-fund NAV report viewer
#[derive(Parser)]
#[command(name = "navboard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Configuration file (TOML). Defaults are used if it does not exist.
    #[arg(short, long, default_value = "navboard.toml", global = true)]
    pub config: PathBuf,

    /// Only show fund houses whose name contains this text (case-insensitive)
    #[arg(long, global = true)]
    pub fund_house: Option<String>,

    /// Only show scheme categories whose name contains this text (case-insensitive)
    #[arg(long, global = true)]
    pub category: Option<String>,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Download a NAV report from the portal and display it
    Fetch(FetchArgs),

    /// Display a NAV report saved on disk
    Parse(ParseArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One table per fund house
    #[default]
    Table,
    /// JSON tree
    Json,
    /// One CSV row per fund entry
    Csv,
    /// Entry counts per scheme category
    Summary,
}
