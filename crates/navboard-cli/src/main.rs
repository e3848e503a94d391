//! Navboard CLI - view AMFI mutual-fund NAV reports in the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Yesterday's report, one table per fund house
//! navboard fetch
//!
//! # A specific day, as JSON
//! navboard fetch --date 2024-01-15 --format json
//!
//! # A report saved earlier, filtered to one fund house
//! navboard parse report.txt --fund-house hdfc
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Session;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let session = Session::from_cli(&cli)?;

    // Execute command
    match cli.command {
        Commands::Fetch(args) => commands::fetch::execute(args, &session)?,
        Commands::Parse(args) => commands::parse::execute(args, &session)?,
    }

    Ok(())
}

/// Logs go to stderr so stdout carries only the report.
fn init_logging(verbose: bool, quiet: bool) {
    let default_filter = if verbose {
        "navboard_core=debug,navboard_ext_amfi=debug,navboard=debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
