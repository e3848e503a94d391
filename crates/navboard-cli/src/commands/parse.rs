//! Parse command implementation.

use std::io;
use std::path::PathBuf;

use clap::Args;

use navboard_core::{read_report, read_report_path};

use crate::commands::{display, Session};
use crate::error::CliResult;

/// Arguments for the parse command.
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Report file to read, or `-` for stdin
    pub path: PathBuf,
}

/// Execute the parse command.
pub fn execute(args: ParseArgs, session: &Session) -> CliResult<()> {
    let matcher = session.config.category_matcher();
    let report = if args.path.as_os_str() == "-" {
        read_report(io::stdin().lock(), matcher)?
    } else {
        read_report_path(&args.path, matcher)?
    };

    display(report, session)?;
    Ok(())
}
