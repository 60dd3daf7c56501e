//! Command implementations for the catalog reporter CLI
//!
//! Each command lives in its own module:
//! - `report`: parse, aggregate and print the report
//! - `validate`: parse and print diagnostics only

pub mod report;
pub mod shared;
pub mod validate;

use crate::Result;
use crate::app::services::catalog_parser::ParseStats;
use crate::cli::args::{Args, Commands};

/// Main command runner
///
/// Dispatches to the subcommand handler; with no subcommand the report is
/// produced with default arguments.
pub fn run(args: Args) -> Result<ParseStats> {
    match args.get_command() {
        Commands::Report(report_args) => report::run_report(report_args),
        Commands::Validate(validate_args) => validate::run_validate(validate_args),
    }
}
