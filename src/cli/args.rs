//! Command-line argument definitions for the catalog reporter
//!
//! This module defines the CLI interface using the clap derive API.

use crate::app::services::reporter::ReportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the catalog reporter
///
/// Reads an indentation-delimited product catalog and reports the total
/// price and the average item weight.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "catalog-report",
    version,
    about = "Report total price and average item weight for a product catalog",
    long_about = "Parses an indentation-delimited product catalog (one tab before each product \
                  header, two tabs before each attribute) and prints every product together with \
                  the total price of all known quantities and the quantity-weighted average item \
                  weight in kilograms."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse the catalog and print the report (default command)
    Report(ReportArgs),
    /// Parse the catalog and print parse diagnostics only
    Validate(ValidateArgs),
}

/// Arguments for the report command
#[derive(Debug, Clone, Default, Parser)]
pub struct ReportArgs {
    /// Catalog file to read
    ///
    /// Defaults to data.txt in the working directory unless set in the
    /// config file or CATALOG_REPORT_INPUT.
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input_path: Option<PathBuf>,

    /// Path to configuration file (JSON)
    ///
    /// If not specified, looks for config.json under the user config
    /// directory (catalog-report/config.json).
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Currency symbol printed after prices
    #[arg(long = "currency", value_name = "SYMBOL")]
    pub currency: Option<String>,

    /// Output format for the report
    #[arg(long = "format", value_enum)]
    pub output_format: Option<ReportFormat>,

    /// Disable coloured headings
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Default, Parser)]
pub struct ValidateArgs {
    /// Catalog file to read
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input_path: Option<PathBuf>,

    /// Path to configuration file (JSON)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Fail when any price or quantity fell back to its default
    #[arg(long = "strict")]
    pub strict: bool,

    /// Output format for the diagnostics
    #[arg(long = "format", value_enum)]
    pub output_format: Option<ReportFormat>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Selected command, falling back to `report` with default arguments
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Report(ReportArgs::default()))
    }
}

impl ReportArgs {
    /// Get the log level based on verbosity settings
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

impl ValidateArgs {
    /// Get the log level based on verbosity settings
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
