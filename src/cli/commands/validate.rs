//! Validate command implementation
//!
//! Parses the catalog without aggregating and prints what the parser
//! defaulted or ignored. With `--strict`, any defaulted field fails the run.

use super::shared::{ConfigOverrides, load_configuration, setup_logging};
use crate::app::services::catalog_parser::{CatalogParser, ParseStats};
use crate::app::services::reporter::ReportFormat;
use crate::cli::args::ValidateArgs;
use crate::config::Config;
use crate::{Error, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Parse diagnostics for one catalog file
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub input: PathBuf,
    pub products: usize,
    pub stats: ParseStats,
}

/// Validate command runner
pub fn run_validate(args: ValidateArgs) -> Result<ParseStats> {
    setup_logging(args.get_log_level())?;

    info!("Starting catalog validation");
    debug!("Validation arguments: {:?}", args);

    let overrides = ConfigOverrides {
        input_path: args.input_path.clone(),
        output_format: args.output_format,
        ..ConfigOverrides::default()
    };
    let config = load_configuration(args.config_file.as_deref(), &overrides)?;

    let report = validate_catalog(&config)?;
    print!(
        "{}",
        render_validation(&report, config.output_format, config.color)?
    );

    let defaulted_fields = report.stats.recoverable_errors.len();
    if args.strict && defaulted_fields > 0 {
        warn!("Strict mode: {} defaulted field(s)", defaulted_fields);
        return Err(Error::validation_failed(defaulted_fields));
    }

    Ok(report.stats)
}

/// Parse the configured catalog and collect its diagnostics
pub fn validate_catalog(config: &Config) -> Result<ValidationReport> {
    let result = CatalogParser::new().parse_file(&config.input_path)?;

    Ok(ValidationReport {
        input: config.input_path.clone(),
        products: result.record_count(),
        stats: result.stats,
    })
}

/// Render validation diagnostics as text or JSON
pub fn render_validation(
    report: &ValidationReport,
    format: ReportFormat,
    color: bool,
) -> Result<String> {
    match format {
        ReportFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|e| Error::serialization("Failed to encode validation report", e)),
        ReportFormat::Human => Ok(render_validation_human(report, color)),
    }
}

fn render_validation_human(report: &ValidationReport, color: bool) -> String {
    let stats = &report.stats;
    let mut output = String::new();

    output.push_str(&format!("Catalog: {}\n", report.input.display()));
    output.push_str(&format!("Products: {}\n", report.products));

    let defaulted = format!("Defaulted fields: {}", stats.recoverable_errors.len());
    if color && stats.has_recoverable_errors() {
        output.push_str(&defaulted.yellow().to_string());
    } else {
        output.push_str(&defaulted);
    }
    output.push('\n');
    for error in &stats.recoverable_errors {
        output.push_str(&format!("  {}; using {}\n", error, error.field.fallback()));
    }

    output.push_str(&format!("Ignored lines: {}\n", stats.ignored_count()));
    for ignored in &stats.ignored_lines {
        output.push_str(&format!("  line {}: {}\n", ignored.line, ignored.reason));
    }

    output
}
