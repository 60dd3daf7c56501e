//! Report command implementation
//!
//! Parses the configured catalog, aggregates it and prints the report.

use super::shared::{ConfigOverrides, load_configuration, setup_logging};
use crate::Result;
use crate::app::services::aggregator::CatalogSummary;
use crate::app::services::catalog_parser::{CatalogParser, ParseStats};
use crate::app::services::reporter::{Report, render};
use crate::cli::args::ReportArgs;
use crate::config::Config;
use tracing::{debug, info};

/// Rendered report plus the statistics of the parse behind it
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    pub rendered: String,
    pub summary: CatalogSummary,
    pub stats: ParseStats,
}

/// Report command runner
pub fn run_report(args: ReportArgs) -> Result<ParseStats> {
    setup_logging(args.get_log_level())?;

    info!("Starting catalog report");
    debug!("Report arguments: {:?}", args);

    let overrides = ConfigOverrides {
        input_path: args.input_path.clone(),
        currency: args.currency.clone(),
        output_format: args.output_format,
        no_color: args.no_color,
    };
    let config = load_configuration(args.config_file.as_deref(), &overrides)?;

    let outcome = generate_report(&config)?;
    print!("{}", outcome.rendered);

    Ok(outcome.stats)
}

/// Parse, aggregate and render the catalog named by `config`
pub fn generate_report(config: &Config) -> Result<ReportOutcome> {
    let result = CatalogParser::new().parse_file(&config.input_path)?;

    let summary = CatalogSummary::from_records(result.records());
    let report = Report::new(result.records(), &summary, config.currency.as_str());
    let rendered = render(&report, config.output_format, config.color)?;

    Ok(ReportOutcome {
        rendered,
        summary,
        stats: result.stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::reporter::ReportFormat;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_for(content: &str) -> (NamedTempFile, Config) {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        let config = Config {
            input_path: file.path().to_path_buf(),
            color: false,
            ..Config::default()
        };
        (file, config)
    }

    #[test]
    fn test_generate_report_for_two_products() {
        let (_file, config) = config_for(
            "\t - Flour:\n\t\t - price: 1\n\t\t - quantity: 2\n\t\t - weight: 1 kg\n\
             \t - Sugar:\n\t\t - price: 1.2\n\t\t - weight: 500 g\n",
        );

        let outcome = generate_report(&config).unwrap();

        assert_eq!(outcome.summary.total_price, 2.0);
        assert_eq!(outcome.summary.average_item_weight_kg, 0.833);
        assert!(outcome.rendered.contains("Flour: 2 pcs; 1 €"));
        assert!(outcome.rendered.contains("Sugar: unknown pcs; 1.2 €"));
        assert!(outcome.rendered.contains("Average item weight: 0.833 kg"));
    }

    #[test]
    fn test_generate_report_json() {
        let (_file, mut config) = config_for("\t - Bread:\n\t\t - price: abc\n");
        config.output_format = ReportFormat::Json;

        let outcome = generate_report(&config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&outcome.rendered).unwrap();

        assert_eq!(value["products"][0]["price"], 0.0);
        assert_eq!(outcome.stats.recoverable_errors.len(), 1);
    }

    #[test]
    fn test_generate_report_fails_on_bad_weight() {
        let (_file, config) = config_for("\t - Bread:\n\t\t - weight: 3 lb\n");
        let error = generate_report(&config).unwrap_err();
        assert!(error.is_format_error());
    }
}
