//! Human and JSON renderers for catalog reports

use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::report::Report;
use crate::{Error, Result};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable text
    #[default]
    Human,
    /// Pretty-printed JSON for scripting
    Json,
}

/// Render a report in the requested format
pub fn render(report: &Report, format: ReportFormat, color: bool) -> Result<String> {
    match format {
        ReportFormat::Human => Ok(render_human(report, color)),
        ReportFormat::Json => render_json(report),
    }
}

/// Render the product list followed by the two aggregates
pub fn render_human(report: &Report, color: bool) -> String {
    let mut output = String::new();

    output.push_str(&heading("Products:", color));
    output.push('\n');
    for product in &report.products {
        output.push_str(&product.display(&report.currency));
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&format!(
        "{} {} {}\n",
        label("Total product price:", color),
        report.total_price,
        report.currency
    ));
    output.push_str(&format!(
        "{} {:.3} kg\n",
        label("Average item weight:", color),
        report.average_item_weight_kg
    ));

    output
}

/// Render the report as pretty-printed JSON
pub fn render_json(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report)
        .map_err(|e| Error::serialization("Failed to encode report as JSON", e))
}

fn heading(text: &str, color: bool) -> String {
    if color {
        text.bright_green().bold().to_string()
    } else {
        text.to_string()
    }
}

fn label(text: &str, color: bool) -> String {
    if color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}
