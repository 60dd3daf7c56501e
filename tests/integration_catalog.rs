//! End-to-end tests: catalog file on disk through parser, aggregator and reporter

use catalog_report::app::services::aggregator::CatalogSummary;
use catalog_report::app::services::catalog_parser::{CatalogParser, RecoverableField};
use catalog_report::app::services::reporter::{Report, ReportFormat, render};
use catalog_report::{Error, Weight, WeightFormatError, WeightUnit};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_catalog(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write catalog");
    file
}

#[test]
fn test_single_product_report() {
    let file = write_catalog(
        "Shop catalog\n\t - Bread:\n\t\t - price: 1.50\n\t\t - quantity: 3\n\t\t - weight: 500 g\n",
    );

    let result = CatalogParser::new().parse_file(file.path()).unwrap();
    let records = result.records();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Bread");
    assert_eq!(records[0].price, 1.5);
    assert_eq!(records[0].quantity, Some(3));
    assert_eq!(records[0].weight, Some(Weight::new(500.0, WeightUnit::Gram)));

    let summary = CatalogSummary::from_records(records);
    assert_eq!(summary.total_price, 4.5);
    assert_eq!(summary.average_item_weight_kg, 0.5);

    let report = Report::new(records, &summary, "€");
    let output = render(&report, ReportFormat::Human, false).unwrap();
    assert_eq!(
        output,
        "Products:\nBread: 3 pcs; 1.5 €\n\nTotal product price: 4.5 €\nAverage item weight: 0.500 kg\n"
    );
}

#[test]
fn test_unknown_unit_aborts_parse() {
    let file = write_catalog("\t - Bread:\n\t\t - price: 2\n\t\t - weight: 3 lb\n\t - Milk:\n");

    let error = CatalogParser::new().parse_file(file.path()).unwrap_err();

    match error {
        Error::Format {
            product,
            line,
            source,
        } => {
            assert_eq!(product, "Bread");
            assert_eq!(line, 3);
            assert_eq!(
                source,
                WeightFormatError::UnknownUnit {
                    unit: "lb".to_string(),
                    input: "3 lb".to_string(),
                }
            );
        }
        other => panic!("Expected format error, got {:?}", other),
    }
}

#[test]
fn test_malformed_price_defaults_and_parsing_continues() {
    let file = write_catalog(
        "\t - Bread:\n\t\t - price: abc\n\t\t - quantity: 2\n\t - Milk:\n\t\t - price: 0.90\n\t\t - quantity: 2\n",
    );

    let result = CatalogParser::new().parse_file(file.path()).unwrap();

    assert_eq!(result.record_count(), 2);
    assert_eq!(result.records()[0].price, 0.0);
    assert_eq!(result.records()[1].price, 0.9);
    assert_eq!(result.stats.recoverable_errors.len(), 1);
    assert_eq!(
        result.stats.recoverable_errors[0].field,
        RecoverableField::Price
    );
    assert_eq!(result.stats.recoverable_errors[0].line, 2);

    let summary = CatalogSummary::from_records(result.records());
    assert_eq!(summary.total_price, 1.8);
}

#[test]
fn test_average_weight_counts_unknown_quantity_as_one() {
    let file = write_catalog(
        "\t - Flour:\n\t\t - quantity: 2\n\t\t - weight: 1 kg\n\t - Sugar:\n\t\t - weight: 500 g\n",
    );

    let result = CatalogParser::new().parse_file(file.path()).unwrap();
    let summary = CatalogSummary::from_records(result.records());

    assert_eq!(summary.average_item_weight_kg, 0.833);

    let report = Report::new(result.records(), &summary, "€");
    let output = render(&report, ReportFormat::Human, false).unwrap();
    assert!(output.contains("Sugar: unknown pcs; 0 €\n"));
    assert!(output.contains("Average item weight: 0.833 kg\n"));
}

#[test]
fn test_attribute_before_header_is_ignored() {
    let file = write_catalog("\t\t - price: 5\n\t\t - weight: 2 lb\n\t - Bread:\n\t\t - price: 1\n");

    let result = CatalogParser::new().parse_file(file.path()).unwrap();

    assert_eq!(result.record_count(), 1);
    assert_eq!(result.records()[0].price, 1.0);
    assert_eq!(result.stats.ignored_count(), 2);
}

#[test]
fn test_json_report_is_machine_readable() {
    let file = write_catalog("\t - Bread:\n\t\t - price: 1.25\n\t\t - weight: 20 dkg\n");

    let result = CatalogParser::new().parse_file(file.path()).unwrap();
    let summary = CatalogSummary::from_records(result.records());
    let report = Report::new(result.records(), &summary, "USD");
    let output = render(&report, ReportFormat::Json, false).unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["currency"], "USD");
    assert_eq!(value["products"][0]["name"], "Bread");
    assert!(value["products"][0]["quantity"].is_null());
    // Unknown quantity keeps the product out of the total
    assert_eq!(value["total_price"], 0.0);
    assert_eq!(value["average_item_weight_kg"], 0.2);
}

#[test]
fn test_missing_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("data.txt");

    let error = CatalogParser::new().parse_file(&missing).unwrap_err();

    assert!(matches!(error, Error::FileNotFound { .. }));
}
