//! Test utilities for catalog parser testing
//!
//! Shared catalog fixtures and file helpers used across the test modules.

use std::io::Write;
use tempfile::NamedTempFile;


/// Helper to create a catalog with three complete products
pub fn create_test_catalog() -> String {
    [
        "\t - Bread:",
        "\t\t - price: 1.50",
        "\t\t - quantity: 3",
        "\t\t - weight: 500 g",
        "\t - Flour:",
        "\t\t - price: 0.89",
        "\t\t - quantity: 2",
        "\t\t - weight: 1 kg",
        "\t - Chocolate:",
        "\t\t - price: 2.20",
        "\t\t - weight: 10 dkg",
    ]
    .join("\n")
}

/// Helper to create the single-product catalog from the Bread example
pub fn create_bread_catalog() -> String {
    "\t - Bread:\n\t\t - price: 1.50\n\t\t - quantity: 3\n\t\t - weight: 500 g\n".to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
