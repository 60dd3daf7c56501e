//! Application constants for the catalog reporter
//!
//! Line markers, attribute keys, unit tokens and default values shared by
//! the parser, the aggregator and the CLI.

// =============================================================================
// Catalog Line Markers
// =============================================================================

/// Prefix of a product header line (one tab, dash, space)
pub const HEADER_MARKER: &str = "\t - ";

/// Prefix of an attribute line (two tabs, dash, space)
pub const ATTRIBUTE_MARKER: &str = "\t\t - ";

/// Separator between attribute key and value
pub const ATTRIBUTE_SEPARATOR: char = ':';

/// Recognized attribute keys
pub mod attribute_keys {
    pub const PRICE: &str = "price";
    pub const QUANTITY: &str = "quantity";
    pub const WEIGHT: &str = "weight";
}

// =============================================================================
// Weight Units
// =============================================================================

/// Unit tokens accepted in weight expressions (matched case-insensitively)
pub mod unit_tokens {
    pub const GRAM: &str = "g";
    pub const DECAGRAM: &str = "dkg";
    pub const KILOGRAM: &str = "kg";
}

/// Grams per kilogram
pub const GRAMS_PER_KILOGRAM: f64 = 1000.0;

/// Decagrams per kilogram
pub const DECAGRAMS_PER_KILOGRAM: f64 = 100.0;

/// Decimal places kept in the average item weight
pub const AVERAGE_WEIGHT_DECIMALS: i32 = 3;

// =============================================================================
// Defaults
// =============================================================================

/// Catalog read when no input path is configured
pub const DEFAULT_INPUT_PATH: &str = "data.txt";

/// Currency symbol appended to prices in reports
pub const DEFAULT_CURRENCY: &str = "€";

/// Directory name under the user config dir
pub const CONFIG_DIR_NAME: &str = "catalog-report";

/// Config file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding the input path
pub const ENV_INPUT_PATH: &str = "CATALOG_REPORT_INPUT";

/// Environment variable overriding the currency symbol
pub const ENV_CURRENCY: &str = "CATALOG_REPORT_CURRENCY";
