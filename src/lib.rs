//! Catalog Report Library
//!
//! Reads a line-oriented product catalog, builds one record per product and
//! reports the total price and the average item weight.
//!
//! This library provides tools for:
//! - Parsing product headers and their `price`, `quantity` and `weight` attributes
//! - Normalizing weights given in grams, decagrams or kilograms
//! - Aggregating totals with unknown quantities counted as one
//! - Rendering the report as text or JSON
//!
//! ```
//! use catalog_report::app::services::aggregator::CatalogSummary;
//! use catalog_report::app::services::catalog_parser::CatalogParser;
//!
//! let text = "\t - Flour:\n\t\t - price: 1\n\t\t - quantity: 2\n\t\t - weight: 1 kg\n";
//! let result = CatalogParser::new().parse_str(text).unwrap();
//! let summary = CatalogSummary::from_records(result.records());
//!
//! assert_eq!(summary.total_price, 2.0);
//! assert_eq!(summary.average_item_weight_kg, 1.0);
//! ```

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregator;
        pub mod catalog_parser;
        pub mod reporter;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ProductRecord, Weight, WeightUnit};
pub use config::Config;
pub use error::{Error, Result, WeightFormatError};
