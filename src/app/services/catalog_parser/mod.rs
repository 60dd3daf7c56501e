//! Parser for indentation-delimited product catalogs
//!
//! Turns catalog text into an ordered list of [`ProductRecord`]s.
//!
//! ## Architecture
//!
//! - [`parser`] - File handling and logging around a parse
//! - [`record_parser`] - The header/attribute state machine
//! - [`line`] - Line splitting and classification
//! - [`weight_parser`] - `<number> <unit>` weight expressions
//! - [`field_parsers`] - Culture-invariant number parsing
//! - [`diagnostics`] - Non-fatal outcomes (defaulted fields, ignored lines)
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use catalog_report::app::services::catalog_parser::CatalogParser;
//!
//! # fn example() -> catalog_report::Result<()> {
//! let text = "\t - Bread:\n\t\t - price: 1.50\n\t\t - quantity: 3\n";
//! let result = CatalogParser::new().parse_str(text)?;
//!
//! assert_eq!(result.record_count(), 1);
//! assert_eq!(result.records[0].quantity, Some(3));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! [`ProductRecord`]: crate::app::models::ProductRecord

pub mod diagnostics;
pub mod field_parsers;
pub mod line;
pub mod parser;
pub mod record_parser;
pub mod stats;
pub mod weight_parser;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use diagnostics::{IgnoredLine, RecoverableField, RecoverableFieldError, StructuralNoop};
pub use parser::CatalogParser;
pub use record_parser::{RecordBuilder, parse_records};
pub use stats::{ParseResult, ParseStats};
pub use weight_parser::parse_weight;
