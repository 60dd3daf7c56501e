//! Aggregation over parsed catalog records
//!
//! Two independent computations read the finished record sequence:
//! - [`total_price`]: price times quantity, unknown quantities excluded
//! - [`average_item_weight`]: weighted average in kilograms, unknown
//!   quantities counted as one piece
//!
//! [`CatalogSummary`] bundles both with record counts for reporting.

pub mod summary;
pub mod totals;

#[cfg(test)]
mod tests;

pub use summary::CatalogSummary;
pub use totals::{average_item_weight, round_to_decimals, total_price};
