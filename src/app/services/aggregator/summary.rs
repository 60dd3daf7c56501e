//! Catalog summary combining both aggregates with record counts

use serde::Serialize;
use tracing::debug;

use super::totals::{average_item_weight, total_price};
use crate::app::models::ProductRecord;

/// Aggregates computed from one parsed catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogSummary {
    /// Number of product records
    pub product_count: usize,
    /// Records with a known quantity (the ones that count toward the total price)
    pub products_with_quantity: usize,
    /// Records with a known weight (the ones that count toward the average)
    pub products_with_weight: usize,
    /// Sum of price times quantity
    pub total_price: f64,
    /// Average item weight in kilograms, 3 decimals
    pub average_item_weight_kg: f64,
}

impl CatalogSummary {
    /// Compute all aggregates for a record sequence
    pub fn from_records(records: &[ProductRecord]) -> Self {
        let summary = Self {
            product_count: records.len(),
            products_with_quantity: records.iter().filter(|r| r.quantity.is_some()).count(),
            products_with_weight: records.iter().filter(|r| r.weight.is_some()).count(),
            total_price: total_price(records),
            average_item_weight_kg: average_item_weight(records),
        };
        debug!("{}", summary.summary());
        summary
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        format!(
            "Catalog Summary: {} products ({} with quantity, {} with weight) | \
             total price {} | average item weight {:.3} kg",
            self.product_count,
            self.products_with_quantity,
            self.products_with_weight,
            self.total_price,
            self.average_item_weight_kg
        )
    }
}
