//! Report model handed to the renderers

use serde::Serialize;

use crate::app::models::ProductRecord;
use crate::app::services::aggregator::CatalogSummary;

/// One product as shown in the report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductLine {
    pub name: String,
    pub quantity: Option<u32>,
    pub price: f64,
}

impl ProductLine {
    /// `<name>: <quantity or unknown> pcs; <price> <currency>`
    pub fn display(&self, currency: &str) -> String {
        let quantity = match self.quantity {
            Some(quantity) => quantity.to_string(),
            None => "unknown".to_string(),
        };
        format!("{}: {} pcs; {} {}", self.name, quantity, self.price, currency)
    }
}

impl From<&ProductRecord> for ProductLine {
    fn from(record: &ProductRecord) -> Self {
        Self {
            name: record.name.clone(),
            quantity: record.quantity,
            price: record.price,
        }
    }
}

/// Everything a renderer needs: product lines plus both aggregates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub currency: String,
    pub products: Vec<ProductLine>,
    pub total_price: f64,
    pub average_item_weight_kg: f64,
}

impl Report {
    pub fn new(
        records: &[ProductRecord],
        summary: &CatalogSummary,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            currency: currency.into(),
            products: records.iter().map(ProductLine::from).collect(),
            total_price: summary.total_price,
            average_item_weight_kg: summary.average_item_weight_kg,
        }
    }
}
