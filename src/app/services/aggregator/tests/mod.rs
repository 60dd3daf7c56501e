//! Test utilities for aggregator testing

use crate::app::models::{ProductRecord, Weight, WeightUnit};


/// Helper to create a record with price, optional quantity and optional weight
pub fn product(
    name: &str,
    price: f64,
    quantity: Option<u32>,
    weight: Option<(f64, WeightUnit)>,
) -> ProductRecord {
    ProductRecord {
        name: name.to_string(),
        price,
        quantity,
        weight: weight.map(|(value, unit)| Weight::new(value, unit)),
    }
}
