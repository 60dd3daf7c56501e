//! Data models for catalog processing
//!
//! This module contains the product record produced by the parser and the
//! weight types it carries. Optional fields use `Option` so an unknown
//! quantity or weight stays distinct from zero.

use crate::constants::{DECAGRAMS_PER_KILOGRAM, GRAMS_PER_KILOGRAM, unit_tokens};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Weight Units
// =============================================================================

/// Units accepted in weight expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Gram,
    Decagram,
    Kilogram,
}

impl WeightUnit {
    /// Match a unit token case-insensitively (`g`, `dkg`, `kg`)
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            unit_tokens::GRAM => Some(WeightUnit::Gram),
            unit_tokens::DECAGRAM => Some(WeightUnit::Decagram),
            unit_tokens::KILOGRAM => Some(WeightUnit::Kilogram),
            _ => None,
        }
    }

    /// Canonical token for this unit
    pub fn token(&self) -> &'static str {
        match self {
            WeightUnit::Gram => unit_tokens::GRAM,
            WeightUnit::Decagram => unit_tokens::DECAGRAM,
            WeightUnit::Kilogram => unit_tokens::KILOGRAM,
        }
    }

    /// Convert a value in this unit to kilograms
    pub fn to_kilograms(&self, value: f64) -> f64 {
        match self {
            WeightUnit::Gram => value / GRAMS_PER_KILOGRAM,
            WeightUnit::Decagram => value / DECAGRAMS_PER_KILOGRAM,
            WeightUnit::Kilogram => value,
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

// =============================================================================
// Weight
// =============================================================================

/// A weight as written in the catalog, value plus unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    pub value: f64,
    pub unit: WeightUnit,
}

impl Weight {
    pub fn new(value: f64, unit: WeightUnit) -> Self {
        Self { value, unit }
    }

    /// Weight expressed in kilograms regardless of the written unit
    pub fn normalized_kg(&self) -> f64 {
        self.unit.to_kilograms(self.value)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

// =============================================================================
// Product Record
// =============================================================================

/// One product from the catalog
///
/// Built by the record parser from a header line and the attribute lines
/// that follow it. Downstream consumers only ever see finished records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Product name from the header line, never empty
    pub name: String,

    /// Unit price in the catalog currency, 0 when absent or unparseable
    pub price: f64,

    /// Piece count, `None` when unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,

    /// Weight of a single item, `None` when unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
}

impl ProductRecord {
    /// Create a record with only a name; price 0, quantity and weight unknown
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: 0.0,
            quantity: None,
            weight: None,
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_weight(mut self, weight: Weight) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Quantity used when averaging weights: the known quantity, else 1
    pub fn effective_quantity(&self) -> u32 {
        self.quantity.unwrap_or(1)
    }

    /// Price of all known pieces, `None` when the quantity is unknown
    pub fn line_total(&self) -> Option<f64> {
        self.quantity.map(|quantity| self.price * f64::from(quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_token_matching_is_case_insensitive() {
        assert_eq!(WeightUnit::from_token("g"), Some(WeightUnit::Gram));
        assert_eq!(WeightUnit::from_token("DKG"), Some(WeightUnit::Decagram));
        assert_eq!(WeightUnit::from_token("Kg"), Some(WeightUnit::Kilogram));
        assert_eq!(WeightUnit::from_token("lb"), None);
        assert_eq!(WeightUnit::from_token(""), None);
    }

    #[test]
    fn test_normalization_to_kilograms() {
        assert_eq!(Weight::new(500.0, WeightUnit::Gram).normalized_kg(), 0.5);
        assert_eq!(Weight::new(25.0, WeightUnit::Decagram).normalized_kg(), 0.25);
        assert_eq!(Weight::new(2.0, WeightUnit::Kilogram).normalized_kg(), 2.0);
    }

    #[test]
    fn test_thousand_grams_equals_one_kilogram() {
        let grams = Weight::new(1000.0, WeightUnit::Gram);
        let kilograms = Weight::new(1.0, WeightUnit::Kilogram);
        assert_eq!(grams.normalized_kg(), kilograms.normalized_kg());
    }

    #[test]
    fn test_weight_display_uses_canonical_token() {
        assert_eq!(Weight::new(3.5, WeightUnit::Decagram).to_string(), "3.5 dkg");
    }

    #[test]
    fn test_new_record_defaults() {
        let record = ProductRecord::new("Bread");
        assert_eq!(record.name, "Bread");
        assert_eq!(record.price, 0.0);
        assert_eq!(record.quantity, None);
        assert_eq!(record.weight, None);
        assert_eq!(record.effective_quantity(), 1);
        assert_eq!(record.line_total(), None);
    }

    #[test]
    fn test_zero_quantity_is_not_unknown() {
        let record = ProductRecord::new("Milk").with_price(2.0).with_quantity(0);
        assert_eq!(record.quantity, Some(0));
        assert_eq!(record.effective_quantity(), 0);
        assert_eq!(record.line_total(), Some(0.0));
    }

    #[test]
    fn test_record_serializes_without_unknown_fields() {
        let record = ProductRecord::new("Salt").with_price(0.8);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["name"], "Salt");
        assert!(json.get("quantity").is_none());
        assert!(json.get("weight").is_none());
    }
}
