//! Weight expression parsing (`<number> <unit>`)

use std::str::FromStr;

use super::field_parsers::parse_invariant_float;
use crate::app::models::{Weight, WeightUnit};
use crate::error::WeightFormatError;

/// Parse a weight expression such as `500 g` or `1.2 KG`
///
/// The input must split on a single space into exactly a number and a unit
/// token; anything else is rejected with the offending text.
pub fn parse_weight(text: &str) -> Result<Weight, WeightFormatError> {
    let tokens: Vec<&str> = text.split(' ').collect();
    let [value_token, unit_token] = tokens.as_slice() else {
        return Err(WeightFormatError::TokenCount {
            input: text.to_string(),
        });
    };

    let value =
        parse_invariant_float(value_token).ok_or_else(|| WeightFormatError::InvalidValue {
            value: value_token.to_string(),
            input: text.to_string(),
        })?;

    let unit = WeightUnit::from_token(unit_token).ok_or_else(|| WeightFormatError::UnknownUnit {
        unit: unit_token.to_string(),
        input: text.to_string(),
    })?;

    Ok(Weight::new(value, unit))
}

impl FromStr for Weight {
    type Err = WeightFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_weight(s)
    }
}
