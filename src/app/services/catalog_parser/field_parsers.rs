//! Field parsing utilities for catalog attribute values
//!
//! Numbers are read culture-invariantly: a decimal point, never a comma,
//! regardless of the display locale.

/// Parse a culture-invariant floating point value
///
/// Surrounding whitespace, a leading sign and an exponent are accepted.
/// Non-finite values (`inf`, `NaN`) are rejected so prices and weights
/// always stay finite.
pub fn parse_invariant_float(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
}

/// Parse a non-negative piece count
///
/// The value must fit a signed 32-bit integer; negative counts are unknown.
pub fn parse_quantity(value: &str) -> Option<u32> {
    let quantity = value.trim().parse::<i32>().ok()?;
    u32::try_from(quantity).ok()
}
