//! Aggregate computations over parsed product records

use crate::app::models::ProductRecord;
use crate::constants::AVERAGE_WEIGHT_DECIMALS;

/// Sum of `price * quantity` over records with a known quantity
///
/// Records with an unknown quantity contribute nothing; they are not
/// counted as a single piece.
pub fn total_price(records: &[ProductRecord]) -> f64 {
    records
        .iter()
        .filter_map(ProductRecord::line_total)
        .fold(0.0, |total, line_total| total + line_total)
}

/// Quantity-weighted average item weight in kilograms, rounded to 3 decimals
///
/// Only records with a known weight take part. Their quantity counts when
/// known, otherwise they count as one piece. Returns 0 when no piece has a
/// weight.
pub fn average_item_weight(records: &[ProductRecord]) -> f64 {
    let (total_weight, item_count) = records
        .iter()
        .filter_map(|record| {
            record.weight.map(|weight| {
                let quantity = record.effective_quantity();
                (weight.normalized_kg() * f64::from(quantity), u64::from(quantity))
            })
        })
        .fold((0.0, 0u64), |(weight_sum, count_sum), (weight, count)| {
            (weight_sum + weight, count_sum + count)
        });

    if item_count == 0 {
        return 0.0;
    }

    round_to_decimals(total_weight / item_count as f64, AVERAGE_WEIGHT_DECIMALS)
}

/// Round to `decimals` places, ties to even
pub fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}
