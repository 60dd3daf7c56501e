//! Line-by-line record construction for catalog text
//!
//! The parser is a two-state machine over classified lines. The state is the
//! record under construction, `Option<RecordBuilder>`, which is threaded
//! through [`process_line`] rather than held in a shared field:
//! - `None`: attribute lines are ignored, a header starts a record
//! - `Some(builder)`: attribute lines update the builder, a header finishes
//!   it and starts the next one

use tracing::{debug, trace, warn};

use super::diagnostics::{RecoverableField, RecoverableFieldError, StructuralNoop};
use super::field_parsers::{parse_invariant_float, parse_quantity};
use super::line::{AttributeKey, CatalogLine, catalog_lines};
use super::stats::{ParseResult, ParseStats};
use super::weight_parser::parse_weight;
use crate::app::models::{ProductRecord, Weight};
use crate::{Error, Result};

/// Record under construction between its header and the next one
#[derive(Debug, Clone, PartialEq)]
pub struct RecordBuilder {
    name: String,
    header_line: usize,
    price: f64,
    quantity: Option<u32>,
    weight: Option<Weight>,
}

impl RecordBuilder {
    /// Start a record from a header line
    pub fn new(name: impl Into<String>, header_line: usize) -> Self {
        Self {
            name: name.into(),
            header_line,
            price: 0.0,
            quantity: None,
            weight: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Line number of the header that started this record
    pub fn header_line(&self) -> usize {
        self.header_line
    }

    /// Assign one attribute value; the last assignment per key wins
    ///
    /// Malformed prices and quantities are defaulted and recorded in `stats`.
    /// A malformed weight is returned as [`Error::Format`].
    pub fn apply(
        &mut self,
        key: AttributeKey,
        value: &str,
        line: usize,
        stats: &mut ParseStats,
    ) -> Result<()> {
        match key {
            AttributeKey::Price => match parse_invariant_float(value) {
                Some(price) => self.price = price,
                None => {
                    warn!(
                        "Could not parse price value '{}' for product '{}'",
                        value, self.name
                    );
                    stats.add_recoverable(RecoverableFieldError::new(
                        &self.name,
                        RecoverableField::Price,
                        value,
                        line,
                    ));
                    self.price = 0.0;
                }
            },
            AttributeKey::Quantity => {
                self.quantity = parse_quantity(value);
                if self.quantity.is_none() {
                    // Quantity falls back silently; only debug output
                    debug!(
                        "Quantity '{}' for product '{}' treated as unknown",
                        value, self.name
                    );
                    stats.add_recoverable(RecoverableFieldError::new(
                        &self.name,
                        RecoverableField::Quantity,
                        value,
                        line,
                    ));
                }
            }
            AttributeKey::Weight => {
                let weight = parse_weight(value).map_err(|e| Error::format(&self.name, line, e))?;
                self.weight = Some(weight);
            }
        }

        stats.attributes_applied += 1;
        Ok(())
    }

    /// Finish the record as-is; no validation happens here
    pub fn finish(self) -> ProductRecord {
        ProductRecord {
            name: self.name,
            price: self.price,
            quantity: self.quantity,
            weight: self.weight,
        }
    }
}

/// Parse full catalog text into records in header order
///
/// Fails only on a malformed weight expression; every other problem is
/// recorded in the returned statistics.
pub fn parse_records(text: &str) -> Result<ParseResult> {
    let mut output = ParseResult::new();
    let mut current: Option<RecordBuilder> = None;

    for (line_number, line) in catalog_lines(text) {
        output.stats.total_lines += 1;
        current = process_line(current, line_number, line, &mut output)?;
    }

    if let Some(builder) = current {
        output.records.push(builder.finish());
    }

    Ok(output)
}

/// Advance the state machine by one non-empty line
pub fn process_line(
    current: Option<RecordBuilder>,
    line_number: usize,
    line: &str,
    output: &mut ParseResult,
) -> Result<Option<RecordBuilder>> {
    match (CatalogLine::classify(line), current) {
        (CatalogLine::Header { name }, current) => {
            if let Some(previous) = current {
                output.records.push(previous.finish());
            }

            if name.trim().is_empty() {
                ignore(output, line_number, StructuralNoop::EmptyProductName);
                return Ok(None);
            }

            output.stats.header_lines += 1;
            trace!("Line {}: product '{}'", line_number, name);
            Ok(Some(RecordBuilder::new(name, line_number)))
        }
        (CatalogLine::Attribute { .. } | CatalogLine::AttributeWithoutSeparator, None) => {
            ignore(output, line_number, StructuralNoop::OrphanAttribute);
            Ok(None)
        }
        (CatalogLine::Attribute { key, value }, Some(mut builder)) => {
            match AttributeKey::from_key(key) {
                Some(attribute) => builder.apply(attribute, value, line_number, &mut output.stats)?,
                None => ignore(
                    output,
                    line_number,
                    StructuralNoop::UnknownKey {
                        key: key.to_string(),
                    },
                ),
            }
            Ok(Some(builder))
        }
        (CatalogLine::AttributeWithoutSeparator, Some(builder)) => {
            ignore(output, line_number, StructuralNoop::MissingSeparator);
            Ok(Some(builder))
        }
        (CatalogLine::Other, current) => {
            ignore(output, line_number, StructuralNoop::UnrecognizedLine);
            Ok(current)
        }
    }
}

fn ignore(output: &mut ParseResult, line_number: usize, reason: StructuralNoop) {
    debug!("Line {}: ignored ({})", line_number, reason);
    output.stats.add_ignored(line_number, reason);
}
