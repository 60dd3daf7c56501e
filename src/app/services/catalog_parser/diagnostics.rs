//! Non-fatal parse outcomes
//!
//! Two tiers sit below the fatal [`crate::Error::Format`]:
//! - [`RecoverableFieldError`]: a recognized field had a malformed value and
//!   was defaulted (price to 0, quantity to unknown)
//! - [`StructuralNoop`]: a line carried nothing the parser could attach

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Fields whose malformed values are defaulted instead of aborting the parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoverableField {
    Price,
    Quantity,
}

impl RecoverableField {
    /// Value the field falls back to, as shown in diagnostics
    pub fn fallback(&self) -> &'static str {
        match self {
            RecoverableField::Price => "0",
            RecoverableField::Quantity => "unknown",
        }
    }
}

impl fmt::Display for RecoverableField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecoverableField::Price => f.write_str("price"),
            RecoverableField::Quantity => f.write_str("quantity"),
        }
    }
}

/// A malformed field value that was replaced by its default
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("Could not parse {field} value '{value}' for product '{product}' (line {line})")]
pub struct RecoverableFieldError {
    pub product: String,
    pub field: RecoverableField,
    pub value: String,
    pub line: usize,
}

impl RecoverableFieldError {
    pub fn new(
        product: impl Into<String>,
        field: RecoverableField,
        value: impl Into<String>,
        line: usize,
    ) -> Self {
        Self {
            product: product.into(),
            field,
            value: value.into(),
            line,
        }
    }
}

/// Why a line was skipped without touching any record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum StructuralNoop {
    /// Attribute line before any product header
    OrphanAttribute,
    /// Attribute key the parser does not assign
    UnknownKey { key: String },
    /// Attribute marker without a `:` separator
    MissingSeparator,
    /// Header marker followed by an empty name
    EmptyProductName,
    /// Line matching neither marker
    UnrecognizedLine,
}

impl fmt::Display for StructuralNoop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralNoop::OrphanAttribute => f.write_str("attribute before any product"),
            StructuralNoop::UnknownKey { key } => write!(f, "unknown attribute '{}'", key),
            StructuralNoop::MissingSeparator => f.write_str("attribute without ':'"),
            StructuralNoop::EmptyProductName => f.write_str("product header without a name"),
            StructuralNoop::UnrecognizedLine => f.write_str("unrecognized line"),
        }
    }
}

/// A skipped line and the reason it was skipped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IgnoredLine {
    pub line: usize,
    #[serde(flatten)]
    pub reason: StructuralNoop,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_error_message() {
        let error = RecoverableFieldError::new("Bread", RecoverableField::Price, "abc", 3);
        assert_eq!(
            error.to_string(),
            "Could not parse price value 'abc' for product 'Bread' (line 3)"
        );
        assert_eq!(error.field.fallback(), "0");
        assert_eq!(RecoverableField::Quantity.fallback(), "unknown");
    }

    #[test]
    fn test_ignored_line_serializes_reason_inline() {
        let ignored = IgnoredLine {
            line: 7,
            reason: StructuralNoop::UnknownKey {
                key: "color".to_string(),
            },
        };
        let json = serde_json::to_value(&ignored).unwrap();
        assert_eq!(json["line"], 7);
        assert_eq!(json["reason"], "unknown_key");
        assert_eq!(json["key"], "color");
    }
}
