//! Line splitting and classification for catalog text
//!
//! A catalog line is one of:
//! - a product header (`\t - Name:`)
//! - an attribute (`\t\t - key: value`)
//! - anything else, which the parser ignores

use crate::constants::{ATTRIBUTE_MARKER, ATTRIBUTE_SEPARATOR, HEADER_MARKER, attribute_keys};

/// Classified view of one raw catalog line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogLine<'a> {
    /// Product header; `name` has trailing colons stripped
    Header { name: &'a str },
    /// Attribute with trimmed key and value
    Attribute { key: &'a str, value: &'a str },
    /// Attribute marker present but no `:` separator
    AttributeWithoutSeparator,
    /// Any other line
    Other,
}

impl<'a> CatalogLine<'a> {
    /// Classify a raw line. Header markers are checked before attribute markers.
    pub fn classify(line: &'a str) -> Self {
        if let Some(rest) = line.strip_prefix(HEADER_MARKER) {
            return CatalogLine::Header {
                name: rest.trim_end_matches(ATTRIBUTE_SEPARATOR),
            };
        }

        if let Some(rest) = line.strip_prefix(ATTRIBUTE_MARKER) {
            return match rest.split_once(ATTRIBUTE_SEPARATOR) {
                Some((key, value)) => CatalogLine::Attribute {
                    key: key.trim(),
                    value: value.trim(),
                },
                None => CatalogLine::AttributeWithoutSeparator,
            };
        }

        CatalogLine::Other
    }
}

/// Attribute keys the parser assigns to a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKey {
    Price,
    Quantity,
    Weight,
}

impl AttributeKey {
    /// Match a trimmed attribute key (exact, case-sensitive)
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            attribute_keys::PRICE => Some(AttributeKey::Price),
            attribute_keys::QUANTITY => Some(AttributeKey::Quantity),
            attribute_keys::WEIGHT => Some(AttributeKey::Weight),
            _ => None,
        }
    }
}

/// Non-empty lines of `text` with their 1-based line numbers
///
/// Accepts both `\n` and `\r\n` line breaks. Line numbers count the empty
/// lines that are skipped, so they point into the original file.
pub fn catalog_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(index, line)| (index + 1, line))
}
