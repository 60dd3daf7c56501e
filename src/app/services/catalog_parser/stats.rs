//! Parsing statistics and result structures for catalog processing
//!
//! This module provides types for tracking what the parser did with each
//! line and for handing the finished records to downstream consumers.

use super::diagnostics::{IgnoredLine, RecoverableField, RecoverableFieldError, StructuralNoop};
use crate::app::models::ProductRecord;
use serde::Serialize;

/// Parsing result with records and statistics
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    /// Product records in header order
    pub records: Vec<ProductRecord>,

    /// Parsing statistics and non-fatal diagnostics
    pub stats: ParseStats,
}

impl ParseResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            stats: ParseStats::new(),
        }
    }

    /// Number of parsed product records
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Read-only view of the records
    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }
}

impl Default for ParseResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Line-level parsing statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseStats {
    /// Non-empty lines examined
    pub total_lines: usize,

    /// Product header lines that started a record
    pub header_lines: usize,

    /// Recognized attribute lines assigned to a record (defaulted ones included)
    pub attributes_applied: usize,

    /// Fields that fell back to their default value
    pub recoverable_errors: Vec<RecoverableFieldError>,

    /// Lines skipped without effect
    pub ignored_lines: Vec<IgnoredLine>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_lines: 0,
            header_lines: 0,
            attributes_applied: 0,
            recoverable_errors: Vec::new(),
            ignored_lines: Vec::new(),
        }
    }

    /// Record a field that was defaulted
    pub fn add_recoverable(&mut self, error: RecoverableFieldError) {
        self.recoverable_errors.push(error);
    }

    /// Record a skipped line
    pub fn add_ignored(&mut self, line: usize, reason: StructuralNoop) {
        self.ignored_lines.push(IgnoredLine { line, reason });
    }

    /// Check whether any field fell back to a default
    pub fn has_recoverable_errors(&self) -> bool {
        !self.recoverable_errors.is_empty()
    }

    /// Number of prices that fell back to 0
    ///
    /// Quantities that fell back to unknown are excluded; they stay silent.
    pub fn defaulted_prices(&self) -> usize {
        self.recoverable_errors
            .iter()
            .filter(|error| error.field == RecoverableField::Price)
            .count()
    }

    /// Number of skipped lines
    pub fn ignored_count(&self) -> usize {
        self.ignored_lines.len()
    }

    /// Get summary of parsing statistics
    pub fn summary(&self) -> String {
        format!(
            "Parse Summary: {} lines | {} products | {} attributes | \
             {} defaulted fields | {} ignored lines",
            self.total_lines,
            self.header_lines,
            self.attributes_applied,
            self.recoverable_errors.len(),
            self.ignored_count()
        )
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
