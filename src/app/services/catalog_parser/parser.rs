//! Catalog parser entry points
//!
//! Handles reading the catalog file and logging around the record parser.

use std::path::Path;
use tracing::{debug, info, warn};

use super::record_parser::parse_records;
use super::stats::ParseResult;
use crate::{Error, Result};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parser for indentation-delimited product catalogs
///
/// The whole input is read into memory and parsed in a single pass.
#[derive(Debug, Clone, Default)]
pub struct CatalogParser;

impl CatalogParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse catalog text held in memory
    pub fn parse_str(&self, text: &str) -> Result<ParseResult> {
        let result = parse_records(text)?;
        debug!("{}", result.stats.summary());
        Ok(result)
    }

    /// Read and parse a catalog file
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing catalog file: {}", file_path.display());

        if !file_path.exists() {
            return Err(Error::file_not_found(file_path));
        }

        let content = std::fs::read_to_string(file_path).map_err(|e| {
            Error::io(
                format!("Failed to read file {}", file_path.display()),
                e,
            )
        })?;

        let text = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(&content);
        let result = self.parse_str(text)?;

        info!(
            "Parsed {} products from {} lines",
            result.record_count(),
            result.stats.total_lines
        );
        let defaulted_prices = result.stats.defaulted_prices();
        if defaulted_prices > 0 {
            warn!("{} price value(s) fell back to 0", defaulted_prices);
        }

        Ok(result)
    }
}
