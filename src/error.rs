//! Error handling for catalog parsing and reporting.
//!
//! Fatal failures travel as [`Error`]. Malformed weight expressions carry a
//! [`WeightFormatError`] together with the owning product and line so the
//! caller can point at the offending text. Recoverable field problems never
//! reach this module; they are collected as diagnostics by the parser.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for catalog parsing, configuration and reporting
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input catalog does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Malformed weight expression; aborts the whole parse
    #[error("Format error in product '{product}' (line {line})")]
    Format {
        product: String,
        line: usize,
        #[source]
        source: WeightFormatError,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Strict validation found defaulted fields
    #[error("Validation failed: {defaulted_fields} field value(s) fell back to defaults")]
    ValidationFailed { defaulted_fields: usize },

    /// JSON encoding or decoding failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Reasons a weight expression (`<number> <unit>`) is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WeightFormatError {
    #[error("Invalid weight format: '{input}'. Expected format is '<number> <unit>'")]
    TokenCount { input: String },

    #[error("Invalid weight value: '{value}' in '{input}'")]
    InvalidValue { value: String, input: String },

    #[error("Unknown weight unit: '{unit}' in '{input}'")]
    UnknownUnit { unit: String, input: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Attach product context to a weight parse failure
    pub fn format(product: impl Into<String>, line: usize, source: WeightFormatError) -> Self {
        Self::Format {
            product: product.into(),
            line,
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a strict validation failure
    pub fn validation_failed(defaulted_fields: usize) -> Self {
        Self::ValidationFailed { defaulted_fields }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// True for errors raised by malformed catalog content rather than the environment
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::Format { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_names_product_and_keeps_unit_in_source() {
        let error = Error::format(
            "Bread",
            4,
            WeightFormatError::UnknownUnit {
                unit: "lb".to_string(),
                input: "3 lb".to_string(),
            },
        );

        assert!(error.is_format_error());
        let message = error.to_string();
        assert!(message.contains("Bread"));
        assert!(message.contains("line 4"));
        assert!(!message.contains("'lb'"));

        let source = std::error::Error::source(&error).unwrap();
        assert!(source.to_string().contains("'lb'"));
    }

    #[test]
    fn test_io_error_is_not_format_error() {
        let error = Error::io(
            "Failed to read catalog",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(!error.is_format_error());
        assert_eq!(error.to_string(), "I/O error: Failed to read catalog");
    }
}
