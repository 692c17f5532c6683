//! Error types for the catalog crate.
//!
//! Loading is the only fallible part of working with a catalog; building
//! one in memory and filtering it never fails.

use thiserror::Error;

/// Errors that can occur while loading or parsing a product catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open catalog file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A line in a catalog file couldn't be parsed
    ///
    /// `line` is 1-based.
    #[error("Parse error at line {line}: {reason}")]
    ParseError { line: usize, reason: String },

    /// An attribute had a value outside its enumeration
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Expected number of `::` separated fields doesn't match actual
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },

    /// A JSON catalog was malformed
    #[error("Invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog validation failed after loading
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
