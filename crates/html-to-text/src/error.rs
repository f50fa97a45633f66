//! Error types for HTML to text conversion.

use thiserror::Error;

/// Errors that can occur while converting HTML to text.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The HTML parser could not produce a document tree.
    #[error("HTML parsing error: {0}")]
    ParseError(String),
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConversionError>;
