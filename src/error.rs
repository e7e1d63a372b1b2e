//! Error types for the kgsolr library.
//!
//! Building documents never fails; field assignments that cannot be applied
//! are reported through [`crate::document::uri_document::FieldOutcome`]
//! instead. The errors below cover the surrounding concerns: reading record
//! files, parsing JSON, loading configuration and running the CLI.
//!
//! # Examples
//!
//! ```
//! use kgsolr::error::{KgSolrError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(KgSolrError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for kgsolr operations.
#[derive(Error, Debug)]
pub enum KgSolrError {
    /// I/O errors (reading record files, writing output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Record parsing errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with KgSolrError.
pub type Result<T> = std::result::Result<T, KgSolrError>;

impl KgSolrError {
    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        KgSolrError::Parse(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        KgSolrError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        KgSolrError::Other(format!("Invalid argument: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = KgSolrError::parse("unexpected token");
        assert_eq!(error.to_string(), "Parse error: unexpected token");

        let error = KgSolrError::config("empty child key");
        assert_eq!(error.to_string(), "Configuration error: empty child key");

        let error = KgSolrError::invalid_argument("batch size");
        assert_eq!(error.to_string(), "Error: Invalid argument: batch size");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let kg_error = KgSolrError::from(io_error);

        match kg_error {
            KgSolrError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(KgSolrError::from(json_error), KgSolrError::Json(_)));
    }
}
