//! Error types for the Lancea library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`LanceaError`] enum.
//!
//! # Examples
//!
//! ```
//! use lancea::error::{LanceaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LanceaError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

use crate::document::DocumentId;

/// The main error type for Lancea operations.
///
/// Uses the `thiserror` crate for the `Error` trait implementation and
/// provides constructor methods for the common error kinds.
#[derive(Error, Debug)]
pub enum LanceaError {
    /// I/O errors (document files, stop-word files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A caller-supplied value violates the index contract: negative or
    /// duplicate document ids, tokens with control bytes, malformed
    /// query terms, invalid stop words.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested document is not present in the index.
    #[error("Document {0} not found")]
    DocumentNotFound(DocumentId),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with [`LanceaError`].
pub type Result<T> = std::result::Result<T, LanceaError>;

impl LanceaError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LanceaError::InvalidArgument(msg.into())
    }

    /// Create a new not-found error for the given document id.
    pub fn not_found(document_id: DocumentId) -> Self {
        LanceaError::DocumentNotFound(document_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LanceaError::invalid_argument("negative document id");
        assert_eq!(error.to_string(), "Invalid argument: negative document id");

        let error = LanceaError::not_found(42);
        assert_eq!(error.to_string(), "Document 42 not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = LanceaError::from(io_error);

        match error {
            LanceaError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
