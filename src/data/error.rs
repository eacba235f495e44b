//! Error types for document operations
//!
//! Provides unified error handling for importing, exporting, and validating
//! topology documents.

use thiserror::Error;

/// Errors that can occur while loading or saving a topology document
#[derive(Error, Debug)]
pub enum DocumentError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON or a schema violation (unknown object type,
    /// non-integer point index, wrong position arity, ...)
    #[error("Invalid document: {0}")]
    Json(#[from] serde_json::Error),

    /// An object references a point that does not exist
    #[error("Object {object} references point {index}, but the document only has {len} points")]
    DanglingPoint { object: usize, index: usize, len: usize },
}

/// Result type alias for document operations
pub type DocumentResult<T> = Result<T, DocumentError>;
