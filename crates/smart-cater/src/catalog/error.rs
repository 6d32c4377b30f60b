//! Error types for catalog loading.

use thiserror::Error;

/// Errors that make a whole catalog source unusable.
///
/// A single bad entry is not an error: it is logged and skipped.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog {path}: {reason}")]
    Io { path: String, reason: String },

    /// The document is not valid JSON.
    #[error("Catalog is not valid JSON: {0}")]
    Parse(String),

    /// The document is valid JSON but not a list of meals.
    #[error("Catalog must be a JSON array of meals")]
    NotAList,
}
