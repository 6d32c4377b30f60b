//! # Store Errors
//!
//! Every backend reports failures through [`StoreError`], so callers can
//! match on the failure kind without knowing which backend is plugged in.

/// Errors that can occur while reading or writing snapshot records.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum StoreError {
    /// A value could not be turned into a JSON record body.
    #[error("Failed to encode record {key}: {reason}")]
    Encode { key: String, reason: String },

    /// A record body could not be turned back into a typed value.
    #[error("Failed to decode record {key}: {reason}")]
    Decode { key: String, reason: String },

    /// The backend refused or could not complete the operation.
    #[error("Snapshot store unavailable: {0}")]
    Unavailable(String),
}
