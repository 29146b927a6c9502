//! Storage error types.

use thiserror::Error;

/// Errors raised by key-value stores and the typed cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The backing storage could not be opened.
    #[error("Failed to open storage: {0}")]
    OpenError(String),

    /// A stored value is not valid JSON for the requested type, or a value
    /// could not be encoded.
    #[error("Malformed stored value: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// The backend refused the operation.
    #[error("Storage operation failed: {0}")]
    StoreError(String),

    /// Filesystem failure in a file-backed store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
