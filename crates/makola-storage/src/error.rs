//! Storage error types.

use thiserror::Error;

/// Errors that can occur when reading or writing a store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Underlying filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend-specific failure.
    #[error("Store operation failed: {0}")]
    Backend(String),
}
