//! Key-value store abstraction with typed JSON helpers.

use crate::StorageError;
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

/// Byte-oriented key-value backend.
///
/// Implementations decide where bytes live (process memory, files on disk).
/// Values are opaque to the backend; callers that want typed access go
/// through [`get_json`] and [`set_json`].
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Check whether `key` currently holds a value.
    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.get(key).await?.is_some())
    }
}

/// Read a value from `store` and deserialize it from JSON.
///
/// Returns `None` if the key doesn't exist.
///
/// # Example
///
/// ```rust,ignore
/// let items: Option<Vec<CartItem>> = get_json(&store, "cart").await?;
/// ```
pub async fn get_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get(key).await? {
        Some(bytes) => {
            let value: T = serde_json::from_slice(&bytes)?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

/// Serialize `value` as JSON and write it to `store`.
///
/// # Example
///
/// ```rust,ignore
/// set_json(&store, "cart", &items).await?;
/// ```
pub async fn set_json<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let bytes = serde_json::to_vec(value)?;
    store.set(key, &bytes).await
}
