//! Pluggable key-value persistence for the Makola storefront.
//!
//! Backends store raw bytes under string keys; JSON serialization is layered
//! on top with [`get_json`] and [`set_json`] so the backend contract stays
//! encoding-free.
//!
//! # Example
//!
//! ```rust,ignore
//! use makola_storage::{FileStore, get_json, set_json};
//!
//! let store = FileStore::open("~/.makola").await?;
//!
//! // Store a value
//! set_json(&store, "cart", &items).await?;
//!
//! // Retrieve it later
//! let items: Option<Vec<CartItem>> = get_json(&store, "cart").await?;
//! ```

mod error;
mod file;
mod kv;
mod memory;

pub use error::StorageError;
pub use file::FileStore;
pub use kv::{get_json, set_json, KeyValueStore};
pub use memory::MemoryStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{get_json, set_json, FileStore, KeyValueStore, MemoryStore, StorageError};
}
