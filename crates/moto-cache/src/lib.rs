//! Key-value persistence for the motoparts storefront.
//!
//! The storefront core needs exactly one thing from its host: a string
//! key-value store with get/set/remove. This crate defines that seam
//! ([`KeyValueStore`]), ships two backends, and layers typed JSON access
//! on top of it ([`Cache`]).
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use moto_cache::{Cache, MemoryStore};
//!
//! let cache = Cache::new(Arc::new(MemoryStore::new()));
//!
//! cache.set("motoparts_search_history", &vec!["brake".to_string()]).unwrap();
//! let history: Option<Vec<String>> = cache.get("motoparts_search_history").unwrap();
//! assert_eq!(history, Some(vec!["brake".to_string()]));
//!
//! cache.delete("motoparts_search_history").unwrap();
//! ```

mod error;
mod kv;
mod store;

pub use error::CacheError;
pub use kv::Cache;
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KeyValueStore, MemoryStore};
}
