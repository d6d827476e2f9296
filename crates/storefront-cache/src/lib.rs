//! Type-safe key-value storage for the storefront.
//!
//! A small [`KeyValueStore`] trait sits under a JSON-serializing [`Cache`]
//! wrapper. Stores provided here:
//!
//! - [`MemoryStore`] for tests and embedding
//! - [`FileStore`] for durable local storage (one file per key)
//! - `SpinStore` for Spin's hosted Key-Value Store (`wasm32` only)
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_cache::{Cache, FileStore};
//!
//! let cache = Cache::new(FileStore::open(".storefront")?);
//!
//! // Store a value
//! cache.set("cart", &items)?;
//!
//! // Retrieve a value
//! let items: Option<Vec<CartLineItem>> = cache.get("cart")?;
//!
//! // Delete a value
//! cache.delete("cart")?;
//! ```

mod error;
mod kv;

pub use error::CacheError;
#[cfg(target_arch = "wasm32")]
pub use kv::SpinStore;
pub use kv::{Cache, FileStore, KeyValueStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KeyValueStore, MemoryStore};
}
