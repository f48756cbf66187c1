//! Key-value backends that a [`BackendFeedStore`](crate::store::BackendFeedStore)
//! persists into.

use crate::error::Result;

pub mod inmemory;

pub use inmemory::InMemoryBackend;

/// Trait for key-value backend implementations.
///
/// Abstracts raw byte storage so the feed store stays independent of where bytes live.
///
/// **IMPORTANT:** All methods use `&self` instead of `&mut self` to allow concurrent access.
/// Backend implementations should use interior mutability (RwLock, Mutex, DashMap, or
/// external storage).
#[allow(async_fn_in_trait)]
pub trait CacheBackend: Send + Sync + Clone {
    /// Retrieve value by key.
    ///
    /// # Returns
    /// - `Ok(Some(bytes))` - Value found
    /// - `Ok(None)` - Key not found
    ///
    /// # Errors
    /// Returns `Err` if backend error occurs
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store value, replacing any previous value under `key`.
    ///
    /// # Errors
    /// Returns `Err` if backend error occurs
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()>;

    /// Remove value. Removing a missing key succeeds.
    ///
    /// # Errors
    /// Returns `Err` if backend error occurs
    async fn delete(&self, key: &str) -> Result<()>;

    /// Check if key exists (optional optimization).
    ///
    /// # Errors
    /// Returns `Err` if backend error occurs
    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }
}
