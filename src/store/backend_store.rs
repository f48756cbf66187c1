//! [`FeedStore`] over a key-value [`CacheBackend`].

use super::{CachedFeed, FeedStore, LocalFeedImage};
use crate::backend::CacheBackend;
use crate::error::{Error, Result};
use crate::serialization::{deserialize_from_cache, serialize_for_cache};
use chrono::{DateTime, Utc};

/// Key the cache record is stored under unless overridden with [`BackendFeedStore::with_key`].
pub const DEFAULT_CACHE_KEY: &str = "essential-feed:cache";

/// Feed store persisting a single [`CachedFeed`] record into a backend.
///
/// The record is wrapped in a versioned envelope (see [`crate::serialization`]), so a
/// corrupt or outdated record surfaces as a retrieval error, never as a silently empty
/// cache.
///
/// # Example
///
/// ```no_run
/// use essential_feed::backend::InMemoryBackend;
/// use essential_feed::store::{BackendFeedStore, FeedStore};
///
/// #[tokio::main]
/// async fn main() -> essential_feed::Result<()> {
///     let store = BackendFeedStore::new(InMemoryBackend::new()).with_key("user-42:feed");
///     assert!(store.retrieve().await?.is_none());
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BackendFeedStore<B: CacheBackend> {
    backend: B,
    key: String,
}

impl<B: CacheBackend> BackendFeedStore<B> {
    pub fn new(backend: B) -> Self {
        BackendFeedStore {
            backend,
            key: DEFAULT_CACHE_KEY.to_string(),
        }
    }

    /// Store the record under a custom key (e.g. one cache per account).
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get backend reference (for advanced use).
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: CacheBackend> FeedStore for BackendFeedStore<B> {
    async fn delete_cached_feed(&self) -> Result<()> {
        self.backend.delete(&self.key).await.map_err(into_store_error)
    }

    async fn insert(&self, feed: Vec<LocalFeedImage>, timestamp: DateTime<Utc>) -> Result<()> {
        let bytes = serialize_for_cache(&CachedFeed::new(feed, timestamp))?;
        self.backend
            .set(&self.key, bytes)
            .await
            .map_err(into_store_error)
    }

    async fn retrieve(&self) -> Result<Option<CachedFeed>> {
        match self.backend.get(&self.key).await.map_err(into_store_error)? {
            Some(bytes) => deserialize_from_cache::<CachedFeed>(&bytes).map(Some),
            None => Ok(None),
        }
    }
}

fn into_store_error(e: Error) -> Error {
    match e {
        Error::StoreError(_) => e,
        other => Error::StoreError(other.to_string()),
    }
}
