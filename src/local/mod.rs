//! Local cache loading: save, load and validate a feed through a [`FeedStore`].

pub mod policy;

pub use policy::{FeedCachePolicy, DEFAULT_MAX_AGE_DAYS};

use crate::error::Result;
use crate::feed::{FeedImage, FeedLoader};
use crate::observability::{FeedMetrics, NoOpMetrics};
use crate::store::{CachedFeed, FeedStore, LocalFeedImage};
use chrono::{DateTime, Utc};
use std::time::Instant;

type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Cache use cases over an injected store and clock.
///
/// # Example
///
/// ```no_run
/// use essential_feed::backend::InMemoryBackend;
/// use essential_feed::store::BackendFeedStore;
/// use essential_feed::{FeedLoader, LocalFeedLoader};
///
/// #[tokio::main]
/// async fn main() -> essential_feed::Result<()> {
///     let store = BackendFeedStore::new(InMemoryBackend::new());
///     let loader = LocalFeedLoader::with_system_clock(store);
///
///     loader.save(&[]).await?;
///     assert!(loader.load().await?.is_empty());
///     Ok(())
/// }
/// ```
pub struct LocalFeedLoader<S: FeedStore> {
    store: S,
    current_date: Clock,
    policy: FeedCachePolicy,
    metrics: Box<dyn FeedMetrics>,
}

impl<S: FeedStore> LocalFeedLoader<S> {
    /// Create a loader. Nothing is sent to the store until an operation is called.
    pub fn new<F>(store: S, current_date: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        LocalFeedLoader {
            store,
            current_date: Box::new(current_date),
            policy: FeedCachePolicy::default(),
            metrics: Box::new(NoOpMetrics),
        }
    }

    /// Create a loader reading the wall clock.
    pub fn with_system_clock(store: S) -> Self {
        Self::new(store, Utc::now)
    }

    /// Set custom cache age policy.
    pub fn with_policy(mut self, policy: FeedCachePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set custom metrics handler.
    pub fn with_metrics(mut self, metrics: Box<dyn FeedMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn policy(&self) -> &FeedCachePolicy {
        &self.policy
    }

    /// Get store reference (for advanced use).
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the cache with `feed`, timestamped with the current date.
    ///
    /// The old cache is deleted first. If deletion fails nothing is inserted.
    ///
    /// # Errors
    /// The deletion error, or else the insertion error.
    pub async fn save(&self, feed: &[FeedImage]) -> Result<()> {
        let timer = Instant::now();
        debug!("» Saving {} images to feed cache", feed.len());

        if let Err(e) = self.store.delete_cached_feed().await {
            self.metrics.record_error("cache_deletion", &e.to_string());
            return Err(e);
        }

        let local: Vec<LocalFeedImage> = feed.iter().map(LocalFeedImage::from).collect();
        if let Err(e) = self.store.insert(local, (self.current_date)()).await {
            self.metrics.record_error("cache_insertion", &e.to_string());
            return Err(e);
        }

        self.metrics.record_save(feed.len(), timer.elapsed());
        info!("✓ Feed cache saved in {:?}", timer.elapsed());
        Ok(())
    }

    /// Delete the cache if it cannot be retrieved or has expired.
    ///
    /// Empty and valid caches are left alone.
    ///
    /// # Errors
    /// Returns the deletion error if the eviction itself fails.
    pub async fn validate_cache(&self) -> Result<()> {
        debug!("» Validating feed cache");

        let reason = match self.store.retrieve().await {
            Err(e) => {
                warn!("Feed cache unreadable, evicting: {}", e);
                "retrieval failure"
            }
            Ok(Some(cache)) if !self.is_valid(&cache) => "expired",
            Ok(_) => return Ok(()),
        };

        match self.store.delete_cached_feed().await {
            Ok(()) => {
                self.metrics.record_eviction(reason);
                warn!("⚠ Feed cache evicted ({})", reason);
                Ok(())
            }
            Err(e) => {
                self.metrics.record_error("cache_eviction", &e.to_string());
                Err(e)
            }
        }
    }

    fn is_valid(&self, cache: &CachedFeed) -> bool {
        self.policy.validate(cache.timestamp, (self.current_date)())
    }
}

impl<S: FeedStore> FeedLoader for LocalFeedLoader<S> {
    /// Deliver the cached feed while it is valid, an empty feed otherwise.
    ///
    /// Never deletes anything; eviction is [`LocalFeedLoader::validate_cache`]'s job.
    ///
    /// # Errors
    /// The store's retrieval error.
    async fn load(&self) -> Result<Vec<FeedImage>> {
        let timer = Instant::now();
        debug!("» Loading feed from cache");

        match self.store.retrieve().await {
            Ok(Some(cache)) if self.is_valid(&cache) => {
                let feed: Vec<FeedImage> = cache.feed.into_iter().map(FeedImage::from).collect();
                self.metrics.record_cache_hit(feed.len(), timer.elapsed());
                Ok(feed)
            }
            Ok(Some(cache)) => {
                self.metrics
                    .record_cache_expired((self.current_date)() - cache.timestamp);
                Ok(Vec::new())
            }
            Ok(None) => {
                self.metrics.record_cache_miss(timer.elapsed());
                Ok(Vec::new())
            }
            Err(e) => {
                self.metrics.record_error("cache_retrieval", &e.to_string());
                Err(e)
            }
        }
    }
}
