//! Feed service facade combining the remote and local loaders.

use crate::error::Result;
use crate::feed::{FeedImage, FeedLoader};
use crate::http::HttpClient;
use crate::local::LocalFeedLoader;
use crate::remote::RemoteFeedLoader;
use crate::store::FeedStore;
use crate::strategy::LoadStrategy;
use std::time::{Duration, Instant};

/// Base delay for retry backoff; attempt `n` waits `BASE * 2^(n-1)`.
const RETRY_BASE_DELAY: Duration = Duration::from_millis(100);

/// Upper bound for a single backoff wait.
const RETRY_MAX_DELAY: Duration = Duration::from_secs(30);

/// Wait before retrying after failed attempt `attempt` (1-based), capped at
/// [`RETRY_MAX_DELAY`].
fn backoff_delay(attempt: u32) -> Duration {
    2_u32
        .checked_pow(attempt.saturating_sub(1))
        .and_then(|factor| RETRY_BASE_DELAY.checked_mul(factor))
        .map_or(RETRY_MAX_DELAY, |delay| delay.min(RETRY_MAX_DELAY))
}

/// Configuration for the service.
///
/// # Example
///
/// ```
/// use essential_feed::service::ServiceConfig;
/// use essential_feed::strategy::LoadStrategy;
///
/// let config = ServiceConfig::default()
///     .with_strategy(LoadStrategy::Invalidate)
///     .with_retry(3);
/// assert_eq!(config.retry_count, 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ServiceConfig {
    /// Strategy used by [`FeedLoader::load`].
    pub strategy: LoadStrategy,

    /// Extra remote attempts after a connectivity failure (0 = no retry).
    ///
    /// Only `Error::Connectivity` is retried; invalid data is final.
    pub retry_count: u32,
}

impl ServiceConfig {
    pub fn with_strategy(mut self, strategy: LoadStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set retry count for remote loads.
    pub fn with_retry(mut self, count: u32) -> Self {
        self.retry_count = count;
        self
    }
}

/// High-level feed repository facade.
///
/// # Example
///
/// ```ignore
/// use essential_feed::{FeedLoader, FeedService, LocalFeedLoader, RemoteFeedLoader};
///
/// let remote = RemoteFeedLoader::new(client, url);
/// let local = LocalFeedLoader::with_system_clock(BackendFeedStore::new(InMemoryBackend::new()));
/// let service = FeedService::new(remote, local);
///
/// // Network first, cache on failure
/// let feed = service.load().await?;
///
/// // Offline
/// let cached = service.load_with(LoadStrategy::CacheOnly).await?;
/// ```
pub struct FeedService<C: HttpClient, S: FeedStore> {
    remote: RemoteFeedLoader<C>,
    local: LocalFeedLoader<S>,
    config: ServiceConfig,
}

impl<C: HttpClient, S: FeedStore> FeedService<C, S> {
    pub fn new(remote: RemoteFeedLoader<C>, local: LocalFeedLoader<S>) -> Self {
        FeedService {
            remote,
            local,
            config: ServiceConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ServiceConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn remote(&self) -> &RemoteFeedLoader<C> {
        &self.remote
    }

    pub fn local(&self) -> &LocalFeedLoader<S> {
        &self.local
    }

    /// Load the feed with an explicit strategy, ignoring the configured one.
    ///
    /// # Errors
    ///
    /// - `CacheOnly`: the cache retrieval error
    /// - `RemoteWithFallback` / `Invalidate`: the remote error, when the cache fallback
    ///   also fails
    /// - `RemoteOnly`: the remote error
    pub async fn load_with(&self, strategy: LoadStrategy) -> Result<Vec<FeedImage>> {
        let timer = Instant::now();
        debug!("» Feed service load (strategy: {})", strategy);

        let result = match strategy {
            LoadStrategy::CacheOnly => self.local.load().await,
            LoadStrategy::RemoteWithFallback => self.remote_with_fallback().await,
            LoadStrategy::Invalidate => {
                if let Err(e) = self.local.validate_cache().await {
                    warn!("Cache validation failed before load: {}", e);
                }
                self.remote_with_fallback().await
            }
            LoadStrategy::RemoteOnly => self.load_remote().await,
        };

        if let Ok(feed) = &result {
            info!(
                "✓ Feed service delivered {} images in {:?}",
                feed.len(),
                timer.elapsed()
            );
        }
        result
    }

    async fn remote_with_fallback(&self) -> Result<Vec<FeedImage>> {
        match self.load_remote().await {
            Ok(feed) => {
                if let Err(e) = self.local.save(&feed).await {
                    warn!("Failed to cache remote feed: {}", e);
                }
                Ok(feed)
            }
            Err(remote_error) => {
                debug!(
                    "Remote load failed ({}), falling back to cache",
                    remote_error
                );
                self.local.load().await.map_err(|cache_error| {
                    warn!("Cache fallback failed too: {}", cache_error);
                    remote_error
                })
            }
        }
    }

    /// Remote load with retry and capped exponential backoff.
    async fn load_remote(&self) -> Result<Vec<FeedImage>> {
        let max_attempts = self.config.retry_count.saturating_add(1);
        let mut attempts = 0;

        loop {
            attempts += 1;

            match self.remote.load().await {
                Ok(feed) => return Ok(feed),
                Err(e) => {
                    if attempts >= max_attempts || !e.is_retryable() {
                        return Err(e);
                    }

                    debug!(
                        "Remote load failed (attempt {}/{}), retrying...",
                        attempts, max_attempts
                    );

                    tokio::time::sleep(backoff_delay(attempts)).await;
                }
            }
        }
    }
}

impl<C: HttpClient, S: FeedStore> FeedLoader for FeedService<C, S> {
    async fn load(&self) -> Result<Vec<FeedImage>> {
        self.load_with(self.config.strategy).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_doubles_from_base() {
        assert_eq!(backoff_delay(1), Duration::from_millis(100));
        assert_eq!(backoff_delay(2), Duration::from_millis(200));
        assert_eq!(backoff_delay(3), Duration::from_millis(400));
    }

    #[test]
    fn test_backoff_is_capped() {
        assert_eq!(backoff_delay(10), RETRY_MAX_DELAY);
        assert_eq!(backoff_delay(33), RETRY_MAX_DELAY);
        assert_eq!(backoff_delay(u32::MAX), RETRY_MAX_DELAY);
    }
}
