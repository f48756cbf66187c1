//! Observability hooks for feed loading and caching.
//!
//! Implement [`FeedMetrics`] to forward loader events to your monitoring system:
//!
//! ```ignore
//! use essential_feed::observability::FeedMetrics;
//! use std::time::Duration;
//!
//! struct PrometheusMetrics;
//!
//! impl FeedMetrics for PrometheusMetrics {
//!     fn record_cache_hit(&self, images: usize, _duration: Duration) {
//!         // counter!("feed_cache_hits").inc();
//!         // histogram!("feed_cache_images").record(images as f64);
//!     }
//!     // ... implement other methods
//! }
//!
//! // let loader = LocalFeedLoader::with_system_clock(store)
//! //     .with_metrics(Box::new(PrometheusMetrics));
//! ```
//!
//! Loaders default to [`NoOpMetrics`]. The trait's own default methods log through the
//! `log` crate, so an empty `impl FeedMetrics for MyMetrics {}` gives log-only metrics.
//!
//! | Event | Emitted by |
//! |-------|-----------|
//! | `record_cache_hit` | `LocalFeedLoader::load` with a valid cache |
//! | `record_cache_miss` | `LocalFeedLoader::load` with an empty cache |
//! | `record_cache_expired` | `LocalFeedLoader::load` with an expired cache |
//! | `record_save` | `LocalFeedLoader::save` after insertion |
//! | `record_eviction` | `LocalFeedLoader::validate_cache` after deletion |
//! | `record_remote_load` | `RemoteFeedLoader::load` on success |
//! | `record_error` | any of the above on failure |

use std::time::Duration;

/// Trait for feed metrics collection.
pub trait FeedMetrics: Send + Sync {
    /// A valid cache was delivered.
    fn record_cache_hit(&self, images: usize, duration: Duration) {
        debug!("Feed cache HIT: {} images in {:?}", images, duration);
    }

    /// The cache was empty.
    fn record_cache_miss(&self, duration: Duration) {
        debug!("Feed cache MISS in {:?}", duration);
    }

    /// A cache was found but is older than the policy allows.
    fn record_cache_expired(&self, age: chrono::Duration) {
        debug!("Feed cache EXPIRED: age {}", age);
    }

    /// A feed was written to the cache.
    fn record_save(&self, images: usize, duration: Duration) {
        debug!("Feed cache SAVE: {} images in {:?}", images, duration);
    }

    /// The cache was deleted during validation.
    fn record_eviction(&self, reason: &str) {
        debug!("Feed cache EVICT: {}", reason);
    }

    /// A remote load succeeded.
    fn record_remote_load(&self, images: usize, duration: Duration) {
        debug!("Remote feed LOAD: {} images in {:?}", images, duration);
    }

    /// An operation failed.
    fn record_error(&self, operation: &str, error: &str) {
        warn!("Feed ERROR during {}: {}", operation, error);
    }
}

/// Default metrics implementation (no-op).
#[derive(Clone, Default)]
pub struct NoOpMetrics;

impl FeedMetrics for NoOpMetrics {
    fn record_cache_hit(&self, _images: usize, _duration: Duration) {}
    fn record_cache_miss(&self, _duration: Duration) {}
    fn record_cache_expired(&self, _age: chrono::Duration) {}
    fn record_save(&self, _images: usize, _duration: Duration) {}
    fn record_eviction(&self, _reason: &str) {}
    fn record_remote_load(&self, _images: usize, _duration: Duration) {}
    fn record_error(&self, _operation: &str, _error: &str) {}
}

/// Metrics that only log, using the trait's default methods.
#[derive(Clone, Default)]
pub struct LogMetrics;

impl FeedMetrics for LogMetrics {}
