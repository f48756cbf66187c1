//! # essential-feed
//!
//! Remote and local feed loading with a validated, time-bounded cache.
//!
//! ## Features
//!
//! - **Remote loading:** One GET per load through any [`HttpClient`], strict JSON mapping
//! - **Local cache:** Delete-then-insert saves, 7-day expiry, cache validation/eviction
//! - **Pluggable persistence:** Any [`FeedStore`]; [`BackendFeedStore`](store::BackendFeedStore)
//!   persists into a key-value [`CacheBackend`]
//! - **Facade:** [`FeedService`] combines both sources with a [`LoadStrategy`] and retry
//! - **Injected clock:** Expiry is fully testable, no sleeping
//!
//! ## Quick Start
//!
//! ```ignore
//! use essential_feed::{
//!     FeedLoader, FeedService, LocalFeedLoader, RemoteFeedLoader,
//!     backend::InMemoryBackend,
//!     store::BackendFeedStore,
//! };
//!
//! // 1. Wrap your HTTP client
//! let remote = RemoteFeedLoader::new(MyHttpClient::new(), feed_url);
//!
//! // 2. Pick a store and a clock
//! let store = BackendFeedStore::new(InMemoryBackend::new());
//! let local = LocalFeedLoader::with_system_clock(store);
//!
//! // 3. Load: network first, cache kept warm, cache used when offline
//! let service = FeedService::new(remote, local);
//! let feed = service.load().await?;
//! ```

#[macro_use]
extern crate log;

pub mod backend;
pub mod error;
pub mod feed;
pub mod http;
pub mod local;
pub mod observability;
pub mod remote;
pub mod serialization;
pub mod service;
pub mod store;
pub mod strategy;

// Re-exports for convenience
pub use backend::CacheBackend;
pub use error::{Error, Result};
pub use feed::{FeedImage, FeedLoader};
pub use http::{HttpClient, HttpResponse};
pub use local::{FeedCachePolicy, LocalFeedLoader};
pub use remote::RemoteFeedLoader;
pub use service::{FeedService, ServiceConfig};
pub use store::{CachedFeed, FeedStore, LocalFeedImage};
pub use strategy::LoadStrategy;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
