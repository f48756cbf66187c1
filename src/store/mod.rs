//! Feed store abstraction and its storage DTOs.
//!
//! The [`FeedStore`] trait decouples [`LocalFeedLoader`](crate::local::LocalFeedLoader)
//! from where the cache physically lives. This crate ships
//! [`BackendFeedStore`], which persists into any [`CacheBackend`](crate::backend::CacheBackend).
//!
//! # Implementing FeedStore
//!
//! Implementations must honor these contracts:
//!
//! - `retrieve` has no side effects: retrieving twice yields the same result,
//!   including the same kind of failure
//! - `insert` overrides any previously inserted cache
//! - `delete_cached_feed` on an empty store succeeds and leaves it empty
//!
//! The contract suite in `tests/feed_store_contract_test.rs` exercises exactly these
//! and is written so another implementation can be dropped in.

pub mod backend_store;

pub use backend_store::BackendFeedStore;

use crate::error::Result;
use crate::feed::FeedImage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// Storage DTO for a feed image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalFeedImage {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub url: Url,
}

impl From<&FeedImage> for LocalFeedImage {
    fn from(image: &FeedImage) -> Self {
        LocalFeedImage {
            id: image.id,
            description: image.description.clone(),
            location: image.location.clone(),
            url: image.url.clone(),
        }
    }
}

impl From<LocalFeedImage> for FeedImage {
    fn from(local: LocalFeedImage) -> Self {
        FeedImage {
            id: local.id,
            description: local.description,
            location: local.location,
            url: local.url,
        }
    }
}

/// A stored cache record: the images in their original order plus the save time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedFeed {
    pub feed: Vec<LocalFeedImage>,
    pub timestamp: DateTime<Utc>,
}

impl CachedFeed {
    pub fn new(feed: Vec<LocalFeedImage>, timestamp: DateTime<Utc>) -> Self {
        CachedFeed { feed, timestamp }
    }
}

/// Trait for feed persistence.
///
/// **IMPORTANT:** All methods use `&self`; implementations use interior mutability.
#[allow(async_fn_in_trait)]
pub trait FeedStore: Send + Sync {
    /// Delete the cached feed, if any.
    ///
    /// # Errors
    /// Returns `Err` if the store could not delete.
    async fn delete_cached_feed(&self) -> Result<()>;

    /// Replace the cached feed with `feed` saved at `timestamp`.
    ///
    /// # Errors
    /// Returns `Err` if the store could not write.
    async fn insert(&self, feed: Vec<LocalFeedImage>, timestamp: DateTime<Utc>) -> Result<()>;

    /// Read the cached feed.
    ///
    /// # Returns
    /// - `Ok(None)` - Empty store
    /// - `Ok(Some(cache))` - Found
    ///
    /// # Errors
    /// Returns `Err` if the store could not read or the record is corrupt.
    async fn retrieve(&self) -> Result<Option<CachedFeed>>;
}
