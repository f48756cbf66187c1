//! Feed domain model and the loader abstraction shared by every source.

use crate::error::Result;
use url::Url;
use uuid::Uuid;

/// A single image in the feed.
///
/// Immutable value type. Remote and local DTOs map 1:1 onto it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FeedImage {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub url: Url,
}

impl FeedImage {
    pub fn new(
        id: Uuid,
        description: Option<String>,
        location: Option<String>,
        url: Url,
    ) -> Self {
        FeedImage {
            id,
            description,
            location,
            url,
        }
    }
}

/// Generic trait for anything that can produce a feed.
///
/// Implemented by [`RemoteFeedLoader`](crate::remote::RemoteFeedLoader),
/// [`LocalFeedLoader`](crate::local::LocalFeedLoader) and
/// [`FeedService`](crate::service::FeedService), so callers can swap sources freely.
///
/// # Example
///
/// ```
/// use essential_feed::{FeedImage, FeedLoader, Result};
///
/// struct EmptyFeed;
///
/// impl FeedLoader for EmptyFeed {
///     async fn load(&self) -> Result<Vec<FeedImage>> {
///         Ok(Vec::new())
///     }
/// }
/// ```
#[allow(async_fn_in_trait)]
pub trait FeedLoader: Send + Sync {
    /// Load the feed.
    ///
    /// Dropping the returned future cancels the load; no result is produced afterwards.
    ///
    /// # Errors
    /// Returns `Err` when the underlying source fails.
    async fn load(&self) -> Result<Vec<FeedImage>>;
}
