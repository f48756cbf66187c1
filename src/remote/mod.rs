//! Remote feed loading over an [`HttpClient`].

pub mod mapper;

pub use mapper::{FeedItemsMapper, RemoteFeedItem};

use crate::error::{Error, Result};
use crate::feed::{FeedImage, FeedLoader};
use crate::http::HttpClient;
use crate::observability::{FeedMetrics, NoOpMetrics};
use std::time::Instant;
use url::Url;

/// Loads the feed from a single endpoint.
///
/// Each call to [`load`](FeedLoader::load) issues exactly one GET. Construction issues
/// none.
///
/// # Example
///
/// ```ignore
/// use essential_feed::{FeedLoader, RemoteFeedLoader};
///
/// let url = Url::parse("https://example.com/feed")?;
/// let loader = RemoteFeedLoader::new(my_client, url);
/// let feed = loader.load().await?;
/// ```
pub struct RemoteFeedLoader<C: HttpClient> {
    client: C,
    url: Url,
    metrics: Box<dyn FeedMetrics>,
}

impl<C: HttpClient> RemoteFeedLoader<C> {
    pub fn new(client: C, url: Url) -> Self {
        RemoteFeedLoader {
            client,
            url,
            metrics: Box::new(NoOpMetrics),
        }
    }

    /// Set custom metrics handler.
    pub fn with_metrics(mut self, metrics: Box<dyn FeedMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    /// The endpoint this loader requests.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Get client reference (for advanced use).
    pub fn client(&self) -> &C {
        &self.client
    }
}

impl<C: HttpClient> FeedLoader for RemoteFeedLoader<C> {
    /// # Errors
    ///
    /// - `Error::Connectivity`: the client returned any error
    /// - `Error::InvalidData`: non-200 status or undecodable body
    async fn load(&self) -> Result<Vec<FeedImage>> {
        let timer = Instant::now();
        debug!("» Remote feed load from {}", self.url);

        let response = match self.client.get(&self.url).await {
            Ok(response) => response,
            Err(e) => {
                debug!("HTTP client failed for {}: {}", self.url, e);
                self.metrics
                    .record_error("remote_load", &Error::Connectivity.to_string());
                return Err(Error::Connectivity);
            }
        };

        match FeedItemsMapper::map(&response.body, response.status) {
            Ok(feed) => {
                self.metrics.record_remote_load(feed.len(), timer.elapsed());
                info!(
                    "✓ Remote feed loaded {} images in {:?}",
                    feed.len(),
                    timer.elapsed()
                );
                Ok(feed)
            }
            Err(e) => {
                self.metrics.record_error("remote_load", &e.to_string());
                Err(e)
            }
        }
    }
}
