//! JSON mapping for the remote feed endpoint.
//!
//! Wire format:
//!
//! ```text
//! {"items": [{"id": "<uuid>", "description": "..", "location": "..", "image": "<url>"}]}
//! ```
//!
//! `description` and `location` may be missing or `null`.

use crate::error::{Error, Result};
use crate::feed::FeedImage;
use crate::http::OK_200;
use serde::Deserialize;
use url::Url;
use uuid::Uuid;

#[derive(Deserialize)]
struct Root {
    items: Vec<RemoteFeedItem>,
}

/// Wire DTO for a single feed item.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RemoteFeedItem {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image: Url,
}

impl From<RemoteFeedItem> for FeedImage {
    fn from(item: RemoteFeedItem) -> Self {
        FeedImage {
            id: item.id,
            description: item.description,
            location: item.location,
            url: item.image,
        }
    }
}

/// Maps raw HTTP responses into domain feed images.
pub struct FeedItemsMapper;

impl FeedItemsMapper {
    /// Decode the wire DTOs, without translating them to the domain model.
    ///
    /// # Errors
    /// `Error::InvalidData` unless `status` is 200 and `body` decodes.
    pub fn map_items(body: &[u8], status: u16) -> Result<Vec<RemoteFeedItem>> {
        if status != OK_200 {
            debug!("Rejecting feed response with status {}", status);
            return Err(Error::InvalidData);
        }

        let root: Root = serde_json::from_slice(body).map_err(|e| {
            debug!("Feed payload failed to decode: {}", e);
            Error::InvalidData
        })?;
        Ok(root.items)
    }

    /// Decode and translate to [`FeedImage`], preserving order.
    ///
    /// # Errors
    /// `Error::InvalidData` unless `status` is 200 and `body` decodes.
    pub fn map(body: &[u8], status: u16) -> Result<Vec<FeedImage>> {
        Self::map_items(body, status).map(|items| items.into_iter().map(FeedImage::from).collect())
    }
}
