//! HTTP client abstraction used by the remote loader.
//!
//! No transport ships with this crate. Wrap whatever client your application already
//! uses (reqwest, hyper, a platform session) in an [`HttpClient`] impl:
//!
//! ```ignore
//! struct ReqwestClient(reqwest::Client);
//!
//! impl HttpClient for ReqwestClient {
//!     async fn get(&self, url: &Url) -> essential_feed::Result<HttpResponse> {
//!         let response = self.0.get(url.clone()).send().await
//!             .map_err(|_| essential_feed::Error::Connectivity)?;
//!         let status = response.status().as_u16();
//!         let body = response.bytes().await
//!             .map_err(|_| essential_feed::Error::Connectivity)?;
//!         Ok(HttpResponse::new(status, body.to_vec()))
//!     }
//! }
//! ```

use crate::error::Result;
use url::Url;

/// Status code accepted by the feed mapper.
pub const OK_200: u16 = 200;

/// A delivered HTTP response: status code and raw body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        HttpResponse { status, body }
    }

    /// True for exactly 200. Other 2xx codes are not accepted.
    pub fn is_ok(&self) -> bool {
        self.status == OK_200
    }
}

/// Trait for HTTP client implementations.
///
/// **IMPORTANT:** `get` takes `&self` so one client can be shared between loaders.
/// Implementations should use interior mutability if they keep state.
///
/// Any `Err` returned here is treated by the remote loader as a transport failure,
/// regardless of its variant.
#[allow(async_fn_in_trait)]
pub trait HttpClient: Send + Sync {
    /// Issue a GET request to `url`.
    ///
    /// # Errors
    /// Returns `Err` when no response could be obtained.
    async fn get(&self, url: &Url) -> Result<HttpResponse>;
}
