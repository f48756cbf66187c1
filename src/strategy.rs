//! Load strategies for the [`FeedService`](crate::service::FeedService) facade.
//!
//! # The Four Strategies
//!
//! ```
//! use essential_feed::strategy::LoadStrategy;
//!
//! // 1. CacheOnly - Local cache, never the network
//! let _s = LoadStrategy::CacheOnly;
//!
//! // 2. RemoteWithFallback - Network first, cache on failure (default)
//! let _s = LoadStrategy::RemoteWithFallback;
//!
//! // 3. Invalidate - Evict an expired/corrupt cache, then RemoteWithFallback
//! let _s = LoadStrategy::Invalidate;
//!
//! // 4. RemoteOnly - Network only, nothing cached
//! let _s = LoadStrategy::RemoteOnly;
//! ```
//!
//! | Strategy | Hits network | Saves to cache | Falls back to cache |
//! |----------|--------------|----------------|---------------------|
//! | **CacheOnly** | No | No | n/a |
//! | **RemoteWithFallback** | Yes | On success | On remote failure |
//! | **Invalidate** | Yes | On success | On remote failure |
//! | **RemoteOnly** | Yes | No | No |

/// Strategy enum controlling which sources a feed load uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoadStrategy {
    /// **CacheOnly**: Serve the local cache only.
    ///
    /// Flow:
    /// 1. Load from cache (expired or empty -> empty feed)
    CacheOnly,

    /// **RemoteWithFallback**: Prefer the network, keep the cache warm.
    ///
    /// Flow:
    /// 1. Load remote
    /// 2. If ok: save to cache (failure only logged), return remote feed
    /// 3. If failed: load from cache; if that fails too, return the remote error
    #[default]
    RemoteWithFallback,

    /// **Invalidate**: Validate the cache before a `RemoteWithFallback` load.
    ///
    /// Typical use: app start-up, so an expired cache is never a fallback.
    Invalidate,

    /// **RemoteOnly**: Skip the cache entirely.
    RemoteOnly,
}

impl LoadStrategy {
    /// Whether this strategy calls the remote loader at all.
    pub fn uses_remote(&self) -> bool {
        !matches!(self, LoadStrategy::CacheOnly)
    }
}

impl std::fmt::Display for LoadStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadStrategy::CacheOnly => write!(f, "CacheOnly"),
            LoadStrategy::RemoteWithFallback => write!(f, "RemoteWithFallback"),
            LoadStrategy::Invalidate => write!(f, "Invalidate"),
            LoadStrategy::RemoteOnly => write!(f, "RemoteOnly"),
        }
    }
}
