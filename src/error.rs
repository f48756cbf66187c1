//! Error types for feed loading and caching.

use std::fmt;

/// Result type for feed operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for feed loading and caching.
///
/// Remote loads only ever fail with [`Error::Connectivity`] or [`Error::InvalidData`].
/// The remaining variants come from the cache side (stores, backends and the
/// envelope codec).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Transport failure: the HTTP client could not deliver a response.
    ///
    /// **Recovery:** Retry, or fall back to the local cache.
    Connectivity,

    /// The response was delivered but cannot be used.
    ///
    /// Returned when:
    /// - The HTTP status is anything other than 200
    /// - The body is not a valid `{"items": [...]}` document
    InvalidData,

    /// Feed store or cache backend failure (retrieval, insertion or deletion).
    StoreError(String),

    /// Serialization failed when converting a cached feed to bytes.
    SerializationError(String),

    /// Deserialization failed when converting stored bytes back to a cached feed.
    ///
    /// **Recovery:** The cache should be evicted, see `LocalFeedLoader::validate_cache`.
    DeserializationError(String),

    /// Stored bytes do not start with the expected envelope magic.
    InvalidCacheEntry(String),

    /// Schema version mismatch between code and stored data.
    VersionMismatch {
        /// Expected schema version (from compiled code)
        expected: u32,
        /// Found schema version (from stored entry)
        found: u32,
    },

    /// Invalid configuration (e.g. a zero-day cache policy).
    ConfigError(String),

    /// Generic error with custom message.
    Other(String),
}

impl Error {
    /// Whether repeating the same operation may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Connectivity)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Connectivity => write!(f, "Connectivity error"),
            Error::InvalidData => write!(f, "Invalid data"),
            Error::StoreError(msg) => write!(f, "Store error: {}", msg),
            Error::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            Error::DeserializationError(msg) => write!(f, "Deserialization error: {}", msg),
            Error::InvalidCacheEntry(msg) => write!(f, "Invalid cache entry: {}", msg),
            Error::VersionMismatch { expected, found } => {
                write!(
                    f,
                    "Cache version mismatch: expected {}, found {}",
                    expected, found
                )
            }
            Error::ConfigError(msg) => write!(f, "Config error: {}", msg),
            Error::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ============================================================================
// Conversions from other error types
// ============================================================================

impl From<serde_json::Error> for Error {
    fn from(_: serde_json::Error) -> Self {
        Error::InvalidData
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::StoreError(e.to_string())
    }
}

impl From<String> for Error {
    fn from(e: String) -> Self {
        Error::Other(e)
    }
}

impl From<&str> for Error {
    fn from(e: &str) -> Self {
        Error::Other(e.to_string())
    }
}
