//! Cache age policy.

use crate::error::{Error, Result};
use chrono::{DateTime, Days, Utc};

/// Default maximum cache age, in days.
pub const DEFAULT_MAX_AGE_DAYS: u64 = 7;

/// Decides whether a cache saved at some timestamp may still be served.
///
/// A cache is valid while `now < timestamp + max_age_days`. At exactly the maximum age
/// it is expired.
///
/// ```
/// use chrono::{Duration, Utc};
/// use essential_feed::local::FeedCachePolicy;
///
/// let policy = FeedCachePolicy::default();
/// let now = Utc::now();
///
/// assert!(policy.validate(now - Duration::days(7) + Duration::seconds(1), now));
/// assert!(!policy.validate(now - Duration::days(7), now));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedCachePolicy {
    max_age_days: u64,
}

impl FeedCachePolicy {
    /// Policy with a custom maximum age.
    ///
    /// # Errors
    /// `Error::ConfigError` when `max_age_days` is zero.
    pub fn new(max_age_days: u64) -> Result<Self> {
        if max_age_days == 0 {
            return Err(Error::ConfigError(
                "cache max age must be at least one day".to_string(),
            ));
        }
        Ok(FeedCachePolicy { max_age_days })
    }

    pub fn max_age_days(&self) -> u64 {
        self.max_age_days
    }

    /// Whether a cache saved at `timestamp` is still valid at `now`.
    pub fn validate(&self, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match timestamp.checked_add_days(Days::new(self.max_age_days)) {
            Some(max_age) => now < max_age,
            None => false,
        }
    }
}

impl Default for FeedCachePolicy {
    fn default() -> Self {
        FeedCachePolicy {
            max_age_days: DEFAULT_MAX_AGE_DAYS,
        }
    }
}
