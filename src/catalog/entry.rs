//! Cache Entry Module
//!
//! One category's cached records together with their fetch time.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::catalog::Record;

// == Cache Entry ==
/// Raw (unpriced) records last fetched for a category.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub records: Vec<Record>,
    /// Fetch timestamp (Unix milliseconds)
    pub fetched_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            fetched_at: current_timestamp_ms(),
        }
    }

    // == Age ==
    /// Milliseconds since the records were fetched.
    pub fn age_ms(&self) -> u64 {
        current_timestamp_ms().saturating_sub(self.fetched_at)
    }

    // == Is Stale ==
    /// Checks the entry against an optional maximum age.
    ///
    /// Without a maximum age an entry never goes stale. With one, the entry is
    /// stale once its age reaches the limit.
    pub fn is_stale(&self, max_age: Option<Duration>) -> bool {
        match max_age {
            Some(limit) => u128::from(self.age_ms()) >= limit.as_millis(),
            None => false,
        }
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_never_stale_without_max_age() {
        let entry = CacheEntry {
            records: Vec::new(),
            fetched_at: 0,
        };
        assert!(!entry.is_stale(None));
    }

    #[test]
    fn test_entry_fresh_within_max_age() {
        let entry = CacheEntry::new(Vec::new());
        assert!(!entry.is_stale(Some(Duration::from_secs(60))));
    }

    #[test]
    fn test_entry_goes_stale() {
        let entry = CacheEntry::new(Vec::new());
        sleep(Duration::from_millis(30));
        assert!(entry.is_stale(Some(Duration::from_millis(10))));
    }

    #[test]
    fn test_zero_max_age_is_stale_immediately() {
        let entry = CacheEntry::new(Vec::new());
        assert!(entry.is_stale(Some(Duration::ZERO)));
    }
}
