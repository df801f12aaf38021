//! Category Cache Module
//!
//! Memoizes the raw records fetched for each category.

use std::collections::HashMap;
use std::time::Duration;

use crate::catalog::{CacheEntry, CacheStats, Category, Record};

// == Cache Policy ==
/// How long cached categories stay valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CachePolicy {
    /// `None` keeps entries for the whole process lifetime
    pub max_age: Option<Duration>,
}

impl CachePolicy {
    /// Entries are never expired; only explicit invalidation removes them.
    pub fn permanent() -> Self {
        Self { max_age: None }
    }

    pub fn with_max_age(max_age: Duration) -> Self {
        Self {
            max_age: Some(max_age),
        }
    }
}

// == Category Cache ==
/// Per-category record cache with an explicit expiry policy.
#[derive(Debug, Default)]
pub struct CategoryCache {
    entries: HashMap<Category, CacheEntry>,
    policy: CachePolicy,
    stats: CacheStats,
}

impl CategoryCache {
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            entries: HashMap::new(),
            policy,
            stats: CacheStats::new(),
        }
    }

    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    // == Get ==
    /// Returns the cached records for a category.
    ///
    /// Stale entries are dropped and reported as misses.
    pub fn get(&mut self, category: Category) -> Option<Vec<Record>> {
        let stale = match self.entries.get(&category) {
            Some(entry) => entry.is_stale(self.policy.max_age),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if stale {
            self.entries.remove(&category);
            self.stats.record_invalidations(1);
            self.stats.record_miss();
            return None;
        }

        self.stats.record_hit();
        self.entries.get(&category).map(|entry| entry.records.clone())
    }

    // == Put ==
    /// Stores a category's records. A later put for the same category replaces
    /// the earlier one.
    pub fn put(&mut self, category: Category, records: Vec<Record>) {
        self.entries.insert(category, CacheEntry::new(records));
    }

    pub fn contains(&self, category: Category) -> bool {
        self.entries.contains_key(&category)
    }

    // == Invalidate ==
    /// Drops one category. Returns true if it was cached.
    pub fn invalidate(&mut self, category: Category) -> bool {
        let removed = self.entries.remove(&category).is_some();
        if removed {
            self.stats.record_invalidations(1);
        }
        removed
    }

    // == Clear ==
    /// Drops every category. Returns how many were cached.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        self.stats.record_invalidations(count);
        count
    }

    // == Cleanup Expired ==
    /// Removes all entries older than the policy's max age.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let max_age = self.policy.max_age;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_stale(max_age));
        let removed = before - self.entries.len();
        self.stats.record_invalidations(removed);
        removed
    }

    // == Stats ==
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
