//! Configuration Module
//!
//! Handles loading and managing browser configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::catalog::{CachePolicy, DEFAULT_PAGE_SIZE};
use crate::client::DEFAULT_BASE_URL;

/// Browser and server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the random-data API, ending in `/`
    pub base_url: String,
    /// Initial records requested per category (coerced like any other assignment)
    pub records_per_page: i64,
    /// Maximum age of cached categories in seconds, 0 = never expire
    pub cache_max_age: u64,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Delay between search fetch initiations in milliseconds
    pub search_stagger_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `RANDOM_DATA_BASE_URL` - Remote API base (default: public random-data API)
    /// - `RECORDS_PER_PAGE` - Initial page size (default: 10)
    /// - `CACHE_MAX_AGE` - Cache max age in seconds, 0 disables expiry (default: 0)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 60)
    /// - `SEARCH_STAGGER_MS` - Delay between search fetches (default: 200)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            base_url: env::var("RANDOM_DATA_BASE_URL").unwrap_or(defaults.base_url),
            records_per_page: env_or("RECORDS_PER_PAGE", defaults.records_per_page),
            cache_max_age: env_or("CACHE_MAX_AGE", defaults.cache_max_age),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval),
            search_stagger_ms: env_or("SEARCH_STAGGER_MS", defaults.search_stagger_ms),
        }
    }

    /// Cache policy implied by `cache_max_age`.
    pub fn cache_policy(&self) -> CachePolicy {
        match self.cache_max_age {
            0 => CachePolicy::permanent(),
            secs => CachePolicy::with_max_age(Duration::from_secs(secs)),
        }
    }

    pub fn search_stagger(&self) -> Duration {
        Duration::from_millis(self.search_stagger_ms)
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            base_url: DEFAULT_BASE_URL.to_string(),
            records_per_page: i64::from(DEFAULT_PAGE_SIZE),
            cache_max_age: 0,
            cleanup_interval: 60,
            search_stagger_ms: 200,
        }
    }
}
