//! Cache Expiry Task
//!
//! Background task that periodically drops cached categories older than the
//! cache policy's max age.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::catalog::CategoryCache;

/// Spawns a background task that periodically removes stale cache entries.
///
/// With a permanent cache policy each sweep finds nothing to remove.
///
/// # Arguments
/// * `cache` - shared reference to the category cache
/// * `cleanup_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, aborted during graceful shutdown.
pub fn spawn_cleanup_task(
    cache: Arc<RwLock<CategoryCache>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    spawn_cleanup_task_every(cache, Duration::from_secs(cleanup_interval_secs))
}

/// Same as [`spawn_cleanup_task`] with an arbitrary interval.
pub fn spawn_cleanup_task_every(
    cache: Arc<RwLock<CategoryCache>>,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(?interval, "starting cache expiry task");

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.cleanup_expired()
            };

            if removed > 0 {
                info!("cache expiry: removed {} stale categories", removed);
            } else {
                debug!("cache expiry: nothing to remove");
            }
        }
    })
}
