//! Expired-Entry Sweeper
//!
//! Optional background task that removes expired entries so they stop
//! showing up in `keys()` and `len()`. Readers never depend on it: `get`
//! already refuses expired entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a task that calls `cleanup_expired` every `cleanup_interval_secs`.
///
/// Returns the task handle; abort it on shutdown.
///
/// # Example
/// ```ignore
/// let cache: ApiCache<serde_json::Value> = ApiCache::new(300_000);
/// let cleanup_handle = spawn_cleanup_task(cache.store(), 60);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task<V>(
    cache: Arc<RwLock<CacheStore<V>>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    spawn_cleanup_task_every(cache, Duration::from_secs(cleanup_interval_secs))
}

/// Same as [`spawn_cleanup_task`] with an arbitrary period.
pub fn spawn_cleanup_task_every<V>(
    cache: Arc<RwLock<CacheStore<V>>>,
    interval: Duration,
) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!(?interval, "Starting expired-entry sweeper");

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.cleanup_expired()
            };

            if removed > 0 {
                info!("Sweep: removed {} expired entries", removed);
            } else {
                debug!("Sweep: no expired entries found");
            }
        }
    })
}
