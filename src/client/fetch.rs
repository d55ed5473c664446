//! Fetch-through: serve from the cache, otherwise call the producer and
//! remember its result.

use std::future::Future;

use serde::Serialize;
use tracing::debug;

use super::ApiCache;

// == Fetch Options ==
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchOptions {
    /// TTL for a freshly produced value; `None` uses the store default
    pub ttl_ms: Option<u64>,
    /// Drop any cached value first so the producer always runs
    pub force_refresh: bool,
}

impl FetchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ttl_ms(mut self, ttl_ms: u64) -> Self {
        self.ttl_ms = Some(ttl_ms);
        self
    }

    pub fn force_refresh(mut self, force_refresh: bool) -> Self {
        self.force_refresh = force_refresh;
        self
    }
}

// == Fetched ==
/// A value plus where it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fetched<V> {
    pub value: V,
    pub from_cache: bool,
}

impl<V: Clone> ApiCache<V> {
    /// Returns the cached value for `key`, or runs `producer` and caches what
    /// it returns.
    ///
    /// A producer error is returned unchanged and nothing is cached. The
    /// lock is released while the producer runs, so concurrent cold calls for
    /// the same key each invoke their producer; the last write wins.
    pub async fn fetch_through<F, Fut, E>(
        &self,
        key: &str,
        producer: F,
        options: FetchOptions,
    ) -> Result<Fetched<V>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let cached = {
            let mut store = self.store.write().await;
            if options.force_refresh {
                store.delete(key);
            }
            store.get(key)
        };

        if let Some(value) = cached {
            debug!(key, "served from cache");
            return Ok(Fetched {
                value,
                from_cache: true,
            });
        }

        let value = producer().await?;
        self.store
            .write()
            .await
            .set(key, value.clone(), options.ttl_ms);
        debug!(key, force_refresh = options.force_refresh, "cache populated");

        Ok(Fetched {
            value,
            from_cache: false,
        })
    }
}
