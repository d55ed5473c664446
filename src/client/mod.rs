//! Client Module
//!
//! The shared cache handle handed to whatever layer issues API calls, plus
//! the fetch-through and mutation wrappers built on it.

mod fetch;
mod key;
mod mutation;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::cache::{CacheStats, CacheStore, EntryInfo};
use crate::config::Config;
use crate::invalidation;

pub use fetch::{FetchOptions, Fetched};
pub use key::compose_cache_key;

// == Api Cache ==
/// Cloneable handle to one process-wide cache.
///
/// Every clone shares the same store; all store access is serialized through
/// an `RwLock`. Reads that may delete an expired entry take the write lock.
pub struct ApiCache<V> {
    store: Arc<RwLock<CacheStore<V>>>,
}

impl<V> Clone for ApiCache<V> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<V: Clone> ApiCache<V> {
    pub fn new(default_ttl_ms: u64) -> Self {
        Self::from_store(CacheStore::new(default_ttl_ms))
    }

    pub fn from_store(store: CacheStore<V>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.default_ttl_ms)
    }

    /// The underlying shared store, for background tasks.
    pub fn store(&self) -> Arc<RwLock<CacheStore<V>>> {
        Arc::clone(&self.store)
    }

    pub async fn get(&self, key: &str) -> Option<V> {
        self.store.write().await.get(key)
    }

    pub async fn has(&self, key: &str) -> bool {
        self.store.write().await.has(key)
    }

    pub async fn set(&self, key: impl Into<String>, value: V, ttl_ms: Option<u64>) {
        self.store.write().await.set(key, value, ttl_ms);
    }

    /// Manual cache-busting. Missing keys are a no-op.
    pub async fn delete(&self, key: &str) -> bool {
        self.store.write().await.delete(key)
    }

    pub async fn clear(&self) -> usize {
        self.store.write().await.clear()
    }

    pub async fn keys(&self) -> Vec<String> {
        self.store.read().await.keys()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    pub async fn describe(&self, key: &str) -> Option<EntryInfo> {
        self.store.read().await.describe(key)
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    /// See [`invalidation::invalidate`].
    pub async fn invalidate(&self, resource_type: &str) -> usize {
        let mut store = self.store.write().await;
        invalidation::invalidate(&mut *store, resource_type)
    }

    /// See [`invalidation::invalidate_by_id`].
    pub async fn invalidate_by_id(&self, resource_type: &str, id: impl std::fmt::Display) -> bool {
        let mut store = self.store.write().await;
        invalidation::invalidate_by_id(&mut *store, resource_type, id)
    }
}
