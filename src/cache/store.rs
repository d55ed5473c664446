//! Cache Store Module
//!
//! HashMap storage with TTL expiry. Expired entries are deleted lazily the
//! first time a read finds them, or in bulk by `cleanup_expired`.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, EntryInfo, DEFAULT_TTL_MS};

// == Cache Store ==
/// Single-owner cache storage. Share it through `ApiCache`, which serializes
/// access behind a lock.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Read and removal counters
    stats: CacheStats,
    /// TTL in milliseconds for writes that don't specify one
    default_ttl_ms: u64,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store whose writes default to `default_ttl_ms`.
    pub fn new(default_ttl_ms: u64) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            default_ttl_ms,
        }
    }

    pub fn default_ttl_ms(&self) -> u64 {
        self.default_ttl_ms
    }

    // == Set ==
    /// Inserts or replaces the entry for `key`.
    ///
    /// Replacing an entry restarts its age from zero. `ttl_ms = None` falls
    /// back to the store default.
    pub fn set(&mut self, key: impl Into<String>, value: V, ttl_ms: Option<u64>) {
        let key = key.into();
        let ttl_ms = ttl_ms.unwrap_or(self.default_ttl_ms);
        debug!(key = %key, ttl_ms, "cache set");

        self.entries.insert(key, CacheEntry::new(value, ttl_ms));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns the value for `key` if present and fresh, recording a hit or
    /// a miss. An expired entry is removed and reported as absent.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let value = self.fresh_entry(key).map(|entry| entry.value.clone());
        match value {
            Some(_) => self.stats.record_hit(),
            None => self.stats.record_miss(),
        }
        value
    }

    // == Has ==
    /// Presence check with the same expiry rules as `get`. Does not count as
    /// a hit or a miss.
    pub fn has(&mut self, key: &str) -> bool {
        self.fresh_entry(key).is_some()
    }

    /// The single freshness check behind `get` and `has`: returns the entry
    /// only if it has not expired, deleting it otherwise.
    fn fresh_entry(&mut self, key: &str) -> Option<&CacheEntry<V>> {
        let expired = self.entries.get(key)?.is_expired();
        if expired {
            self.entries.remove(key);
            self.stats.record_expirations(1);
            self.stats.set_total_entries(self.entries.len());
            debug!(key, "cache entry expired on read");
            return None;
        }
        self.entries.get(key)
    }

    // == Delete ==
    /// Removes `key` if present. Returns whether anything was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.stats.set_total_entries(self.entries.len());
        }
        removed
    }

    /// Removes every key starting with `prefix`, expired or not.
    ///
    /// Returns the number of entries removed.
    pub fn delete_prefix(&mut self, prefix: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.starts_with(prefix));
        let removed = before - self.entries.len();
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Clear ==
    /// Removes all entries. Returns how many there were.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        self.stats.set_total_entries(0);
        removed
    }

    // == Keys ==
    /// Snapshot of every indexed key, including expired entries that no read
    /// has swept yet.
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    // == Describe ==
    /// Timing metadata for `key` without touching the entry, so it can report
    /// `is_expired: true`.
    pub fn describe(&self, key: &str) -> Option<EntryInfo> {
        self.entries.get(key).map(|entry| entry.info(key))
    }

    // == Stats ==
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Counts entries removed on behalf of the invalidation router.
    pub fn record_invalidations(&mut self, count: usize) {
        self.stats.record_invalidations(count);
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        let count = before - self.entries.len();

        self.stats.record_expirations(count);
        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Length ==
    /// Number of indexed entries (may include unswept expired ones).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> Default for CacheStore<V> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL_MS)
    }
}
