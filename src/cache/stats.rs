//! Cache Statistics Module
//!
//! Counters for reads, expirations and invalidation-driven removals.

use serde::Serialize;

// == Cache Stats ==
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// `get` calls that returned a fresh value (`has` is not counted)
    pub hits: u64,
    /// `get` calls that found nothing usable (absent or expired)
    pub misses: u64,
    /// Entries removed because their TTL had elapsed
    pub expirations: u64,
    /// Entries removed by the invalidation router
    pub invalidations: u64,
    /// Currently indexed entries (may include unswept expired ones)
    pub total_entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no reads have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_expirations(&mut self, count: usize) {
        self.expirations += count as u64;
    }

    pub fn record_invalidations(&mut self, count: usize) {
        self.invalidations += count as u64;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
