//! Cache Entry Module
//!
//! A stored value plus the write time and lifetime that decide its freshness.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

// == Cache Entry ==
/// A single cached value with its creation time and TTL.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored payload (opaque to the store)
    pub value: V,
    /// Write timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Lifetime in milliseconds, counted from `created_at`
    pub ttl_ms: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry stamped with the current time.
    pub fn new(value: V, ttl_ms: u64) -> Self {
        Self {
            value,
            created_at: current_timestamp_ms(),
            ttl_ms,
        }
    }

    /// Milliseconds elapsed since the entry was written.
    pub fn age_ms(&self) -> u64 {
        current_timestamp_ms().saturating_sub(self.created_at)
    }

    /// Milliseconds left before expiry. Zero or negative once expired.
    pub fn remaining_ms(&self) -> i64 {
        remaining_after(self.ttl_ms, self.age_ms())
    }

    // == Is Expired ==
    /// An entry is expired as soon as its full TTL has elapsed.
    pub fn is_expired(&self) -> bool {
        self.age_ms() >= self.ttl_ms
    }

    /// Snapshot of the entry's timing metadata.
    pub fn info(&self, key: &str) -> EntryInfo {
        let age_ms = self.age_ms();
        EntryInfo {
            key: key.to_string(),
            created_at: self.created_at,
            age_ms,
            ttl_ms: self.ttl_ms,
            remaining_ms: remaining_after(self.ttl_ms, age_ms),
            is_expired: age_ms >= self.ttl_ms,
        }
    }
}

// == Entry Info ==
/// Introspection view of an entry, as returned by `CacheStore::describe`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryInfo {
    pub key: String,
    pub created_at: u64,
    pub age_ms: u64,
    pub ttl_ms: u64,
    pub remaining_ms: i64,
    pub is_expired: bool,
}

// == Utility Functions ==
/// `ttl_ms - age_ms` as a signed value, saturating at the `i64` bounds.
fn remaining_after(ttl_ms: u64, age_ms: u64) -> i64 {
    let ttl = i64::try_from(ttl_ms).unwrap_or(i64::MAX);
    let age = i64::try_from(age_ms).unwrap_or(i64::MAX);
    ttl.saturating_sub(age)
}

/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
