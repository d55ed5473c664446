//! Cache Module
//!
//! In-memory key/value storage with per-entry TTL and expiry-on-read.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry, EntryInfo};
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Default entry lifetime: 5 minutes
pub const DEFAULT_TTL_MS: u64 = 5 * 60 * 1000;
