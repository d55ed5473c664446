//! Invalidation Module
//!
//! Maps a changed resource type to the cache entries it makes stale.

mod router;
mod rules;

pub use router::{entity_key, invalidate, invalidate_by_id, invalidate_resource};
pub use rules::{MatchRule, ResourceType};
