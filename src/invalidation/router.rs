//! Applies the dependency table to a store.

use tracing::{debug, warn};

use crate::cache::CacheStore;
use crate::invalidation::{MatchRule, ResourceType};

/// Deletes every entry made stale by a write to `resource_type`.
///
/// Unknown resource types remove nothing; they are logged so a misspelled
/// name doesn't go unnoticed. Returns the number of entries removed.
pub fn invalidate<V: Clone>(store: &mut CacheStore<V>, resource_type: &str) -> usize {
    match resource_type.parse::<ResourceType>() {
        Ok(rt) => invalidate_resource(store, rt),
        Err(_) => {
            warn!(resource_type, "no invalidation rules for resource type");
            0
        }
    }
}

/// Typed form of [`invalidate`].
pub fn invalidate_resource<V: Clone>(store: &mut CacheStore<V>, resource_type: ResourceType) -> usize {
    let mut removed = 0;
    for rule in resource_type.rules() {
        removed += match rule {
            MatchRule::Exact(key) => store.delete(key) as usize,
            MatchRule::Prefix(prefix) => store.delete_prefix(prefix),
        };
    }

    store.record_invalidations(removed);
    debug!(resource_type = %resource_type, removed, "cache invalidated");
    removed
}

/// Builds the per-entity key `{resource_type}_{id}`.
pub fn entity_key(resource_type: &str, id: impl std::fmt::Display) -> String {
    format!("{}_{}", resource_type, id)
}

/// Deletes the single entry `{resource_type}_{id}`.
///
/// `resource_type` need not appear in the dependency table.
pub fn invalidate_by_id<V: Clone>(
    store: &mut CacheStore<V>,
    resource_type: &str,
    id: impl std::fmt::Display,
) -> bool {
    let key = entity_key(resource_type, id);
    let removed = store.delete(&key);
    if removed {
        store.record_invalidations(1);
    }
    debug!(key = %key, removed, "cache entry invalidated by id");
    removed
}
