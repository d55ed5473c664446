//! Mutation wrapper: a successful write invalidates the caches it affects.

use std::future::Future;

use tracing::debug;

use super::ApiCache;
use crate::invalidation;

impl<V: Clone> ApiCache<V> {
    /// Runs `mutator`; if it succeeds, invalidates each of `resource_types`
    /// in order and returns the mutator's result.
    ///
    /// A failed mutator invalidates nothing and its error is returned as is.
    pub async fn with_invalidation<F, Fut, R, E>(
        &self,
        mutator: F,
        resource_types: &[&str],
    ) -> Result<R, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<R, E>>,
    {
        let result = mutator().await?;

        let mut store = self.store.write().await;
        let removed: usize = resource_types
            .iter()
            .map(|rt| invalidation::invalidate(&mut *store, rt))
            .sum();
        debug!(?resource_types, removed, "mutation succeeded, caches invalidated");

        Ok(result)
    }
}
