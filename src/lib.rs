//! API Cache - client-side response cache for a REST API
//!
//! TTL-expiring storage, a static dependency table that decides which
//! cached views a write makes stale, and fetch-through / mutation wrappers
//! that keep call sites from forgetting either step.

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod invalidation;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use client::{compose_cache_key, ApiCache, FetchOptions, Fetched};
pub use config::Config;
pub use invalidation::{MatchRule, ResourceType};
pub use tasks::spawn_cleanup_task;
