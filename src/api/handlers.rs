//! API Handlers
//!
//! HTTP request handlers for each admin endpoint.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::cache::{CacheStore, EntryInfo};
use crate::client::ApiCache;
use crate::error::{CacheError, Result};
use crate::invalidation::{entity_key, ResourceType};
use crate::models::{
    ClearResponse, DeleteResponse, GetResponse, HealthResponse, InvalidateResponse, KeysResponse,
    SetRequest, SetResponse, StatsResponse,
};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache of JSON payloads
    pub cache: ApiCache<Value>,
}

impl AppState {
    pub fn new(cache: CacheStore<Value>) -> Self {
        Self {
            cache: ApiCache::from_store(cache),
        }
    }

    pub fn from_config(config: &crate::config::Config) -> Self {
        Self {
            cache: ApiCache::from_config(config),
        }
    }
}

/// Handler for PUT /set
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    state.cache.set(req.key.clone(), req.value, req.ttl_ms).await;

    Ok(Json(SetResponse::new(req.key)))
}

/// Handler for GET /get/:key
///
/// Expired and missing keys are both 404.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    let value = state
        .cache
        .get(&key)
        .await
        .ok_or_else(|| CacheError::NotFound(key.clone()))?;

    Ok(Json(GetResponse::new(key, value)))
}

/// Handler for DELETE /del/:key
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<DeleteResponse> {
    let deleted = state.cache.delete(&key).await;
    Json(DeleteResponse::new(key, deleted))
}

/// Handler for POST /clear
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let removed = state.cache.clear().await;
    Json(ClearResponse { removed })
}

/// Handler for GET /keys
pub async fn keys_handler(State(state): State<AppState>) -> Json<KeysResponse> {
    Json(KeysResponse::new(state.cache.keys().await))
}

/// Handler for GET /describe/:key
///
/// Never deletes, so it can report an expired entry.
pub async fn describe_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<EntryInfo>> {
    state
        .cache
        .describe(&key)
        .await
        .map(Json)
        .ok_or(CacheError::NotFound(key))
}

/// Handler for POST /invalidate/:resource_type
///
/// Unknown resource types succeed with `known: false`.
pub async fn invalidate_handler(
    State(state): State<AppState>,
    Path(resource_type): Path<String>,
) -> Json<InvalidateResponse> {
    let known = resource_type.parse::<ResourceType>().is_ok();
    let removed = state.cache.invalidate(&resource_type).await;

    Json(InvalidateResponse {
        resource_type,
        known,
        removed,
    })
}

/// Handler for POST /invalidate/:resource_type/:id
pub async fn invalidate_by_id_handler(
    State(state): State<AppState>,
    Path((resource_type, id)): Path<(String, String)>,
) -> Json<DeleteResponse> {
    let deleted = state.cache.invalidate_by_id(&resource_type, &id).await;
    Json(DeleteResponse::new(entity_key(&resource_type, &id), deleted))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.cache.stats().await))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
