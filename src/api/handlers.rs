//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use tracing::debug;

use crate::client::CalculationCache;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    GetResponse, HealthResponse, InvalidateResponse, SetRequest, SetResponse, StatsResponse,
    SweepResponse,
};

/// Cache instance shared between handlers and the sweep task.
pub type SharedCache = Arc<RwLock<CalculationCache<Value>>>;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub cache: SharedCache,
}

impl AppState {
    pub fn new(cache: CalculationCache<Value>) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a new AppState sized and tuned from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(CalculationCache::new(config.max_entries, config.ttl_policy()))
    }
}

/// Handler for PUT /set
///
/// Stores a JSON value, picking the TTL from `ttl_ms`, the category, or the default.
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let mut cache = state.cache.write().await;
    let ttl = req.effective_ttl(cache.policy());
    let evicted = cache.set_with_ttl(&req.key, req.value, Some(ttl));
    drop(cache);

    debug!(key = %req.key, ttl_ms = ttl.as_millis() as u64, "Stored cache entry");
    Ok(Json(SetResponse::new(req.key, ttl.as_millis() as u64, evicted)))
}

/// Handler for GET /get/:key
///
/// Absent and expired keys both answer 404.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    // Write lock: a stale entry is deleted on read and stats are updated
    let mut cache = state.cache.write().await;
    let value = cache
        .get(&key)
        .ok_or_else(|| CacheError::NotFound(key.clone()))?;

    Ok(Json(GetResponse::new(key, value)))
}

/// Handler for DELETE /del/:key
///
/// Always succeeds; deleting an absent key reports `invalidated: false`.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<InvalidateResponse> {
    let invalidated = state.cache.write().await.invalidate(&key);
    Json(InvalidateResponse::new(key, invalidated))
}

/// Handler for POST /sweep
///
/// Runs an expiry sweep immediately instead of waiting for the background task.
pub async fn sweep_handler(State(state): State<AppState>) -> Json<SweepResponse> {
    let removed = state.cache.write().await.sweep_expired();
    debug!(removed, "Manual sweep");
    Json(SweepResponse { removed })
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    Json(StatsResponse::new(&cache.stats(), cache.max_size()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
