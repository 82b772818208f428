//! API Handlers
//!
//! HTTP request handlers, each a thin translator over the cache engine.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Json,
};

use crate::cache::Cache;
use crate::error::{CacheError, Result};
use crate::models::{EntryView, GetResponse, HealthResponse, KeyQuery, PutRequest, StatsResponse};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared engine handle
    pub cache: Cache,
}

impl AppState {
    pub fn new(cache: Cache) -> Self {
        Self { cache }
    }
}

/// Handler for `POST /put`.
///
/// Stores a key/value pair with optional TTL. Non-positive TTLs are rejected
/// here with the engine's `InvalidTtl` kind so negative values do not die in
/// deserialization.
pub async fn put_handler(
    State(state): State<AppState>,
    Json(req): Json<PutRequest>,
) -> Result<StatusCode> {
    let ttl = match req.ttl {
        Some(secs) if secs <= 0 => return Err(CacheError::InvalidTtl(secs)),
        Some(secs) => Some(secs as u64),
        None => None,
    };

    state.cache.put(req.key, req.value, ttl).await?;
    Ok(StatusCode::OK)
}

/// Handler for `GET /get?key=K`.
///
/// Absent and expired keys both come back as 404; the engine has already
/// counted the miss.
pub async fn get_handler(
    State(state): State<AppState>,
    Query(query): Query<KeyQuery>,
) -> Result<Json<GetResponse>> {
    match state.cache.get(&query.key).await? {
        Some(value) => Ok(Json(GetResponse {
            key: query.key,
            value,
        })),
        None => Err(CacheError::NotFound(query.key)),
    }
}

/// Handler for `DELETE /delete?key=K`.
pub async fn delete_handler(
    State(state): State<AppState>,
    Query(query): Query<KeyQuery>,
) -> Result<StatusCode> {
    state.cache.delete(&query.key).await?;
    Ok(StatusCode::OK)
}

/// Handler for `POST /clear`.
pub async fn clear_handler(State(state): State<AppState>) -> Result<StatusCode> {
    state.cache.clear().await?;
    Ok(StatusCode::OK)
}

/// Handler for `GET /stats`.
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>> {
    let snap = state.cache.stats().await?;
    Ok(Json(StatsResponse::from(snap)))
}

/// Handler for `GET /all`.
///
/// Returns live entries in MRU-to-LRU order.
pub async fn all_handler(State(state): State<AppState>) -> Result<Json<Vec<EntryView>>> {
    let entries = state.cache.all().await?;
    Ok(Json(entries.into_iter().map(EntryView::from).collect()))
}

/// Handler for `GET /`, the embedded web UI.
pub async fn ui_handler() -> Html<&'static str> {
    Html(include_str!("ui.html"))
}

/// Handler for `GET /health`.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
