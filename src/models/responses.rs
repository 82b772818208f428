//! Response DTOs for the cache server API
//!
//! Shapes of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

use crate::cache::StatsSnapshot;

/// Response body for `GET /get?key=K`.
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key
    pub key: String,
    /// The stored value
    pub value: Value,
}

/// One element of the `GET /all` array.
#[derive(Debug, Clone, Serialize)]
pub struct EntryView {
    pub key: String,
    pub value: Value,
}

impl From<(String, Value)> for EntryView {
    fn from((key, value): (String, Value)) -> Self {
        Self { key, value }
    }
}

/// Response body for `GET /stats`.
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// hits / total_requests, rounded to three decimals
    pub hit_rate: f64,
    /// hits + misses
    pub total_requests: u64,
    /// Entries currently in the store
    pub current_size: usize,
    /// Entries removed by the LRU policy
    pub evictions: u64,
    /// Entries removed because their TTL elapsed
    pub expired_removals: u64,
}

impl From<StatsSnapshot> for StatsResponse {
    fn from(snap: StatsSnapshot) -> Self {
        Self {
            hits: snap.hits,
            misses: snap.misses,
            hit_rate: round3(snap.hit_rate()),
            total_requests: snap.total_requests(),
            current_size: snap.current_size,
            evictions: snap.evictions,
            expired_removals: snap.expired_removals,
        }
    }
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status, always "healthy" while the process serves
    pub status: String,
    /// Current timestamp in RFC 3339 format
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
