//! Error types for the cache engine and its HTTP surface
//!
//! Engine operations return these as tagged values; the `IntoResponse` impl
//! maps each kind to its transport status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Engine-level error kinds.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key is empty or otherwise malformed
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// TTL must be a positive number of seconds
    #[error("invalid ttl: {0} (must be positive)")]
    InvalidTtl(i64),

    /// Key is not present
    #[error("key not found: {0}")]
    NotFound(String),

    /// The engine has been shut down; it is terminal
    #[error("cache is shut down")]
    Shutdown,
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::InvalidKey(_) | CacheError::InvalidTtl(_) => StatusCode::BAD_REQUEST,
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::Shutdown => StatusCode::SERVICE_UNAVAILABLE,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for engine operations.
pub type Result<T> = std::result::Result<T, CacheError>;
