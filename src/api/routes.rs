//! API Routes
//!
//! Configures the Axum router with all cache server endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    all_handler, clear_handler, delete_handler, get_handler, health_handler, put_handler,
    stats_handler, ui_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /put` - Store a key/value pair (optional TTL)
/// - `GET /get?key=K` - Retrieve a value
/// - `DELETE /delete?key=K` - Delete a key
/// - `POST /clear` - Drop every entry
/// - `GET /stats` - Cache statistics snapshot
/// - `GET /all` - All live entries, MRU first
/// - `GET /` - Embedded web UI
/// - `GET /health` - Liveness check
///
/// # Middleware
/// - CORS: any origin, for the UI during development
/// - Tracing: request/response logging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(ui_handler))
        .route("/put", post(put_handler))
        .route("/get", get(get_handler))
        .route("/delete", delete(delete_handler))
        .route("/clear", post(clear_handler))
        .route("/stats", get(stats_handler))
        .route("/all", get(all_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
