//! API Module
//!
//! HTTP handlers and routing for the cache server REST API.
//!
//! # Endpoints
//! - `POST /put` - Store a key/value pair
//! - `GET /get?key=K` - Retrieve a value
//! - `DELETE /delete?key=K` - Delete a key
//! - `POST /clear` - Drop every entry
//! - `GET /stats` - Cache statistics
//! - `GET /all` - All live entries
//! - `GET /` - Embedded web UI
//! - `GET /health` - Liveness check

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
