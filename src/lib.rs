//! lrucached - an in-memory LRU cache with TTL expiry, served over HTTP
//!
//! The cache engine lives in [`cache`]; [`api`] is a thin HTTP façade over
//! it and [`tasks`] holds the background TTL sweeper.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{Cache, CacheStore};
pub use config::Config;
pub use tasks::spawn_sweeper;
