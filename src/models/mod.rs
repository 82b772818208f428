//! Request and Response models for the cache server API
//!
//! DTOs for serializing and deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{KeyQuery, PutRequest};
pub use responses::{EntryView, GetResponse, HealthResponse, StatsResponse};
