//! Background Tasks Module
//!
//! Long-lived tasks that run alongside the server.
//!
//! # Tasks
//! - TTL sweeper: reaps expired cache entries at a configured interval

mod sweeper;

pub use sweeper::spawn_sweeper;
