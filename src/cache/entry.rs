//! Cache Entry Module
//!
//! Defines the unit of storage: a value plus its expiry deadline.

use std::time::{Duration, Instant};

use serde_json::Value;

// == Cache Entry ==
/// A single cache entry: the stored value and an absolute expiry deadline.
///
/// Deadlines are `Instant`s (monotonic clock) so expiry decisions are
/// unaffected by wall-clock adjustments. `None` means the entry never
/// expires.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload; the engine never interprets it
    pub value: Value,
    /// Expiry deadline, None = no expiration
    pub expires_at: Option<Instant>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry, computing the deadline from an optional TTL.
    pub fn new(value: Value, ttl: Option<Duration>) -> Self {
        Self {
            value,
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has expired.
    ///
    /// Boundary condition: the entry counts as expired once the deadline has
    /// been reached, i.e. `expires_at <= now`.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Expiry check against a caller-supplied instant, so a batch of checks
    /// (a sweep, an `all()` snapshot) shares one consistent notion of "now".
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(deadline) => deadline <= now,
            None => false,
        }
    }
}
