//! Cache Store Module
//!
//! The engine core: recency-ordered storage, TTL discipline, LRU eviction,
//! and counter accounting. `CacheStore` takes `&mut self` everywhere and
//! never locks; the shared [`Cache`](crate::cache::Cache) handle acquires
//! the exclusion primitive once per operation and delegates here.

use std::time::{Duration, Instant};

use serde_json::Value;

use crate::cache::{CacheEntry, CacheStats, RecencyList, StatsSnapshot, MAX_KEY_LENGTH};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Bounded key/value store with LRU eviction and per-entry TTL.
#[derive(Debug)]
pub struct CacheStore {
    /// Keyed index + recency list, one structure
    entries: RecencyList,
    /// Performance counters
    stats: CacheStats,
    /// Maximum number of entries, always >= 1
    max_size: usize,
    /// Applied when a put carries no TTL; None = entries default to immortal
    default_ttl: Option<Duration>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a store holding at most `max_size` entries.
    ///
    /// `default_ttl` is the expiry applied to entries stored without an
    /// explicit TTL; `None` disables default expiry.
    pub fn new(max_size: usize, default_ttl: Option<Duration>) -> Self {
        assert!(max_size >= 1, "cache capacity must be at least 1");
        Self {
            entries: RecencyList::with_capacity(max_size),
            stats: CacheStats::new(),
            max_size,
            default_ttl,
        }
    }

    // == Put ==
    /// Stores `key` -> `value`, overwriting and promoting to MRU if the key
    /// exists. When the insert grows the store past capacity, the LRU entry
    /// is evicted silently.
    ///
    /// `ttl` is in seconds; `None` falls back to the default TTL.
    pub fn put(&mut self, key: String, value: Value, ttl: Option<u64>) -> Result<()> {
        if key.is_empty() {
            return Err(CacheError::InvalidKey("key must not be empty".into()));
        }
        if key.len() > MAX_KEY_LENGTH {
            return Err(CacheError::InvalidKey(format!(
                "key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )));
        }

        let ttl = match ttl {
            Some(0) => return Err(CacheError::InvalidTtl(0)),
            Some(secs) => Some(Duration::from_secs(secs)),
            None => self.default_ttl,
        };

        let added = self.entries.insert(key, CacheEntry::new(value, ttl));

        // Each insert grows the store by at most one, so a single eviction
        // restores the bound. Overwrites never trip this.
        if added && self.entries.len() > self.max_size {
            self.entries
                .pop_lru()
                .expect("store over capacity yet empty");
            self.stats.record_eviction();
        }

        Ok(())
    }

    // == Get ==
    /// Retrieves the value for `key`, promoting the entry to MRU.
    ///
    /// Returns `None` for absent keys and for expired entries; an expired
    /// entry is removed on the spot and counted as both an expired removal
    /// and a miss.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        let Some(entry) = self.entries.lookup(key) else {
            self.stats.record_miss();
            return None;
        };

        if entry.is_expired() {
            self.entries.remove(key);
            self.stats.record_expired(1);
            self.stats.record_miss();
            return None;
        }

        let value = entry.value.clone();
        self.entries.touch(key);
        self.stats.record_hit();
        Some(value)
    }

    // == Delete ==
    /// Removes `key`. Absent keys are an error, not a miss.
    pub fn delete(&mut self, key: &str) -> Result<()> {
        match self.entries.remove(key) {
            Some(_) => Ok(()),
            None => Err(CacheError::NotFound(key.to_string())),
        }
    }

    // == Clear ==
    /// Drops every entry. Counters are lifetime-monotonic and survive.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // == Stats ==
    /// Point-in-time snapshot of counters and size.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot(self.entries.len())
    }

    // == All ==
    /// Snapshot of `(key, value)` pairs in MRU -> LRU order, excluding
    /// entries already expired at snapshot time. Read-only; expired entries
    /// stay in the store for the sweeper or a later `get` to reap.
    pub fn all(&self) -> Vec<(String, Value)> {
        let now = Instant::now();
        self.entries
            .iter()
            .filter(|(_, entry)| !entry.is_expired_at(now))
            .map(|(key, entry)| (key.to_string(), entry.value.clone()))
            .collect()
    }

    // == Remove Expired ==
    /// Removes up to `limit` expired entries and returns how many went.
    /// The sweeper calls this in bounded batches so the lock is never held
    /// for a full walk of a large store.
    pub fn remove_expired(&mut self, limit: usize) -> usize {
        let now = Instant::now();
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(key, _)| key.to_string())
            .take(limit)
            .collect();

        for key in &expired {
            self.entries.remove(key);
        }

        self.stats.record_expired(expired.len() as u64);
        expired.len()
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Next eviction candidate, for tests and diagnostics.
    pub fn peek_lru(&self) -> Option<&str> {
        self.entries.peek_lru()
    }

    /// Current MRU key, for tests and diagnostics.
    pub fn peek_mru(&self) -> Option<&str> {
        self.entries.peek_mru()
    }

    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        self.entries.assert_consistent();
    }
}
