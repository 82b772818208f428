//! Cache Handle Module
//!
//! The shared engine handle. One exclusion primitive guards the store and
//! its counters; every public operation acquires it for its whole duration
//! and the non-locking [`CacheStore`] does the actual work, so nothing ever
//! needs to re-acquire. Shutdown is a terminal flag broadcast over a watch
//! channel that the sweeper and the HTTP server both observe.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::{watch, RwLock};

use crate::cache::{CacheStore, StatsSnapshot};
use crate::error::{CacheError, Result};

// == Cache ==
/// Cloneable, thread-safe handle to the cache engine.
#[derive(Debug, Clone)]
pub struct Cache {
    store: Arc<RwLock<CacheStore>>,
    shutdown: Arc<watch::Sender<bool>>,
}

impl Cache {
    // == Constructor ==
    /// Wraps a store for shared use. The sweeper is spawned separately via
    /// [`spawn_sweeper`](crate::tasks::spawn_sweeper).
    pub fn new(store: CacheStore) -> Self {
        let (shutdown, _) = watch::channel(false);
        Self {
            store: Arc::new(RwLock::new(store)),
            shutdown: Arc::new(shutdown),
        }
    }

    // == Operations ==
    /// Stores a key/value pair with an optional TTL in seconds.
    pub async fn put(&self, key: String, value: Value, ttl: Option<u64>) -> Result<()> {
        self.ensure_open()?;
        self.store.write().await.put(key, value, ttl)
    }

    /// Retrieves a value, promoting the entry to MRU. `None` means absent
    /// or expired. Takes the write half: a hit mutates recency order, and
    /// the hit counter must move together with the promotion.
    pub async fn get(&self, key: &str) -> Result<Option<Value>> {
        self.ensure_open()?;
        Ok(self.store.write().await.get(key))
    }

    /// Removes a key; `NotFound` if absent.
    pub async fn delete(&self, key: &str) -> Result<()> {
        self.ensure_open()?;
        self.store.write().await.delete(key)
    }

    /// Empties the store. Counters survive.
    pub async fn clear(&self) -> Result<()> {
        self.ensure_open()?;
        self.store.write().await.clear();
        Ok(())
    }

    /// Point-in-time statistics snapshot.
    pub async fn stats(&self) -> Result<StatsSnapshot> {
        self.ensure_open()?;
        Ok(self.store.read().await.stats())
    }

    /// Snapshot of live `(key, value)` pairs in MRU -> LRU order.
    pub async fn all(&self) -> Result<Vec<(String, Value)>> {
        self.ensure_open()?;
        Ok(self.store.read().await.all())
    }

    /// Removes up to `limit` expired entries; the sweeper's entry point.
    /// Not gated on shutdown: the sweeper drains cooperatively and stops
    /// on its own once the signal fires.
    pub async fn purge_expired(&self, limit: usize) -> usize {
        self.store.write().await.remove_expired(limit)
    }

    // == Shutdown ==
    /// Marks the engine terminal. Every subsequent operation returns
    /// [`CacheError::Shutdown`]; the sweeper and server observe the signal
    /// and wind down.
    pub fn shutdown(&self) {
        self.shutdown.send_replace(true);
    }

    pub fn is_shut_down(&self) -> bool {
        *self.shutdown.borrow()
    }

    /// A receiver that resolves when `shutdown` is called.
    pub fn shutdown_signal(&self) -> watch::Receiver<bool> {
        self.shutdown.subscribe()
    }

    fn ensure_open(&self) -> Result<()> {
        if self.is_shut_down() {
            Err(CacheError::Shutdown)
        } else {
            Ok(())
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cache() -> Cache {
        Cache::new(CacheStore::new(100, None))
    }

    #[tokio::test]
    async fn test_handle_roundtrip() {
        let cache = cache();

        cache.put("k".into(), json!({"n": 1}), None).await.unwrap();
        assert_eq!(cache.get("k").await.unwrap(), Some(json!({"n": 1})));

        cache.delete("k").await.unwrap();
        assert_eq!(cache.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let cache = cache();
        let other = cache.clone();

        cache.put("k".into(), json!(1), None).await.unwrap();
        assert_eq!(other.get("k").await.unwrap(), Some(json!(1)));
    }

    #[tokio::test]
    async fn test_shutdown_is_terminal() {
        let cache = cache();
        cache.put("k".into(), json!(1), None).await.unwrap();

        cache.shutdown();

        assert!(cache.is_shut_down());
        assert!(matches!(
            cache.get("k").await,
            Err(CacheError::Shutdown)
        ));
        assert!(matches!(
            cache.put("x".into(), json!(2), None).await,
            Err(CacheError::Shutdown)
        ));
        assert!(matches!(cache.stats().await, Err(CacheError::Shutdown)));
        assert!(matches!(cache.clear().await, Err(CacheError::Shutdown)));
    }

    #[tokio::test]
    async fn test_shutdown_signal_fires() {
        let cache = cache();
        let mut signal = cache.shutdown_signal();

        cache.shutdown();

        signal.changed().await.unwrap();
        assert!(*signal.borrow());
    }

    #[tokio::test]
    async fn test_concurrent_ops_keep_invariants() {
        let cache = Cache::new(CacheStore::new(50, None));
        let mut handles = Vec::new();

        for t in 0..8 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move {
                for i in 0..200 {
                    let key = format!("k{}", (t * 31 + i) % 75);
                    match i % 4 {
                        0 | 1 => cache.put(key, json!(i), None).await.unwrap(),
                        2 => {
                            let _ = cache.get(&key).await.unwrap();
                        }
                        _ => {
                            let _ = cache.delete(&key).await;
                        }
                    }
                }
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        let snap = cache.stats().await.unwrap();
        assert!(snap.current_size <= 50);
        assert_eq!(snap.current_size, cache.all().await.unwrap().len());
    }
}
