//! TTL Sweeper Task
//!
//! The background reaper: wakes on a fixed interval, purges expired entries
//! in bounded batches, and terminates cooperatively when the engine shuts
//! down. Sweeping is best-effort; `get` enforces expiry lazily either way.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::Cache;

/// Upper bound on entries removed per lock acquisition, so a sweep of a
/// large store never holds the lock for a full walk.
const SWEEP_BATCH: usize = 256;

/// Spawns the periodic expiry sweeper for `cache`.
///
/// The task sleeps for `interval`, then removes expired entries in batches
/// of at most [`SWEEP_BATCH`], yielding between batches. It exits once the
/// engine's shutdown signal fires; an in-flight sweep finishes its current
/// batch first. The returned handle resolves after that final batch.
pub fn spawn_sweeper(cache: Cache, interval: Duration) -> JoinHandle<()> {
    let mut shutdown = cache.shutdown_signal();

    tokio::spawn(async move {
        info!(interval_secs = interval.as_secs(), "ttl sweeper started");

        loop {
            tokio::select! {
                _ = tokio::time::sleep(interval) => {}
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                    continue;
                }
            }

            let mut removed = 0;
            loop {
                let batch = cache.purge_expired(SWEEP_BATCH).await;
                removed += batch;
                if batch < SWEEP_BATCH || *shutdown.borrow() {
                    break;
                }
                tokio::task::yield_now().await;
            }

            if removed > 0 {
                info!(removed, "ttl sweep removed expired entries");
            } else {
                debug!("ttl sweep found no expired entries");
            }
        }

        debug!("ttl sweeper stopped");
    })
}
