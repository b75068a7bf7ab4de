//! Time-bounded result cache
//!
//! Caches whole collections per query key so repeated requests within
//! the TTL reuse one upstream fetch. Entries are replaced wholesale by a
//! successful fetch; a failed fetch surfaces its error and leaves the
//! previous entry in place. Concurrent cold-cache callers may each
//! fetch: the fetches are idempotent reads and de-duplication is not
//! attempted.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use tokio::time::Instant;

struct Entry<T> {
    value: T,
    fetched_at: Instant,
}

/// Keyed TTL cache for cheaply clonable values; collections go in as
/// `Arc`s.
pub struct TtlCache<T> {
    entries: Mutex<HashMap<String, Entry<T>>>,
}

impl<T: Clone> TtlCache<T> {
    pub fn new() -> TtlCache<T> {
        TtlCache {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// The cached value for `key` when younger than `ttl`, otherwise the
    /// output of `fetcher`, stored on success. The internal lock is not
    /// held while the fetch is in flight.
    pub async fn get_or_fetch<F, Fut, E>(&self, key: &str, ttl: Duration, fetcher: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.fresh(key, ttl) {
            tracing::debug!(key, "cache hit");
            return Ok(value);
        }

        let value = fetcher().await?;
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        entries.insert(
            key.to_string(),
            Entry {
                value: value.clone(),
                fetched_at: Instant::now(),
            },
        );
        Ok(value)
    }

    fn fresh(&self, key: &str, ttl: Duration) -> Option<T> {
        let entries = self.entries.lock().expect("cache lock poisoned");
        entries
            .get(key)
            .filter(|entry| entry.fetched_at.elapsed() < ttl)
            .map(|entry| entry.value.clone())
    }

    /// The stored value regardless of age. Nothing serves stale entries
    /// automatically; this exists for explicit inspection.
    pub fn peek(&self, key: &str) -> Option<T> {
        let entries = self.entries.lock().expect("cache lock poisoned");
        entries.get(key).map(|entry| entry.value.clone())
    }

    /// Drop one key. The next read through it refetches.
    pub fn clear(&self, key: &str) {
        self.entries
            .lock()
            .expect("cache lock poisoned")
            .remove(key);
    }

    /// Drop every key.
    pub fn clear_all(&self) {
        self.entries.lock().expect("cache lock poisoned").clear();
    }
}

impl<T: Clone> Default for TtlCache<T> {
    fn default() -> Self {
        TtlCache::new()
    }
}
