//! Keyed result caching with TTL freshness.
//!
//! The cache is the engine's only shared mutable state. It sits behind
//! the [`KeyedCache`] trait so embedders can swap the default in-memory
//! implementation for [`NoopCache`] (or something distributed) without
//! touching the computation code.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use dashmap::DashMap;

use crate::error::Result;

/// Injectable cache interface for computed results.
///
/// Entries are replaced wholesale, never merged, and a failed compute
/// must leave any stale entry in place so callers can still `peek` it.
pub trait KeyedCache<V>: Send + Sync {
    /// Fresh value for `key`, judged against the TTL stored with it.
    fn get(&self, key: &str) -> Option<V>;

    /// Value for `key` regardless of freshness.
    fn peek(&self, key: &str) -> Option<V>;

    /// Store a value, replacing any prior entry for the key.
    fn put(&self, key: &str, value: V, ttl: Duration);

    /// Drop one entry.
    fn invalidate(&self, key: &str);

    /// Drop all entries.
    fn invalidate_all(&self);

    /// Return the cached value when younger than `ttl`; otherwise run
    /// `compute`, store its result, and return it. Failures propagate
    /// to the caller and are never cached.
    fn get_or_compute(
        &self,
        key: &str,
        ttl: Duration,
        compute: &mut dyn FnMut() -> Result<V>,
    ) -> Result<V>;
}

/// Thread-safe in-memory cache with per-entry TTL.
pub struct TtlCache<V> {
    data: DashMap<String, CacheEntry<V>>,
    locks: DashMap<String, Arc<Mutex<()>>>,
}

struct CacheEntry<V> {
    value: V,
    computed_at: Instant,
    ttl: Duration,
}

impl<V> CacheEntry<V> {
    fn is_fresh_for(&self, ttl: Duration) -> bool {
        self.computed_at.elapsed() < ttl
    }

    fn is_fresh(&self) -> bool {
        self.is_fresh_for(self.ttl)
    }
}

impl<V> TtlCache<V> {
    pub fn new() -> Self {
        Self {
            data: DashMap::new(),
            locks: DashMap::new(),
        }
    }

    /// Remove every entry past its own TTL. Expired entries otherwise
    /// linger so `peek` can serve stale data after a failed recompute.
    pub fn cleanup(&self) {
        self.data.retain(|_, entry| entry.is_fresh());
    }

    /// Number of entries, expired ones included.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<V> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + Send + Sync> KeyedCache<V> for TtlCache<V> {
    fn get(&self, key: &str) -> Option<V> {
        let entry = self.data.get(key)?;
        if entry.is_fresh() {
            Some(entry.value.clone())
        } else {
            None
        }
    }

    fn peek(&self, key: &str) -> Option<V> {
        self.data.get(key).map(|entry| entry.value.clone())
    }

    fn put(&self, key: &str, value: V, ttl: Duration) {
        self.data.insert(
            key.to_string(),
            CacheEntry {
                value,
                computed_at: Instant::now(),
                ttl,
            },
        );
    }

    fn invalidate(&self, key: &str) {
        self.data.remove(key);
    }

    fn invalidate_all(&self) {
        self.data.clear();
        self.locks.clear();
    }

    fn get_or_compute(
        &self,
        key: &str,
        ttl: Duration,
        compute: &mut dyn FnMut() -> Result<V>,
    ) -> Result<V> {
        if let Some(entry) = self.data.get(key) {
            if entry.is_fresh_for(ttl) {
                return Ok(entry.value.clone());
            }
        }

        // One computation per key at a time; everyone else waits and
        // then re-reads what the winner stored.
        let lock = self
            .locks
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(entry) = self.data.get(key) {
            if entry.is_fresh_for(ttl) {
                return Ok(entry.value.clone());
            }
        }

        let value = compute()?;
        self.put(key, value.clone(), ttl);
        Ok(value)
    }
}

/// Cache that never stores anything; every lookup recomputes.
pub struct NoopCache;

impl<V> KeyedCache<V> for NoopCache {
    fn get(&self, _key: &str) -> Option<V> {
        None
    }

    fn peek(&self, _key: &str) -> Option<V> {
        None
    }

    fn put(&self, _key: &str, _value: V, _ttl: Duration) {}

    fn invalidate(&self, _key: &str) {}

    fn invalidate_all(&self) {}

    fn get_or_compute(
        &self,
        _key: &str,
        _ttl: Duration,
        compute: &mut dyn FnMut() -> Result<V>,
    ) -> Result<V> {
        compute()
    }
}
