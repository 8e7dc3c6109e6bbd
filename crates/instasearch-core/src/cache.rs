//! Query result cache
//!
//! Memoizes ranked results per raw query string.
//!
//! - Backed by `DashMap`: sharded locks, concurrent readers and writers never
//!   serialize on a single global lock.
//! - `compute` runs outside any shard lock. Two callers missing on the same
//!   key at once both compute; the later insert wins. Both see a complete
//!   result either way.
//! - Entries never expire. The dataset is static once loaded, so a cached
//!   result can never go stale. Growth is unbounded unless
//!   [`QueryCache::with_max_entries`] is used.

use crate::common::CacheStats;
use crate::search::RankedResult;
use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

/// Concurrent memo of `query -> RankedResult`.
///
/// Keys are the query exactly as passed in; `"Ann"` and `"ann"` are
/// separate entries even though they produce the same hits.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: DashMap<String, Arc<RankedResult>>,
    max_entries: Option<usize>,
    hits: AtomicU64,
    misses: AtomicU64,
    full_reported: AtomicBool,
}

impl QueryCache {
    /// Unbounded cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache that stops admitting new keys once `max_entries` are stored.
    ///
    /// Results for new keys are still computed and returned, just not kept.
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            max_entries: Some(max_entries),
            ..Self::default()
        }
    }

    /// Returns the cached result for `query`, or runs `compute`, stores its
    /// output under `query` and returns it.
    pub fn get_or_compute<F>(&self, query: &str, compute: F) -> Arc<RankedResult>
    where
        F: FnOnce() -> RankedResult,
    {
        if let Some(hit) = self.entries.get(query) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Arc::clone(hit.value());
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!(query, "cache miss");

        // Guard released above; compute must not run under a shard lock.
        let result = Arc::new(compute());

        if self.admits(query) {
            self.entries.insert(query.to_owned(), Arc::clone(&result));
            debug!(query, hits = result.len(), "cached result");
        }
        result
    }

    /// Cached result for `query`, if any. Does not touch the hit counters.
    pub fn get(&self, query: &str) -> Option<Arc<RankedResult>> {
        self.entries.get(query).map(|e| Arc::clone(e.value()))
    }

    pub fn contains(&self, query: &str) -> bool {
        self.entries.contains_key(query)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> Option<usize> {
        self.max_entries
    }

    /// Drops every entry. Counters are kept.
    pub fn clear(&self) {
        self.entries.clear();
        self.full_reported.store(false, Ordering::Relaxed);
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    fn admits(&self, query: &str) -> bool {
        let Some(max) = self.max_entries else {
            return true;
        };
        if self.entries.len() < max || self.entries.contains_key(query) {
            return true;
        }
        if !self.full_reported.swap(true, Ordering::Relaxed) {
            warn!(max_entries = max, "query cache full; new queries are no longer cached");
        }
        false
    }
}
