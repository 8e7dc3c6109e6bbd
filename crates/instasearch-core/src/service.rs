// crates/instasearch-core/src/service.rs

//! # Search Service
//!
//! The request-facing entry point. Owns the published index and the query
//! cache, so there is no process-global state: construct one service at
//! startup and hand it (or an `Arc` of it) to whatever serves requests.

use crate::cache::QueryCache;
use crate::common::{CacheStats, IndexStats};
use crate::error::{Result, SearchError};
use crate::search::{RankedResult, SearchIndex};
use crate::text::char_len;
use crate::traits::NameSearch;
use once_cell::sync::OnceCell;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Queries shorter than this (in chars, after trimming) are rejected.
pub const MIN_QUERY_LENGTH: usize = 3;

/// Tunables for a [`SearchService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub min_query_length: usize,
    /// `None` keeps every distinct query forever.
    pub max_cache_entries: Option<usize>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            min_query_length: MIN_QUERY_LENGTH,
            max_cache_entries: None,
        }
    }
}

/// Outcome of one validated query.
#[derive(Debug, Clone)]
pub struct SearchResponse {
    /// The trimmed query that was searched (and used as cache key).
    pub query: String,
    pub results: Arc<RankedResult>,
    pub elapsed: Duration,
}

impl SearchResponse {
    pub fn size(&self) -> usize {
        self.results.len()
    }

    pub fn response_time_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

/// Load-once index plus query cache.
///
/// ```rust
/// use instasearch_core::SearchService;
///
/// let service = SearchService::default();
/// service.load(["Anna", "Anastasia", "Banana", "Ann"]).unwrap();
///
/// let response = service.query("  an  ");
/// assert!(response.is_err()); // "an" is shorter than 3 chars
///
/// let response = service.query("ana").unwrap();
/// assert_eq!(response.size(), 2); // Anastasia, then Banana
/// ```
#[derive(Debug, Default)]
pub struct SearchService {
    index: OnceCell<SearchIndex>,
    cache: QueryCache,
    config: ServiceConfig,
}

impl SearchService {
    pub fn new(config: ServiceConfig) -> Self {
        let cache = match config.max_cache_entries {
            Some(max) => QueryCache::with_max_entries(max),
            None => QueryCache::new(),
        };
        Self {
            index: OnceCell::new(),
            cache,
            config,
        }
    }

    /// Convenience: a service whose index is already published.
    pub fn with_index(index: SearchIndex, config: ServiceConfig) -> Self {
        let mut service = Self::new(config);
        log_published(&index.stats());
        service.index = OnceCell::with_value(index);
        service
    }

    /// Builds the index from `entries` and publishes it.
    ///
    /// Fails with [`SearchError::AlreadyLoaded`] if an index is already
    /// published; the dataset is static for the life of the service.
    pub fn load<I, S>(&self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.is_loaded() {
            return Err(SearchError::AlreadyLoaded);
        }
        self.load_index(SearchIndex::build(entries))
    }

    /// Reads a name list from `path` and publishes it.
    ///
    /// On a read error nothing is published and the service stays empty.
    pub fn load_from_path(&self, path: impl AsRef<Path>) -> Result<()> {
        if self.is_loaded() {
            return Err(SearchError::AlreadyLoaded);
        }
        self.load_index(SearchIndex::load_from_path(path)?)
    }

    /// Publishes a prebuilt index.
    pub fn load_index(&self, index: SearchIndex) -> Result<()> {
        let stats = index.stats();
        self.index
            .set(index)
            .map_err(|_| SearchError::AlreadyLoaded)?;
        log_published(&stats);
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.index.get().is_some()
    }

    pub fn index(&self) -> Option<&SearchIndex> {
        self.index.get()
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn index_stats(&self) -> Option<IndexStats> {
        self.index().map(|index| index.stats())
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Ranked results for `query`, always through the cache.
    ///
    /// Performs no validation. Before an index is published every query
    /// yields an empty result, and that result is not cached.
    pub fn search(&self, query: &str) -> Arc<RankedResult> {
        match self.index.get() {
            Some(index) => self
                .cache
                .get_or_compute(query, || index.ranked_search(query)),
            None => {
                debug!(query, "search before index was loaded");
                Arc::new(RankedResult::default())
            }
        }
    }

    /// Trims and validates a raw user query, then searches.
    pub fn query(&self, raw: &str) -> Result<SearchResponse> {
        let start = Instant::now();
        let query = raw.trim();
        self.validate(query)?;

        let results = self.search(query);
        Ok(SearchResponse {
            query: query.to_owned(),
            results,
            elapsed: start.elapsed(),
        })
    }

    fn validate(&self, query: &str) -> Result<()> {
        let actual = char_len(query);
        if actual < self.config.min_query_length {
            return Err(SearchError::QueryTooShort {
                min: self.config.min_query_length,
                actual,
            });
        }
        Ok(())
    }
}

fn log_published(stats: &IndexStats) {
    info!(
        names = stats.names,
        keys = stats.distinct_keys,
        nodes = stats.trie_nodes,
        "search index published"
    );
}
