use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a loaded index.
///
/// Returned by [`NameSearch::stats`](crate::NameSearch::stats); counts
/// reflect the index as published, after any duplicate names were dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Distinct names as spelled (case-sensitive).
    pub names: usize,
    /// Distinct lower-cased keys in the trie.
    pub distinct_keys: usize,
    pub trie_nodes: usize,
}

/// Counters exposed by [`QueryCache::stats`](crate::QueryCache::stats).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}
