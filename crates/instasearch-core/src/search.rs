// crates/instasearch-core/src/search.rs
use crate::common::IndexStats;
use crate::names::NameSet;
use crate::text::{char_len, fold_key};
use crate::traits::NameSearch;
use crate::trie::PrefixIndex;
use serde::Serialize;

/// One ranked hit. `rank` is the 1-based position in the combined output,
/// not a similarity score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedHit {
    pub name: String,
    pub rank: usize,
}

/// Ordered hits for one query: prefix matches first, then substring matches.
///
/// Ranks are dense and strictly increasing from 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RankedResult {
    hits: Vec<RankedHit>,
}

impl RankedResult {
    /// Assigns ranks `1..=N` in iteration order.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let hits = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| RankedHit {
                name: name.into(),
                rank: i + 1,
            })
            .collect();
        Self { hits }
    }

    pub fn hits(&self) -> &[RankedHit] {
        &self.hits
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.hits.iter().map(|h| h.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// JSON array of `{"name": .., "rank": ..}` objects.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl<'a> IntoIterator for &'a RankedResult {
    type Item = &'a RankedHit;
    type IntoIter = std::slice::Iter<'a, RankedHit>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.iter()
    }
}

/// The loaded dataset: a trie for prefix lookup plus a flat name set for the
/// substring fallback.
///
/// Built once, then read-only. It holds no interior mutability, so it can be
/// shared across threads behind `&` or `Arc` without locking.
#[derive(Debug, Default)]
pub struct SearchIndex {
    prefix: PrefixIndex,
    names: NameSet,
}

impl SearchIndex {
    /// Feeds every entry to both the trie and the name set.
    pub fn build<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        for entry in entries {
            index.insert(entry.as_ref());
        }
        index
    }

    pub(crate) fn insert(&mut self, entry: &str) {
        self.prefix.insert(entry);
        self.names.add(entry);
    }

    pub fn prefix_index(&self) -> &PrefixIndex {
        &self.prefix
    }

    pub fn name_set(&self) -> &NameSet {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl NameSearch for SearchIndex {
    fn stats(&self) -> IndexStats {
        IndexStats {
            names: self.names.len(),
            distinct_keys: self.prefix.len(),
            trie_nodes: self.prefix.node_count(),
        }
    }

    fn find_by_prefix(&self, prefix: &str) -> Vec<&str> {
        self.prefix.search_prefix(prefix)
    }

    fn find_by_substring(&self, needle: &str) -> Vec<&str> {
        let mut out: Vec<&str> = self.names.infix_matches(needle).collect();
        // Shortest first, then case-insensitive, then raw text for a total order.
        out.sort_by_cached_key(|name| (char_len(name), fold_key(name), *name));
        out
    }

    fn ranked_search(&self, query: &str) -> RankedResult {
        let prefix_hits = self.find_by_prefix(query);
        let substring_hits = self.find_by_substring(query);
        RankedResult::from_names(prefix_hits.into_iter().chain(substring_hits))
    }
}
