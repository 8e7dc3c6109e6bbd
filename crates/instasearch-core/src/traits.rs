// crates/instasearch-core/src/traits.rs
use crate::common::IndexStats;
use crate::search::RankedResult;

/// The Logic Trait.
/// Defines the lookups available on a loaded index.
///
/// Implemented by [`SearchIndex`](crate::SearchIndex); callers that only need
/// to query can depend on the trait instead of the concrete type.
pub trait NameSearch {
    fn stats(&self) -> IndexStats;

    /// Every name starting with `prefix` (case-insensitive), in trie
    /// traversal order. The order is unspecified and may differ between
    /// builds of the same dataset.
    ///
    /// Names are reported as stored. Spellings that differ only in case
    /// share one trie key, and each of them is returned (`"Ann"` and
    /// `"ANN"` both match `"ann"`).
    fn find_by_prefix(&self, prefix: &str) -> Vec<&str>;

    /// Names containing `needle` somewhere other than at the start, ordered
    /// shortest first, then case-insensitively.
    fn find_by_substring(&self, needle: &str) -> Vec<&str>;

    /// Prefix matches followed by substring matches, ranked `1..=N`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use instasearch_core::{NameSearch, SearchIndex};
    ///
    /// let index = SearchIndex::build(["Anna", "Anastasia", "Banana", "Ann"]);
    /// let result = index.ranked_search("an");
    ///
    /// assert_eq!(result.len(), 4);
    /// assert_eq!(result.hits().last().map(|h| h.name.as_str()), Some("Banana"));
    /// ```
    fn ranked_search(&self, query: &str) -> RankedResult;
}
