// crates/instasearch-core/src/trie.rs

//! # Prefix Index
//!
//! A character trie over the folded (lower-cased) form of every entry.
//!
//! - `insert` and the prefix walk are `O(m)` in the length of the key.
//! - Collecting a subtree is `O(t + c)` for `t` results spelling `c` chars.
//!
//! Children live in a `HashMap`, so the order in which siblings are visited
//! (and therefore the order of [`PrefixIndex::search_prefix`] results) is
//! unspecified. Callers must not rely on it being alphabetical.

use crate::text::fold_key;
use std::collections::HashMap;
use std::fmt;

#[derive(Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    /// Original spellings of the entries whose folded key ends here.
    /// Empty means no entry ends at this node.
    spellings: Vec<String>,
}

impl TrieNode {
    fn is_end(&self) -> bool {
        !self.spellings.is_empty()
    }
}

/// Trie used for prefix lookup.
///
/// Entries are keyed by their lower-cased form but remember how they were
/// spelled when inserted, so results come back in stored casing.
///
/// ```rust
/// use instasearch_core::PrefixIndex;
///
/// let mut index = PrefixIndex::new();
/// index.insert("Anna");
/// index.insert("Ann");
/// index.insert("Banana");
///
/// let mut hits = index.search_prefix("AN");
/// hits.sort_unstable();
/// assert_eq!(hits, vec!["Ann", "Anna"]);
/// ```
#[derive(Default)]
pub struct PrefixIndex {
    root: TrieNode,
    keys: usize,
    nodes: usize,
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry. Inserting the same string twice is a no-op.
    ///
    /// The empty string marks the root itself as an end.
    pub fn insert(&mut self, entry: &str) {
        let key = fold_key(entry);
        let mut created = 0;
        let mut node = &mut self.root;
        for ch in key.chars() {
            node = node.children.entry(ch).or_insert_with(|| {
                created += 1;
                TrieNode::default()
            });
        }
        self.nodes += created;

        if !node.is_end() {
            self.keys += 1;
        }
        if !node.spellings.iter().any(|s| s == entry) {
            node.spellings.push(entry.to_owned());
        }
    }

    /// Returns every stored entry whose folded form starts with the folded
    /// `prefix`. Order is unspecified.
    ///
    /// The subtree is walked with an explicit stack, so very long shared
    /// prefixes cannot overflow the call stack.
    pub fn search_prefix(&self, prefix: &str) -> Vec<&str> {
        let mut out = Vec::new();
        let Some(start) = self.find_node(prefix) else {
            return out;
        };

        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            out.extend(node.spellings.iter().map(String::as_str));
            stack.extend(node.children.values());
        }
        out
    }

    /// Exact, case-insensitive membership.
    pub fn contains(&self, entry: &str) -> bool {
        self.find_node(entry).is_some_and(TrieNode::is_end)
    }

    /// Number of distinct folded keys.
    pub fn len(&self) -> usize {
        self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys == 0
    }

    /// Number of nodes, root excluded.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    fn find_node(&self, key: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in fold_key(key).chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }
}

impl fmt::Debug for PrefixIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixIndex")
            .field("keys", &self.keys)
            .field("nodes", &self.nodes)
            .finish()
    }
}

// The derived drop glue recurses once per trie level.
impl Drop for PrefixIndex {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = self.root.children.drain().map(|(_, n)| n).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, n)| n));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut v: Vec<&str>) -> Vec<&str> {
        v.sort_unstable();
        v
    }

    fn sample() -> PrefixIndex {
        let mut index = PrefixIndex::new();
        for name in ["Anna", "Anastasia", "Banana", "Ann"] {
            index.insert(name);
        }
        index
    }

    #[test]
    fn test_search_prefix_returns_all_descendants() {
        let index = sample();
        assert_eq!(
            sorted(index.search_prefix("an")),
            vec!["Anastasia", "Ann", "Anna"]
        );
    }

    #[test]
    fn test_search_prefix_is_case_insensitive() {
        let index = sample();
        assert_eq!(sorted(index.search_prefix("ANN")), vec!["Ann", "Anna"]);
    }

    #[test]
    fn test_search_prefix_missing_char_is_empty() {
        let index = sample();
        assert!(index.search_prefix("anx").is_empty());
        assert!(index.search_prefix("xyz").is_empty());
    }

    #[test]
    fn test_prefix_equal_to_entry_includes_entry() {
        let index = sample();
        assert!(index.search_prefix("banana").contains(&"Banana"));
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut index = sample();
        let nodes = index.node_count();
        index.insert("Anna");
        assert_eq!(index.len(), 4);
        assert_eq!(index.node_count(), nodes);
        assert_eq!(index.search_prefix("anna"), vec!["Anna"]);
    }

    #[test]
    fn test_case_variants_share_a_key() {
        let mut index = PrefixIndex::new();
        index.insert("Ann");
        index.insert("ANN");
        assert_eq!(index.len(), 1);
        assert_eq!(sorted(index.search_prefix("ann")), vec!["ANN", "Ann"]);
    }

    #[test]
    fn test_empty_entry_marks_root() {
        let mut index = PrefixIndex::new();
        assert!(!index.contains(""));
        index.insert("");
        assert!(index.contains(""));
        assert_eq!(index.node_count(), 0);
        assert_eq!(index.search_prefix(""), vec![""]);
    }

    #[test]
    fn test_contains_requires_end_marker() {
        let index = sample();
        assert!(index.contains("anna"));
        assert!(!index.contains("an"));
    }

    #[test]
    fn test_deep_chain_does_not_recurse() {
        let mut index = PrefixIndex::new();
        let long = "a".repeat(50_000);
        index.insert(&long);
        index.insert(&long[..10]);
        assert_eq!(index.search_prefix("aaa").len(), 2);
    }

    #[test]
    fn test_node_count_shares_prefixes() {
        let mut index = PrefixIndex::new();
        index.insert("ab");
        index.insert("ac");
        // a, b, c
        assert_eq!(index.node_count(), 3);
    }
}
