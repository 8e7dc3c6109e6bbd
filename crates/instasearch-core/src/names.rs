// crates/instasearch-core/src/names.rs
use crate::text::{contains_folded, find_folded, fold_key};
use std::collections::HashSet;

/// Flat set of every loaded name, original casing retained.
///
/// This duplicates what the [`PrefixIndex`](crate::PrefixIndex) stores, but
/// a linear scan over a flat set keeps the substring fallback trivial.
#[derive(Debug, Default, Clone)]
pub struct NameSet {
    names: HashSet<String>,
}

impl NameSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a name. Returns `false` if it was already present.
    pub fn add(&mut self, entry: &str) -> bool {
        if self.names.contains(entry) {
            return false;
        }
        self.names.insert(entry.to_owned())
    }

    /// Case-insensitive substring test.
    #[inline]
    pub fn contains_substring(entry: &str, needle: &str) -> bool {
        contains_folded(entry, needle)
    }

    /// Exact (case-sensitive) membership.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Names whose folded form contains the folded `needle` but does not
    /// start with it. Unordered.
    ///
    /// A name starts with the needle exactly when its first occurrence is at
    /// offset 0, so one search per name decides both conditions.
    pub fn infix_matches<'a>(&'a self, needle: &str) -> impl Iterator<Item = &'a str> + 'a {
        let q = fold_key(needle);
        self.names
            .iter()
            .map(String::as_str)
            .filter(move |name| matches!(find_folded(name, &q), Some(pos) if pos > 0))
    }

    /// Iterates all names in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
