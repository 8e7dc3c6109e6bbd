// crates/instasearch-core/src/text.rs

//! Case folding helpers shared by the trie and the substring scan.
//!
//! All comparisons go through [`fold_key`], so prefix and substring matching
//! agree on what "case-insensitive" means.

/// Lower-cases a string for indexing and comparison.
///
/// Uses Unicode lower-casing, so the folded form may have a different
/// number of chars than the input (e.g. `İ`).
///
/// ```rust
/// use instasearch_core::text::fold_key;
///
/// assert_eq!(fold_key("AnNa"), "anna");
/// ```
#[inline]
pub fn fold_key(s: &str) -> String {
    s.to_lowercase()
}

/// Case-insensitive substring test.
///
/// ```rust
/// use instasearch_core::text::contains_folded;
///
/// assert!(contains_folded("Banana", "AN"));
/// assert!(!contains_folded("Anna", "xyz"));
/// ```
#[inline]
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    find_folded(haystack, &fold_key(needle)).is_some()
}

/// Byte offset of the first occurrence of `folded_needle` in the folded
/// `haystack`. The needle must already have gone through [`fold_key`], so a
/// scan folds it once instead of once per name.
///
/// ```rust
/// use instasearch_core::text::find_folded;
///
/// assert_eq!(find_folded("Banana", "an"), Some(1));
/// assert_eq!(find_folded("Anna", "an"), Some(0));
/// assert_eq!(find_folded("Anna", "xyz"), None);
/// ```
#[inline]
pub fn find_folded(haystack: &str, folded_needle: &str) -> Option<usize> {
    fold_key(haystack).find(folded_needle)
}

/// Length in chars, the unit substring matches are ordered by.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
