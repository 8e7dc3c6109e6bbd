//! Public API contracts for instasearch-core.
//!
//! These pin the ranking and caching behaviour callers rely on:
//! - prefix matches are complete and exact
//! - prefix and substring tiers never overlap
//! - ranks are dense
//! - substring tier ordering
//! - cache idempotence under concurrency

use instasearch_core::prelude::*;
use instasearch_core::text::fold_key;
use std::collections::HashSet;
use std::sync::Arc;

const DATASET: &[&str] = &[
    "Anna", "Anastasia", "Banana", "Ann", "Hannah", "Joanna", "Susanna", "Diana", "Adrian",
    "Ian", "Jana", "Liana", "Nathan", "ANNABELLE", "anabel",
];

fn index() -> SearchIndex {
    SearchIndex::build(DATASET)
}

fn queries() -> impl Iterator<Item = &'static str> {
    ["a", "an", "ann", "ANA", "na", "nna", "ian", "xyz", "han", "e"].into_iter()
}

// ============================================================
// PREFIX TIER
// ============================================================

#[test]
fn every_entry_is_found_by_each_of_its_prefixes() {
    let index = index();
    for entry in DATASET {
        let chars: Vec<char> = entry.chars().collect();
        for end in 1..=chars.len() {
            let prefix: String = chars[..end].iter().collect();
            let hits = index.find_by_prefix(&prefix);
            assert!(hits.contains(entry), "{entry} missing for prefix {prefix}");
        }
    }
}

#[test]
fn prefix_hits_really_start_with_the_prefix() {
    let index = index();
    for q in queries() {
        for hit in index.find_by_prefix(q) {
            assert!(fold_key(hit).starts_with(&fold_key(q)), "{hit} for {q}");
        }
    }
}

// ============================================================
// COMBINED RANKING
// ============================================================

#[test]
fn prefix_and_substring_tiers_are_disjoint() {
    let index = index();
    for q in queries() {
        let prefix: HashSet<&str> = index.find_by_prefix(q).into_iter().collect();
        for hit in index.find_by_substring(q) {
            assert!(!prefix.contains(hit), "{hit} listed twice for {q}");
        }

        let result = index.ranked_search(q);
        let unique: HashSet<&str> = result.names().collect();
        assert_eq!(unique.len(), result.len());
    }
}

#[test]
fn ranks_are_one_to_n() {
    let index = index();
    for q in queries() {
        let result = index.ranked_search(q);
        let ranks: Vec<usize> = result.hits().iter().map(|h| h.rank).collect();
        let expected: Vec<usize> = (1..=result.len()).collect();
        assert_eq!(ranks, expected, "query {q}");
    }
}

#[test]
fn prefix_hits_come_first() {
    let index = index();
    for q in queries() {
        let result = index.ranked_search(q);
        let n_prefix = index.find_by_prefix(q).len();
        let (head, tail) = result.hits().split_at(n_prefix);
        assert!(head.iter().all(|h| fold_key(&h.name).starts_with(&fold_key(q))));
        assert!(tail.iter().all(|h| !fold_key(&h.name).starts_with(&fold_key(q))));
    }
}

#[test]
fn substring_tier_is_shortest_first_then_alphabetical() {
    let index = index();
    for q in queries() {
        let hits = index.find_by_substring(q);
        for pair in hits.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let (la, lb) = (a.chars().count(), b.chars().count());
            assert!(la < lb || (la == lb && fold_key(a) <= fold_key(b)), "{a} before {b}");
        }
    }
}

#[test]
fn worked_example_an() {
    let index = SearchIndex::build(["Anna", "Anastasia", "Banana", "Ann"]);
    let result = index.ranked_search("an");

    let mut head: Vec<&str> = result.names().take(3).collect();
    head.sort_unstable();
    assert_eq!(head, vec!["Anastasia", "Ann", "Anna"]);
    assert_eq!(result.hits()[3].name, "Banana");
    assert_eq!(result.hits()[3].rank, 4);
}

#[test]
fn unmatched_query_is_empty_not_error() {
    let index = SearchIndex::build(["Anna", "Anastasia", "Banana", "Ann"]);
    assert!(index.ranked_search("xyz").is_empty());

    let service = SearchService::with_index(index, ServiceConfig::default());
    let response = service.query("xyz").unwrap();
    assert_eq!(response.size(), 0);
}

// ============================================================
// CACHE
// ============================================================

#[test]
fn repeated_queries_return_identical_content() {
    let service = SearchService::with_index(index(), ServiceConfig::default());
    for q in queries() {
        let first = service.search(q);
        let second = service.search(q);
        assert_eq!(first, second);
    }
}

#[test]
fn concurrent_first_queries_share_one_entry() {
    let service = Arc::new(SearchService::with_index(
        SearchIndex::build(["Anna", "Anastasia", "Banana", "Ann"]),
        ServiceConfig::default(),
    ));

    let results: Vec<Arc<RankedResult>> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let service = Arc::clone(&service);
                s.spawn(move || service.search("an"))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for result in &results {
        assert_eq!(result.len(), 4);
        assert_eq!(result.hits()[3].name, "Banana");
    }
    assert_eq!(service.cache().len(), 1);
    assert!(service.cache().contains("an"));
}

#[test]
fn concurrent_mixed_queries_match_uncached_results() {
    let index = index();
    let expected: Vec<(String, RankedResult)> = queries()
        .map(|q| (q.to_owned(), index.ranked_search(q)))
        .collect();
    let service = SearchService::with_index(index, ServiceConfig::default());

    std::thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                for (q, want) in &expected {
                    let got = service.search(q);
                    // Trie order may differ between builds; compare tiers as sets.
                    let got_names: HashSet<&str> = got.names().collect();
                    let want_names: HashSet<&str> = want.names().collect();
                    assert_eq!(got_names, want_names, "query {q}");
                }
            });
        }
    });

    assert_eq!(service.cache().len(), expected.len());
}

// ============================================================
// LOADING
// ============================================================

#[test]
fn service_loads_bundled_dataset() {
    let service = SearchService::default();
    service
        .load_from_path(SearchIndex::default_dataset_path())
        .unwrap();

    let response = service.query("ann").unwrap();
    assert!(response.results.names().any(|n| n == "Anna"));
    assert!(response.results.names().any(|n| n == "Joanna"));
}
