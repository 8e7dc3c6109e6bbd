//! Basic usage example for instasearch-rs
//!
//! This example demonstrates how to:
//! - Load the bundled name list
//! - Run ranked searches
//! - Look at the two result tiers separately
//! - Observe the query cache

use instasearch_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== instasearch Basic Usage Example ===\n");

    // Load the index
    println!("Loading names...");
    let service = SearchService::default();
    service.load_from_path(SearchIndex::default_dataset_path())?;
    if let Some(stats) = service.index_stats() {
        println!("✓ Loaded {} names ({} trie nodes)\n", stats.names, stats.trie_nodes);
    }

    // Example 1: Ranked search
    println!("--- Example 1: Ranked search for \"ann\" ---");
    let response = service.query("ann")?;
    for hit in response.results.hits() {
        println!("{}. {}", hit.rank, hit.name);
    }
    println!();

    // Example 2: The two tiers
    println!("--- Example 2: Prefix tier vs substring tier for \"ana\" ---");
    if let Some(index) = service.index() {
        println!("Prefix matches (order unspecified): {:?}", index.find_by_prefix("ana"));
        println!("Substring matches (shortest first): {:?}", index.find_by_substring("ana"));
    }
    println!();

    // Example 3: Using the cache
    println!("--- Example 3: Cache usage ---");
    let first = service.query("mar")?;
    println!("First query:  {} results in {:?}", first.size(), first.elapsed);
    let second = service.query("mar")?;
    println!("Second query: {} results in {:?}", second.size(), second.elapsed);
    let stats = service.cache_stats();
    println!("Cache: {} entries, {} hits, {} misses", stats.entries, stats.hits, stats.misses);

    println!("\n=== Example completed successfully ===");
    Ok(())
}
