//! Error handling example for instasearch-rs
//!
//! This example demonstrates the failure modes callers have to handle.

use instasearch_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== instasearch Error Handling Example ===\n");

    // Example 1: Missing dataset
    println!("--- Example 1: Loading a missing file ---");
    let service = SearchService::default();
    match service.load_from_path("does/not/exist.txt") {
        Ok(()) => println!("✓ Loaded (unexpected)"),
        Err(e) => println!("✗ {e}"),
    }
    println!("  Index published: {}", service.is_loaded());
    println!();

    // Example 2: Loading twice
    println!("--- Example 2: Loading twice ---");
    service.load(["Anna", "Anastasia", "Banana", "Ann"])?;
    match service.load(["Zed"]) {
        Ok(()) => println!("  Reloaded (unexpected)"),
        Err(e) => println!("  {e}"),
    }
    println!();

    // Example 3: Short queries
    println!("--- Example 3: Query validation ---");
    for q in ["", "a", " an ", "ann"] {
        match service.query(q) {
            Ok(response) => println!("  {q:?}: {} result(s)", response.size()),
            Err(e) => println!("  {q:?}: {e}"),
        }
    }
    println!();

    // Example 4: No matches is not an error
    println!("--- Example 4: Unmatched query ---");
    let response = service.query("xyz")?;
    println!("  \"xyz\": {} result(s)", response.size());

    Ok(())
}
