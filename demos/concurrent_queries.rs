//! Concurrent query example for instasearch-rs
//!
//! Several threads hammer the same service; the shared cache ends up with
//! one entry per distinct query.

use instasearch_rs::prelude::*;
use std::sync::Arc;
use std::thread;

fn main() -> Result<()> {
    let service = Arc::new(SearchService::default());
    service.load_from_path(SearchIndex::default_dataset_path())?;

    let queries = ["ann", "ana", "mar", "ian", "xyz"];
    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                for q in queries {
                    let results = service.search(q);
                    println!("worker {worker}: {q} -> {} result(s)", results.len());
                }
            })
        })
        .collect();

    for handle in handles {
        if handle.join().is_err() {
            eprintln!("worker panicked");
        }
    }

    let stats = service.cache_stats();
    println!(
        "cache: {} entries, {} hits, {} misses",
        stats.entries, stats.hits, stats.misses
    );
    Ok(())
}
