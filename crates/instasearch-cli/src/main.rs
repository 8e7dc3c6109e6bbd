//! instasearch: command-line front end for instasearch-core
//!
//! Loads a name list once, then answers queries with ranked matches.
//!
//! Usage examples
//! --------------
//!
//! - Show index statistics
//!   $ instasearch stats
//!
//! - Ranked search (prefix matches first, then substring matches)
//!   $ instasearch search ann
//!   $ instasearch --json search ana
//!
//! - Raw prefix lookup
//!   $ instasearch prefix mar
//!
//! - Interactive / piped queries, answered through the query cache
//!   $ printf 'ann\nann\n' | instasearch repl
//!
//! Data source
//! -----------
//!
//! By default the CLI loads the sample `names.txt` bundled with
//! `instasearch-core`. Use `--input <path>` to point to another
//! line-delimited list; `.gz` files are decompressed on the fly.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use instasearch_core::{
    NameSearch, SearchError, SearchIndex, SearchResponse, SearchService, ServiceConfig,
};
use std::io::{self, BufRead, Write};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(io::stderr)
        .init();

    let input_path = args.input.unwrap_or_else(|| {
        SearchIndex::default_dataset_path()
            .to_string_lossy()
            .to_string()
    });

    let config = ServiceConfig {
        min_query_length: args.min_length,
        max_cache_entries: args.max_cache,
    };
    let service = SearchService::new(config);
    service
        .load_from_path(&input_path)
        .with_context(|| format!("failed to load names from {input_path}"))?;

    match args.command {
        Commands::Stats => {
            if let Some(stats) = service.index_stats() {
                println!("Index statistics:");
                println!("  Names: {}", stats.names);
                println!("  Distinct keys: {}", stats.distinct_keys);
                println!("  Trie nodes: {}", stats.trie_nodes);
            }
        }

        Commands::Search { query } => {
            let response = service.query(&query)?;
            print_response(&response, args.json)?;
        }

        Commands::Prefix { prefix } => {
            let Some(index) = service.index() else {
                return Ok(());
            };
            let matches = index.find_by_prefix(&prefix);
            if matches.is_empty() {
                println!("No names start with: {prefix}");
            } else {
                for name in matches {
                    println!("{name}");
                }
            }
        }

        Commands::Repl => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line?;
                match service.query(&line) {
                    Ok(response) => print_response(&response, args.json)?,
                    Err(e @ SearchError::QueryTooShort { .. }) => eprintln!("{e}"),
                    Err(e) => return Err(e.into()),
                }
                io::stdout().flush()?;
            }
            let stats = service.cache_stats();
            tracing::info!(
                entries = stats.entries,
                hits = stats.hits,
                misses = stats.misses,
                "query cache"
            );
        }
    }

    Ok(())
}

fn print_response(response: &SearchResponse, json: bool) -> anyhow::Result<()> {
    if json {
        #[cfg(feature = "json")]
        {
            println!("{}", response.results.to_json()?);
            return Ok(());
        }
        #[cfg(not(feature = "json"))]
        anyhow::bail!("--json requires the 'json' feature");
    }

    if response.results.is_empty() {
        println!("No names found matching: {}", response.query);
    } else {
        for hit in response.results.hits() {
            println!("{:>4}. {}", hit.rank, hit.name);
        }
    }
    println!(
        "{} result(s) in {} ms",
        response.size(),
        response.response_time_ms()
    );
    Ok(())
}
