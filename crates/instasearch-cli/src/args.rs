use clap::{Parser, Subcommand};

/// CLI arguments for instasearch-cli
#[derive(Debug, Parser)]
#[command(
    name = "instasearch",
    version,
    about = "CLI for loading a name list and querying it with ranked autocomplete"
)]
pub struct CliArgs {
    /// Path to a line-delimited name list, optionally .gz (default: bundled names.txt)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Minimum query length in characters
    #[arg(long = "min-length", global = true, default_value_t = instasearch_core::MIN_QUERY_LENGTH)]
    pub min_length: usize,

    /// Stop caching new queries after this many distinct ones (default: unbounded)
    #[arg(long = "max-cache", global = true)]
    pub max_cache: Option<usize>,

    /// Print results as JSON
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the loaded index
    Stats,

    /// Ranked search: prefix matches first, then substring matches
    Search {
        /// Query text (case-insensitive, trimmed)
        query: String,
    },

    /// List names starting with a prefix (unranked, order unspecified)
    Prefix {
        /// Prefix to look up (case-insensitive)
        prefix: String,
    },

    /// Read queries from stdin, one per line, answering each through the cache
    Repl,
}
