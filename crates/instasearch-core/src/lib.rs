// crates/instasearch-core/src/lib.rs

//! # instasearch-core
//!
//! In-memory autocomplete over a static list of names.
//!
//! - [`PrefixIndex`]: trie for prefix lookup
//! - [`NameSet`]: flat set for the substring fallback
//! - [`SearchIndex`] + [`NameSearch`]: two-tier ranking, prefix matches
//!   first, then substring matches (shortest first)
//! - [`QueryCache`]: concurrent per-query memo
//! - [`SearchService`]: load-once gate, query validation, cache-through search
//!
//! ```rust
//! use instasearch_core::prelude::*;
//!
//! let service = SearchService::default();
//! service.load(["Anna", "Anastasia", "Banana", "Ann"])?;
//!
//! let response = service.query("ann")?;
//! for hit in response.results.hits() {
//!     println!("{}. {}", hit.rank, hit.name);
//! }
//! # Ok::<(), instasearch_core::SearchError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod cache;
pub mod common;
pub mod error;
pub mod loader;
pub mod names;
pub mod search;
pub mod service;
pub mod text;
pub mod traits;
pub mod trie;

// Re-exports
pub use crate::cache::QueryCache;
pub use crate::common::{CacheStats, IndexStats};
pub use crate::error::{Result, SearchError};
pub use crate::names::NameSet;
pub use crate::search::{RankedHit, RankedResult, SearchIndex};
pub use crate::service::{SearchResponse, SearchService, ServiceConfig, MIN_QUERY_LENGTH};
pub use crate::traits::NameSearch;
pub use crate::trie::PrefixIndex;

pub mod prelude {
    pub use crate::{
        NameSearch, QueryCache, RankedHit, RankedResult, Result, SearchError, SearchIndex,
        SearchResponse, SearchService, ServiceConfig,
    };
}
