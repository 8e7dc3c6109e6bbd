//! instasearch-cli
//! ===============
//!
//! Command-line interface for the `instasearch-core` autocomplete engine.
//!
//! This crate primarily provides a binary (`instasearch`). The library target
//! exists so that docs.rs renders a documentation page with this overview.
//!
//! Basic usage:
//!
//! ```text
//! instasearch --help
//! instasearch stats
//! instasearch search ann
//! instasearch --input names.txt.gz --json search ana
//! printf 'ann\nann\nxyz\n' | instasearch repl
//! ```
//!
//! For programmatic access use the [`instasearch-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
