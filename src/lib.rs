//! instasearch-rs
//!
//! Umbrella crate re-exporting [`instasearch_core`] so the demos can use a
//! single `instasearch_rs::prelude::*` import.

pub use instasearch_core::*;
