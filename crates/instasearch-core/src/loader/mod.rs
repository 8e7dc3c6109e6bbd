// crates/instasearch-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (file I/O, optional Gzip) and turns a
//! line-delimited name list into a [`SearchIndex`].
//!
//! Format: one name per line. Lines are trimmed; blank lines are skipped.
//! The index is only built once the whole source has been read, so a read
//! error never leaves a half-populated index behind.

use crate::error::{Result, SearchError};
use crate::search::SearchIndex;
use std::io::{BufRead, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::debug;

mod common_io;

pub use common_io::open_stream;

impl SearchIndex {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "names.txt"
    }

    /// Full path of the bundled sample dataset.
    pub fn default_dataset_path() -> PathBuf {
        Self::default_data_dir().join(Self::default_dataset_filename())
    }

    /// Reads a name list from disk and builds the index.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = open_stream(path)?;
        let names = read_names(reader)?;
        debug!(path = %path.display(), names = names.len(), "read dataset");
        Ok(Self::build(names))
    }

    /// Builds the index from any buffered reader of line-delimited names.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Ok(Self::build(read_names(reader)?))
    }
}

/// Collects trimmed, non-blank lines.
pub fn read_names<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| match e.kind() {
            ErrorKind::InvalidData => {
                SearchError::InvalidData(format!("line {} is not valid UTF-8", lineno + 1))
            }
            _ => SearchError::Io(e),
        })?;
        let name = line.trim();
        if !name.is_empty() {
            names.push(name.to_owned());
        }
    }
    Ok(names)
}
