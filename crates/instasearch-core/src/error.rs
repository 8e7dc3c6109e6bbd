// crates/instasearch-core/src/error.rs
use thiserror::Error;

/// Errors surfaced by the loader and the request-handling layer.
///
/// Searching itself never fails: an unmatched query yields an empty
/// [`RankedResult`](crate::RankedResult).
#[derive(Debug, Error)]
pub enum SearchError {
    /// The dataset could not be opened.
    #[error("Dataset not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset was readable but its content is not usable (e.g. not UTF-8).
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// `load` was called on a service that already published an index.
    #[error("Index already loaded; the dataset is static once published")]
    AlreadyLoaded,

    #[error("Query term must be at least {min} characters (got {actual})")]
    QueryTooShort { min: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, SearchError>;
