// crates/instasearch-core/src/loader/common_io.rs
use crate::error::{Result, SearchError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a dataset file, buffers it and, for `.gz` files, wraps it in a Gzip
/// decoder. The caller only ever sees plain text lines.
pub fn open_stream(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).map_err(|e| {
        SearchError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(BufReader::new(GzDecoder::new(file))));
        }

        #[cfg(not(feature = "compact"))]
        {
            return Err(SearchError::InvalidData(format!(
                "{} is gzip-compressed but the 'compact' feature is disabled",
                path.display()
            )));
        }
    }

    Ok(Box::new(BufReader::new(file)))
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}
