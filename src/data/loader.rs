use std::path::{Path, PathBuf};

use thiserror::Error;

use super::filter::filter_rows;
use super::model::Dataset;
use super::parser::parse_csv;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Anything that stops the dataset from loading at all.
///
/// Bad rows never end up here; they are dropped by the parser or the filter.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not valid UTF-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
    #[error("loader stopped before producing a result")]
    Interrupted,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read a CSV file and build the filtered working dataset.
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(load_text(&text))
}

/// Parse and filter CSV text that is already in memory.
pub fn load_text(text: &str) -> Dataset {
    let parsed = parse_csv(text);
    let rows = filter_rows(parsed.rows);
    Dataset::from_rows(parsed.headers, rows)
}
