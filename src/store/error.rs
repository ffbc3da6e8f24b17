//! Store Error Taxonomy
//!
//! Failures surfaced by the file-backed store. A missing backing file is not
//! represented here: `load` recovers it locally as the empty collection.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file exists but could not be read.
    #[error("failed to read student data from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The backing file could not be written.
    #[error("failed to write student data to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The backing file's content is not a JSON array of records.
    #[error("malformed student data in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory collection could not be serialized.
    #[error("failed to serialize student data: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}
