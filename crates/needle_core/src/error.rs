use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NeedleError {
    #[error("artifact not readable at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("artifact at {path} is malformed: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("grid for '{ch}' is not rectangular: row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        ch: String,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NeedleError>;
