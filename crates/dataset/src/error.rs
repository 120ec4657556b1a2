use core_types::CoreError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read dataset file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("An error occurred during JSON deserialization: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid restaurant record at position {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: CoreError,
    },

    #[error("The dataset contains no restaurants.")]
    Empty,
}
