//! Error types for the page's persistence, media and content operations.
//!
//! None of these reach the visitor directly: the stores log and swallow
//! them, and the newsletter form maps them to a generic message.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from the persisted key-value store
#[derive(Error, Debug)]
pub enum StorageError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error from serde_json
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The temp file could not replace the storage file
    #[error("Failed to persist storage file: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// The store refused the operation (quota, disabled storage)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors while reading dropped or picked files
#[derive(Error, Debug)]
pub enum MediaError {
    /// A single file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Some files in a batch failed; nothing from the batch was applied
    #[error("{} of {total} files could not be read", .failures.len())]
    Batch {
        failures: Vec<MediaError>,
        total: usize,
    },

    /// A batch upload body could not be decoded; nothing from it was applied
    #[error("Invalid upload batch: {0}")]
    InvalidBatch(String),
}

impl MediaError {
    /// Paths that failed to read, in the order they were given
    pub fn failed_paths(&self) -> Vec<&std::path::Path> {
        match self {
            MediaError::Read { path, .. } => vec![path.as_path()],
            MediaError::Batch { failures, .. } => {
                failures.iter().flat_map(|f| f.failed_paths()).collect()
            }
            MediaError::InvalidBatch(_) => Vec::new(),
        }
    }
}

/// Result type alias for media operations
pub type MediaResult<T> = Result<T, MediaError>;

/// Errors loading a replacement content file
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to read content file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid content file {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors starting the preview server
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to start preview server on {addr}: {message}")]
    Bind { addr: String, message: String },
}
