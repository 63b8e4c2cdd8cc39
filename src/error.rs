//! Error types for frame-cache

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for cache operations
pub type Result<T> = std::result::Result<T, CacheError>;

/// Error types for cache operations
///
/// Nothing is recovered locally: every variant surfaces to the caller at the
/// point where it occurred.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Cache directory could not be created (an existing directory is not an error)
    #[error("Failed to create cache directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Cache directory does not exist
    #[error("Cache directory '{}' does not exist", path.display())]
    DirectoryMissing { path: PathBuf },

    /// I/O error while reading, writing or removing a cache file
    #[error("I/O error at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Result could not be encoded into a cache file
    #[error("Failed to serialize result to '{}': {reason}", path.display())]
    Serialize { path: PathBuf, reason: String },

    /// Cache file exists but could not be decoded
    #[error("Failed to deserialize cache file '{}': {reason}", path.display())]
    Deserialize { path: PathBuf, reason: String },

    /// The wrapped function itself failed
    #[error("Cached function '{name}' failed: {source}")]
    Function {
        name: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Function name cannot be used as a cache filename prefix
    #[error("Invalid cache entry name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// Frame columns are inconsistent
    #[error("Invalid frame: {0}")]
    InvalidFrame(String),

    /// Listing could not be rendered
    #[error("Output error: {0}")]
    Output(String),
}

impl CacheError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CacheError::Io {
            path: path.into(),
            source,
        }
    }
}
