//! Error types for board storage.
//!
//! Bad or outdated board data never produces an error; it is migrated or
//! replaced with the seed board. Errors are limited to the storage medium
//! itself.

use std::path::PathBuf;

/// Errors that can occur while reading or writing the board slot.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Failed to read a storage slot.
    #[error("failed to read board slot at {path}: {source}")]
    Read {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a storage slot.
    #[error("failed to write board slot at {path}: {source}")]
    Write {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the board.
    #[error("failed to serialize board: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed to determine the platform data directory.
    #[error("could not determine data directory")]
    NoDataDirectory,
}

/// A specialized Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
