//! Error types for the kanban-config crate.

use std::path::PathBuf;

/// Everything that can go wrong while locating, reading or writing the
/// configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A config file exists but could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        /// File that was read.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A config file or its directory could not be written.
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        /// File that was written.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A config file is not valid JSON5 or does not match [`Config`](crate::Config).
    #[error("invalid config in {}: {source}", .path.display())]
    Parse {
        /// File that was parsed.
        path: PathBuf,
        #[source]
        source: serde_json5::Error,
    },

    #[error("cannot serialize config: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The storage key cannot be used as a slot name.
    #[error("invalid storage key {key:?}: {reason}")]
    InvalidStorageKey {
        /// The configured key.
        key: String,
        /// The reason the key is invalid.
        reason: String,
    },

    /// The platform config or data directory is unknown.
    #[error("no platform {0} directory available")]
    NoPlatformDirectory(&'static str),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
