//! Error types for the kanban-protocol crate.
//!
//! Board operations never fail on bad input (they are no-ops instead), so the
//! only errors here come from parsing values that must belong to a closed set.

use thiserror::Error;

/// Errors that can occur during protocol operations.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// A color string did not match any entry of the tag palette.
    #[error("unknown tag color: {0:?}")]
    UnknownTagColor(String),

    /// A `NAME[:COLOR]` tag argument could not be parsed.
    #[error("invalid tag specification {spec:?}: {reason}")]
    InvalidTagSpec {
        /// The argument as given.
        spec: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
