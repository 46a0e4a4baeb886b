//! Errors for table construction and (de)serialization.

use thiserror::Error;

/// Result alias for fallible table operations.
pub type Result<T> = std::result::Result<T, TableError>;

/// Failure while building or decoding an implementor table.
#[derive(Debug, Error)]
pub enum TableError {
    /// A trait path with no segments was given.
    #[error("trait path is empty")]
    EmptyTraitPath,

    /// A trait path segment is not a valid identifier.
    #[error("invalid segment `{segment}` in trait path `{path}`")]
    InvalidSegment { path: String, segment: String },

    /// A registration script global is not a plain JS identifier.
    #[error("{field} `{name}` is not a valid JS identifier")]
    InvalidScriptName { field: &'static str, name: String },

    /// The JSON wire form could not be encoded or decoded.
    #[error("malformed implementor table: {0}")]
    Json(#[from] serde_json::Error),
}
