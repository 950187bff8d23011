//! Error types for the jsql crate.

use thiserror::Error;

use crate::parser::ParseError;

/// Errors surfaced to callers of the query engine.
///
/// Predicate-level problems (unknown field, type mismatch, malformed clause)
/// are never errors; they exclude the record instead.
#[derive(Debug, Error)]
pub enum Error {
    /// The query text is structurally malformed.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The dataset text is not a JSON array of objects.
    #[error("invalid JSON dataset: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for jsql operations.
pub type Result<T> = std::result::Result<T, Error>;
