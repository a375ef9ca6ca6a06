//! Query pipeline error types
//!
//! Three failure classes, all of which abort the whole `find_many` call:
//! no partial results, no per-row recovery.

use thiserror::Error;

use crate::rest::TransportError;
use crate::schema::SchemaError;

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Failure of a `find_many` call
#[derive(Debug, Error)]
pub enum QueryError {
    /// Malformed caller input (negative pagination, malformed where key).
    /// Detected before any network call; recoverable by fixing the request.
    #[error("{0}")]
    Validation(String),

    /// Schema mismatch between the request or response and the declared
    /// collection schema. Not retryable without changing the request.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Network/auth/backend failure from the transport collaborator,
    /// propagated unchanged and never retried here.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl QueryError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        QueryError::Validation(message.into())
    }
}
