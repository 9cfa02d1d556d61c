//! Resolution error types

use thiserror::Error;

use crate::session::SessionError;

/// Errors raised while indexing records or resolving a query.
///
/// `NoMatch` and ambiguity are outcomes, not errors; see [`crate::Outcome`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ResolveError {
    /// The query cannot be resolved at all (empty after trimming).
    #[error("query rejected: {0}")]
    InputRejected(String),

    /// The record payload is not a list of record-shaped values.
    #[error("malformed record set: {0}")]
    MalformedRecordSet(String),
}

/// Result type for resolution operations
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors surfaced by the lookup entry point.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LookupError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Session(#[from] SessionError),
}
