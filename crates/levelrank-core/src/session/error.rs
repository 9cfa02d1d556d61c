//! Session error types

use thiserror::Error;

/// Errors that can occur when consuming a disambiguation session
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    /// No session exists for this requester
    #[error("no pending selection for requester '{0}'")]
    NotFound(String),

    /// The session outlived its TTL and has been evicted
    #[error("selection for requester '{0}' has expired")]
    Expired(String),

    /// The selected number is outside the offered list
    #[error("selection {index} is out of range for requester '{requester}' (1..={available})")]
    InvalidSelection {
        requester: String,
        index: usize,
        available: usize,
    },

    /// A newer list replaced the one the selection was made against
    #[error("selection list for requester '{0}' was replaced by a newer one")]
    Superseded(String),
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;
