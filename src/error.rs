//! API Error Taxonomy
//!
//! Every failure resolves to a visible, recoverable UI state; nothing here
//! aborts the process.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Invalid credentials or an expired/invalid token. Always downgrades
    /// the session to unauthenticated.
    #[error("{0}")]
    Auth(String),

    /// Malformed payload, surfaced verbatim at the point of submission.
    #[error("{0}")]
    Validation(String),

    /// Stale identifier.
    #[error("{0}")]
    NotFound(String),

    /// Transport failure. Rendered as a retry prompt; the underlying detail
    /// is kept for the console.
    #[error("Request failed. Check your connection and try again.")]
    Network(String),

    #[error("Server error ({0}): {1}")]
    Server(u16, String),
}

impl ApiError {
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}
