//! Failure taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Every API function resolves to `Result<T, ApiError>`. Callers surface the
//! message through toasts or inline form errors; nothing is retried
//! automatically and no failure is fatal to the app.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// A failed backend operation, carrying a human-readable message.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No token in storage, or the backend rejected the token.
    #[error("you are not signed in")]
    Unauthenticated,
    /// The request never reached the backend or produced no response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// Client-side required-field validation failed before dispatch.
    #[error("{0}")]
    Invalid(String),
}

impl ApiError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }

    /// Whether re-login is the only recovery.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthenticated)
    }
}
