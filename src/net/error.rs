//! Failure taxonomy for API calls.
//!
//! ERROR HANDLING
//! ==============
//! No failure here is fatal: every variant maps to a user-facing message at
//! the view layer and the user can retry manually. No retries are made by
//! the client itself.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Classified outcome of a failed API call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 400 — malformed input (bad email, short password, bad id).
    #[error("invalid request")]
    Validation,
    /// 401 — missing or rejected credentials.
    #[error("invalid or missing credentials")]
    Unauthorized,
    /// 403 — authenticated but not permitted (e.g. not enrolled).
    #[error("access denied")]
    Forbidden,
    /// 409 — resource conflict (e.g. duplicate email on registration).
    #[error("conflict")]
    Conflict,
    /// Any other non-success HTTP status.
    #[error("request failed with status {0}")]
    Status(u16),
    /// Transport-level failure; the request may never have reached the server.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered but the body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-success HTTP status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::Validation,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            409 => Self::Conflict,
            other => Self::Status(other),
        }
    }

    /// The HTTP status this error was derived from, where one exists.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Validation => Some(400),
            Self::Unauthorized => Some(401),
            Self::Forbidden => Some(403),
            Self::Conflict => Some(409),
            Self::Status(status) => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}
