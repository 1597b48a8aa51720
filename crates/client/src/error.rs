//! Error taxonomy for the wallet API client.
//!
//! The client interprets exactly one HTTP status itself: 401, which drives
//! the refresh-and-retry cycle in [`crate::http`]. Every other non-success
//! status is surfaced unchanged as [`ApiError::Status`] and never retried.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the wallet backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (timeout, connection refused, bad TLS, or a
    /// response body that failed to decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A request path could not be joined onto the base URL.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// JSON (de)serialization failed outside of the transport layer.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The backend answered with a non-success status. A 401 here is
    /// terminal: the refresh cycle has already run (or was impossible) and
    /// the token store has been purged.
    #[error("HTTP {status}: {body}")]
    Status {
        /// Response status code.
        status: StatusCode,
        /// Response body, truncated for logging.
        body: String,
    },

    /// The token refresh call itself failed. Tokens have been purged; the
    /// caller should route the user to re-authentication.
    #[error("Token refresh failed: {0}")]
    RefreshFailed(#[source] Box<ApiError>),

    /// Resource not found in a response the backend did return.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl ApiError {
    /// The HTTP status carried by this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this error means the session is gone and the user must sign
    /// in again (tokens have already been purged when this returns true).
    #[must_use]
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::RefreshFailed(_))
            || self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}
