//! Error types exposed by the remote tracker layer.

use thiserror::Error;

/// Errors surfaced while communicating with the GitHub API.
///
/// These never reach the chat user verbatim: the item resolver folds them
/// into fixed user-facing lines and logs the detail instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrackerError {
    /// GitHub answered 404 for the requested resource.
    #[error("{operation} not found: {message}")]
    NotFound {
        /// The fetch that failed.
        operation: String,
        /// Message returned by GitHub.
        message: String,
    },

    /// The configured upstream token was rejected.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response detail describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The call did not complete within the configured timeout.
    #[error("{operation} timed out after {timeout_ms}ms")]
    Timeout {
        /// The fetch that timed out.
        operation: String,
        /// Timeout that elapsed, in milliseconds.
        timeout_ms: u64,
    },

    /// A URL taken from configuration or a payload could not be used.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// A payload was well-formed HTTP but lacked a field the caller needs.
    #[error("{operation} response is missing {field}")]
    MissingField {
        /// The fetch whose payload was incomplete.
        operation: String,
        /// Name of the absent field.
        field: String,
    },
}
