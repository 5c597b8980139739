//! Errors that reject a slash-command request as a whole.

use thiserror::Error;

/// Request-level failures. Each maps to HTTP 400 and is raised before any
/// outbound call is made.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SlashError {
    /// No settings exist for the repository in the request path.
    #[error("no configuration found for {repository}")]
    MissingConfiguration {
        /// `org/repo` from the request path.
        repository: String,
    },

    /// The `token` parameter does not match the configured secret.
    #[error("token in request incorrect for {repository}")]
    TokenMismatch {
        /// `org/repo` from the request path.
        repository: String,
    },

    /// The `text` parameter named no issues.
    #[error("no issue numbers supplied for {repository}")]
    EmptyCommand {
        /// `org/repo` from the request path.
        repository: String,
    },

    /// The query string or form body could not be read.
    #[error("unreadable parameters for {repository}: {message}")]
    MalformedRequest {
        /// `org/repo` from the request path.
        repository: String,
        /// Why the parameters were rejected.
        message: String,
    },
}
