//! Result lines and the chat-webhook response body.

use serde::Serialize;
use thiserror::Error;

/// User-facing failure for one issue token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ItemError {
    /// The token is not a non-negative integer.
    #[error("{token} is not a valid issue number")]
    InvalidNumber {
        /// Token as supplied, without its `#`.
        token: String,
    },

    /// The issue fetch failed for any reason.
    #[error("Unknown Issue number: {token}")]
    UnknownIssue {
        /// Token as supplied, without its `#`.
        token: String,
    },

    /// The item is a pull request but its detail could not be fetched.
    #[error("Unable to get PR information for {token}")]
    PullRequestUnavailable {
        /// Token as supplied, without its `#`.
        token: String,
    },
}

/// Outcome of resolving one issue token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultLine {
    /// Formatted summary line.
    Success(String),
    /// Failure to report instead.
    Error(ItemError),
}

/// Whether the chat platform shows the reply to everyone or only the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    /// Visible to the whole channel.
    InChannel,
    /// Visible only to the user who ran the command.
    Ephemeral,
}

/// JSON body returned to the chat platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponsePayload {
    /// Visibility of the reply.
    pub response_type: ResponseType,
    /// Display name for the reply.
    pub username: String,
    /// Display icon for the reply.
    pub icon_url: String,
    /// Newline-joined result lines.
    pub text: String,
}

impl ResponsePayload {
    /// Builds the reply from result lines in input order.
    ///
    /// Any error makes the reply ephemeral and carries only the error lines;
    /// successful lines are dropped in that case. Otherwise the reply goes
    /// to the channel with every success line.
    #[must_use]
    pub fn assemble(lines: Vec<ResultLine>, username: String, icon_url: String) -> Self {
        let mut successes = Vec::new();
        let mut errors = Vec::new();
        for line in lines {
            match line {
                ResultLine::Success(text) => successes.push(text),
                ResultLine::Error(error) => errors.push(error.to_string()),
            }
        }

        let (response_type, text) = if errors.is_empty() {
            (ResponseType::InChannel, successes.join("\n"))
        } else {
            (ResponseType::Ephemeral, errors.join("\n"))
        };

        Self {
            response_type,
            username,
            icon_url,
            text,
        }
    }

    /// Returns true when the reply reports failures.
    #[must_use]
    pub const fn has_errors(&self) -> bool {
        matches!(self.response_type, ResponseType::Ephemeral)
    }
}
