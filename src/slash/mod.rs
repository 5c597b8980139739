//! The slash-command pipeline.
//!
//! [`SlashCommandHandler`] authenticates a request against the repository
//! directory, splits the command text into issue tokens, resolves each
//! token through [`ItemResolver`], and folds the outcomes into a single
//! [`ResponsePayload`]. Only [`SlashError`] escapes to the transport; every
//! per-token failure is reported inside the payload.

pub mod command;
pub mod error;
pub mod handler;
pub mod resolver;
pub mod response;

pub use command::{IssueToken, SlashParams, parse_issue_tokens};
pub use error::SlashError;
pub use handler::SlashCommandHandler;
pub use resolver::{ItemKind, ItemResolver};
pub use response::{ItemError, ResponsePayload, ResponseType, ResultLine};
