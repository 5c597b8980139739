//! Chat slash-command webhook that summarises GitHub issues and pull requests.
//!
//! A request names a repository in its path and lists issue numbers in its
//! `text` parameter. Each number is resolved against the GitHub API and the
//! reply lists every item's type, author, state, and title, adding merge and
//! CI status for open pull requests.

pub mod config;
pub mod github;
pub mod server;
pub mod slash;

pub use config::{ConfigError, ConfigProvider, RepositoryDirectory, ServiceConfig};
pub use github::{IssueTrackerGateway, OctocrabTrackerGateway, RepoKey, TrackerError};
pub use slash::{ResponsePayload, ResponseType, SlashCommandHandler, SlashError, SlashParams};
