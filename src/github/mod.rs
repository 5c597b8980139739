//! Read-only access to GitHub issues, pull requests, and commit statuses.
//!
//! This module wraps Octocrab behind the [`IssueTrackerGateway`] trait.
//! Errors are mapped into [`TrackerError`] so that callers can log precise
//! failures without exposing Octocrab internals.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;

pub use error::TrackerError;
pub use gateway::{DEFAULT_TIMEOUT_MS, IssueTrackerGateway, OctocrabTrackerGateway};
pub use locator::{IssueNumber, PersonalAccessToken, RepoKey, RepositoryName, RepositoryOwner};
pub use models::{CommitStatus, TrackerItem};

#[cfg(test)]
pub use gateway::MockIssueTrackerGateway;
