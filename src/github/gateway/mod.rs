//! Gateways for reading issues, pull requests, and statuses from GitHub.
//!
//! The trait-based design lets the item resolver be exercised against mocks
//! while the Octocrab implementation handles real HTTP requests. Every
//! operation is a single read-only GET with no retries or caching.

mod client;
mod error_mapping;
mod tracker;

pub use tracker::{DEFAULT_TIMEOUT_MS, OctocrabTrackerGateway};

use async_trait::async_trait;

use crate::github::error::TrackerError;
use crate::github::locator::{IssueNumber, RepoKey};
use crate::github::models::{CommitStatus, TrackerItem};

/// Gateway that can load items from the remote tracker.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssueTrackerGateway: Send + Sync {
    /// Fetch the issue resource for a repository and number.
    async fn item(&self, key: &RepoKey, number: IssueNumber) -> Result<TrackerItem, TrackerError>;

    /// Fetch pull request detail from the URL linked in an issue payload.
    async fn pull_request(&self, url: &str) -> Result<TrackerItem, TrackerError>;

    /// Fetch the commit status list from the URL linked in a pull request
    /// payload. The most recent status comes first.
    async fn statuses(&self, url: &str) -> Result<Vec<CommitStatus>, TrackerError>;
}
