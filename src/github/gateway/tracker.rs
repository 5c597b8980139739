//! Octocrab implementation of the tracker gateway.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use octocrab::Octocrab;
use url::Url;

use crate::github::error::TrackerError;
use crate::github::locator::{IssueNumber, PersonalAccessToken, RepoKey};
use crate::github::models::{ApiIssue, ApiPullRequest, ApiStatus, CommitStatus, TrackerItem};

use super::IssueTrackerGateway;
use super::client::build_octocrab_client;
use super::error_mapping::map_octocrab_error;

/// Timeout applied to each outbound call when none is configured.
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Octocrab-backed tracker gateway.
///
/// Each call is bounded by a timeout; a call that exceeds it fails with
/// [`TrackerError::Timeout`] just as a non-2xx response would.
pub struct OctocrabTrackerGateway {
    client: Octocrab,
    timeout: Duration,
}

impl OctocrabTrackerGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Builds a gateway for the given API base URL and optional token.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidUrl` when the base URI cannot be parsed or
    /// `TrackerError::Api` when Octocrab fails to construct a client.
    pub fn for_api_base(
        api_base: &Url,
        token: Option<&PersonalAccessToken>,
        timeout: Duration,
    ) -> Result<Self, TrackerError> {
        let octocrab = build_octocrab_client(token, api_base)?;
        Ok(Self::new(octocrab, timeout))
    }

    async fn bounded<T, F>(&self, operation: &str, call: F) -> Result<T, TrackerError>
    where
        F: Future<Output = Result<T, octocrab::Error>> + Send,
    {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result.map_err(|error| map_octocrab_error(operation, &error)),
            Err(_elapsed) => Err(TrackerError::Timeout {
                operation: operation.to_owned(),
                timeout_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            }),
        }
    }
}

#[async_trait]
impl IssueTrackerGateway for OctocrabTrackerGateway {
    async fn item(&self, key: &RepoKey, number: IssueNumber) -> Result<TrackerItem, TrackerError> {
        let route = key.issue_path(number);
        tracing::debug!("getting issue {route}");
        self.bounded(
            "issue",
            self.client.get::<ApiIssue, _, _>(route.as_str(), None::<&()>),
        )
        .await
        .map(ApiIssue::into)
    }

    async fn pull_request(&self, url: &str) -> Result<TrackerItem, TrackerError> {
        tracing::debug!("issue is a pull request, getting {url}");
        self.bounded(
            "pull request",
            self.client.get::<ApiPullRequest, _, _>(url, None::<&()>),
        )
        .await
        .map(ApiPullRequest::into)
    }

    async fn statuses(&self, url: &str) -> Result<Vec<CommitStatus>, TrackerError> {
        tracing::debug!("pull request is open, getting statuses from {url}");
        self.bounded(
            "statuses",
            self.client.get::<Vec<ApiStatus>, _, _>(url, None::<&()>),
        )
        .await
        .map(|statuses| statuses.into_iter().map(ApiStatus::into).collect())
    }
}
