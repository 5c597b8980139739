//! Resolution of one issue token into a summary line.
//!
//! A token moves through parse, issue fetch, optional pull request detail
//! fetch, and optional CI status fetch before it is formatted. Any step may
//! end in an [`ItemError`]; the CI status step never does, it only degrades
//! the state text.

use crate::github::{IssueTrackerGateway, RepoKey, TrackerError, TrackerItem};

use super::command::IssueToken;
use super::response::{ItemError, ResultLine};

const CI_UNAVAILABLE: &str = "unable to fetch CI status";

/// Type label shown at the start of a summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// A plain issue.
    Issue,
    /// A pull request.
    PullRequest,
}

impl ItemKind {
    /// Label used in the summary line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Issue => "Issue",
            Self::PullRequest => "Pull Request",
        }
    }
}

/// Resolves issue tokens against a tracker gateway.
pub struct ItemResolver<'client, Gateway>
where
    Gateway: IssueTrackerGateway + ?Sized,
{
    client: &'client Gateway,
}

impl<'client, Gateway> ItemResolver<'client, Gateway>
where
    Gateway: IssueTrackerGateway + ?Sized,
{
    /// Create a resolver using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Resolve one token. Never fails: every failure becomes an error line.
    pub async fn resolve(&self, key: &RepoKey, token: &IssueToken) -> ResultLine {
        match self.classify(key, token).await {
            Ok((kind, item)) => {
                let state = self.describe_state(kind, &item).await;
                ResultLine::Success(format_line(kind, token, &item, &state))
            }
            Err(error) => ResultLine::Error(error),
        }
    }

    async fn classify(
        &self,
        key: &RepoKey,
        token: &IssueToken,
    ) -> Result<(ItemKind, TrackerItem), ItemError> {
        let Some(number) = token.number() else {
            return Err(ItemError::InvalidNumber {
                token: token.as_str().to_owned(),
            });
        };

        let item = self.client.item(key, number).await.map_err(|error| {
            tracing::error!("got error from upstream for {key}#{number}: {error}");
            ItemError::UnknownIssue {
                token: token.as_str().to_owned(),
            }
        })?;

        if !item.is_pull_request {
            return Ok((ItemKind::Issue, item));
        }

        let detail = match item.pull_request_url.as_deref() {
            Some(url) => self.client.pull_request(url).await,
            None => Err(TrackerError::MissingField {
                operation: "issue".to_owned(),
                field: "pull_request.url".to_owned(),
            }),
        }
        .map_err(|error| {
            tracing::error!("got error from upstream for {key}#{number}: {error}");
            ItemError::PullRequestUnavailable {
                token: token.as_str().to_owned(),
            }
        })?;

        Ok((ItemKind::PullRequest, detail))
    }

    /// State text, enriched with merge and CI status for open pull requests.
    async fn describe_state(&self, kind: ItemKind, item: &TrackerItem) -> String {
        if kind != ItemKind::PullRequest || item.state != "open" {
            return item.state.clone();
        }

        match self.latest_ci_state(item).await {
            Ok(ci_state) => format!(
                "{state}, {negation}mergable, Travis: {ci_state}",
                state = item.state,
                negation = if item.mergeable == Some(true) {
                    ""
                } else {
                    "not "
                }
            ),
            Err(error) => {
                tracing::warn!("could not get CI information: {error}");
                format!("{state}{CI_UNAVAILABLE}", state = item.state)
            }
        }
    }

    async fn latest_ci_state(&self, item: &TrackerItem) -> Result<String, TrackerError> {
        let url = item
            .statuses_url
            .as_deref()
            .ok_or_else(|| TrackerError::MissingField {
                operation: "pull request".to_owned(),
                field: "_links.statuses.href".to_owned(),
            })?;

        self.client
            .statuses(url)
            .await?
            .into_iter()
            .next()
            .map(|status| status.state)
            .ok_or_else(|| TrackerError::MissingField {
                operation: "statuses".to_owned(),
                field: "a status entry".to_owned(),
            })
    }
}

/// The number is echoed as the user typed it, so `#007` stays `#007`.
fn format_line(kind: ItemKind, token: &IssueToken, item: &TrackerItem, state: &str) -> String {
    format!(
        " * [{label} #{number}]({url}) [{author}]({author_url}) ({state}): {title}",
        label = kind.label(),
        number = token.as_str(),
        url = item.html_url.as_deref().unwrap_or_default(),
        author = item.author.as_deref().unwrap_or_default(),
        author_url = item.author_url.as_deref().unwrap_or_default(),
        title = item.title.as_deref().unwrap_or_default(),
    )
}
