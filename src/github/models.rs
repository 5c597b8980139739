//! Data models for issues, pull requests, and commit statuses.
//!
//! Types prefixed with `Api` are internal deserialisation targets that
//! convert into the public domain types. Only the fields the slash command
//! renders are kept.

use serde::Deserialize;

/// An issue or pull request as resolved from the tracker.
///
/// Issue payloads and pull request detail payloads both convert into this
/// type; the link fields tell the resolver which follow-up fetches apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerItem {
    /// Issue or pull request number.
    pub number: u64,
    /// HTML URL for displaying to a user.
    pub html_url: Option<String>,
    /// Title of the item.
    pub title: Option<String>,
    /// State (e.g. open, closed).
    pub state: String,
    /// Author login if present.
    pub author: Option<String>,
    /// HTML URL of the author's profile.
    pub author_url: Option<String>,
    /// Whether the item is a pull request rather than a plain issue.
    pub is_pull_request: bool,
    /// Pull request detail resource, linked from PR issue payloads.
    pub pull_request_url: Option<String>,
    /// Commit statuses resource for the PR head, from the detail payload.
    pub statuses_url: Option<String>,
    /// Whether GitHub considers the PR mergeable. `None` while GitHub is
    /// still computing it.
    pub mergeable: Option<bool>,
}

/// One entry of a commit status list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitStatus {
    /// Combined CI state such as `success`, `pending`, or `failure`.
    pub state: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiIssue {
    pub(super) number: u64,
    pub(super) html_url: Option<String>,
    pub(super) title: Option<String>,
    pub(super) state: String,
    pub(super) user: Option<ApiUser>,
    pub(super) pull_request: Option<ApiPullRequestLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiPullRequestLink {
    pub(super) url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiPullRequest {
    pub(super) number: u64,
    pub(super) url: Option<String>,
    pub(super) html_url: Option<String>,
    pub(super) title: Option<String>,
    pub(super) state: String,
    pub(super) user: Option<ApiUser>,
    pub(super) mergeable: Option<bool>,
    #[serde(rename = "_links")]
    pub(super) links: Option<ApiPullRequestLinks>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiPullRequestLinks {
    pub(super) statuses: Option<ApiHref>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiHref {
    pub(super) href: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiUser {
    pub(super) login: Option<String>,
    pub(super) html_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiStatus {
    pub(super) state: String,
}

fn split_user(user: Option<ApiUser>) -> (Option<String>, Option<String>) {
    user.map_or((None, None), |api_user| (api_user.login, api_user.html_url))
}

impl From<ApiIssue> for TrackerItem {
    fn from(value: ApiIssue) -> Self {
        let (author, author_url) = split_user(value.user);
        let is_pull_request = value.pull_request.is_some();
        Self {
            number: value.number,
            html_url: value.html_url,
            title: value.title,
            state: value.state,
            author,
            author_url,
            is_pull_request,
            pull_request_url: value.pull_request.and_then(|link| link.url),
            statuses_url: None,
            mergeable: None,
        }
    }
}

impl From<ApiPullRequest> for TrackerItem {
    fn from(value: ApiPullRequest) -> Self {
        let (author, author_url) = split_user(value.user);
        let statuses_url = value
            .links
            .and_then(|links| links.statuses)
            .and_then(|statuses| statuses.href);
        Self {
            number: value.number,
            html_url: value.html_url,
            title: value.title,
            state: value.state,
            author,
            author_url,
            is_pull_request: true,
            pull_request_url: value.url,
            statuses_url,
            mergeable: value.mergeable,
        }
    }
}

impl From<ApiStatus> for CommitStatus {
    fn from(value: ApiStatus) -> Self {
        Self { state: value.state }
    }
}
