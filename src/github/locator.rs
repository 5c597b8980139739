//! Identity wrappers for the repository and issue being looked up.

use std::fmt;

/// Repository owner (organisation or user) taken from the request path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    /// Wraps an owner segment.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_owned())
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryName(String);

impl RepositoryName {
    /// Wraps a repository segment.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_owned())
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Identifies both the configuration entry and the upstream repository for
/// one slash-command request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoKey {
    owner: RepositoryOwner,
    repository: RepositoryName,
}

impl RepoKey {
    /// Builds a key from the `{org}/{repo}` path segments.
    #[must_use]
    pub fn new(owner: &str, repository: &str) -> Self {
        Self {
            owner: RepositoryOwner::new(owner),
            repository: RepositoryName::new(repository),
        }
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    /// Key under which the repository directory stores this repository.
    ///
    /// Always lower-cased so that lookups ignore the casing used in the
    /// request path.
    #[must_use]
    pub fn config_key(&self) -> String {
        format!(
            "github-slash.{owner}/{repo}",
            owner = self.owner.as_str(),
            repo = self.repository.as_str()
        )
        .to_lowercase()
    }

    /// API path for an issue (or pull request viewed as an issue).
    #[must_use]
    pub fn issue_path(&self, number: IssueNumber) -> String {
        format!(
            "/repos/{owner}/{repo}/issues/{number}",
            owner = self.owner.as_str(),
            repo = self.repository.as_str(),
            number = number.get()
        )
    }
}

impl fmt::Display for RepoKey {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{owner}/{repo}",
            owner = self.owner.as_str(),
            repo = self.repository.as_str()
        )
    }
}

/// Issue or pull request number. Zero is accepted here and left for GitHub
/// to reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IssueNumber(u64);

impl IssueNumber {
    /// Wraps a raw number.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for IssueNumber {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// Returns `None` for blank input so that an unset token in configuration
    /// means anonymous access.
    #[must_use]
    pub fn new(token: impl AsRef<str>) -> Option<Self> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl fmt::Debug for PersonalAccessToken {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("PersonalAccessToken(***)")
    }
}
