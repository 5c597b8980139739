//! Per-repository shared secrets and display identity.
//!
//! The directory is a TOML document with one table per repository under the
//! `github-slash` namespace:
//!
//! ```toml
//! [github-slash."octo/repo"]
//! token = "shared-secret"
//! username = "Octo Bot"
//! icon_url = "https://example.com/octo.png"
//! ```
//!
//! Keys are lower-cased on load and on lookup.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;

use camino::Utf8Path;
use serde::Deserialize;

use super::error::ConfigError;
use crate::github::RepoKey;

/// Settings for one repository.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct RepoSettings {
    /// Shared secret the chat platform sends as the `token` parameter.
    pub token: String,
    /// Display name for responses; falls back to the service default.
    #[serde(default)]
    pub username: Option<String>,
    /// Display icon for responses; falls back to the service default.
    #[serde(default)]
    pub icon_url: Option<String>,
}

impl fmt::Debug for RepoSettings {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RepoSettings")
            .field("token", &"***")
            .field("username", &self.username)
            .field("icon_url", &self.icon_url)
            .finish()
    }
}

/// Display identity used when a repository entry omits its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayDefaults {
    /// Fallback display name.
    pub username: String,
    /// Fallback display icon URL.
    pub icon_url: String,
}

impl Default for DisplayDefaults {
    fn default() -> Self {
        Self {
            username: super::DEFAULT_USERNAME.to_owned(),
            icon_url: super::DEFAULT_ICON_URL.to_owned(),
        }
    }
}

impl DisplayDefaults {
    /// Resolves the display name and icon for a repository, preferring the
    /// repository's own values.
    #[must_use]
    pub fn resolve(&self, settings: &RepoSettings) -> (String, String) {
        let username = settings
            .username
            .clone()
            .unwrap_or_else(|| self.username.clone());
        let icon_url = settings
            .icon_url
            .clone()
            .unwrap_or_else(|| self.icon_url.clone());
        (username, icon_url)
    }
}

/// Source of per-repository settings, read-only once serving starts.
pub trait ConfigProvider: Send + Sync {
    /// Looks up the settings for a repository, if any are configured.
    fn lookup(&self, key: &RepoKey) -> Option<&RepoSettings>;
}

#[derive(Debug, Default, Deserialize)]
struct RepositoryFile {
    #[serde(rename = "github-slash", default)]
    repositories: HashMap<String, RepoSettings>,
}

/// In-memory repository directory loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct RepositoryDirectory {
    entries: HashMap<String, RepoSettings>,
}

impl RepositoryDirectory {
    /// Builds a directory from `(org/repo, settings)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a key is not `org/repo` or a
    /// token is blank.
    pub fn from_entries<I, K>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, RepoSettings)>,
        K: AsRef<str>,
    {
        let mut directory = Self::default();
        for (name, settings) in entries {
            directory.insert(name.as_ref(), settings)?;
        }
        Ok(directory)
    }

    /// Parses a directory from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or a table without a
    /// `token`, and [`ConfigError::Invalid`] for bad keys or blank tokens.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let file: RepositoryFile = toml::from_str(text).map_err(|error| ConfigError::Parse {
            message: error.to_string(),
        })?;
        Self::from_entries(file.repositories)
    }

    /// Reads and parses the directory file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] when the file does not exist,
    /// [`ConfigError::Io`] when it cannot be read, and the errors of
    /// [`Self::from_toml_str`] for its contents.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|error| {
            if error.kind() == io::ErrorKind::NotFound {
                ConfigError::MissingFile {
                    path: path.to_string(),
                }
            } else {
                ConfigError::Io {
                    path: path.to_string(),
                    message: error.to_string(),
                }
            }
        })?;
        Self::from_toml_str(&text)
    }

    /// Number of configured repositories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no repository is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, name: &str, settings: RepoSettings) -> Result<(), ConfigError> {
        let Some((owner, repo)) = name.split_once('/') else {
            return Err(ConfigError::Invalid {
                message: format!("repository key '{name}' must be org/repo"),
            });
        };
        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return Err(ConfigError::Invalid {
                message: format!("repository key '{name}' must be org/repo"),
            });
        }
        if settings.token.trim().is_empty() {
            return Err(ConfigError::Invalid {
                message: format!("repository '{name}' has a blank token"),
            });
        }
        self.entries
            .insert(RepoKey::new(owner, repo).config_key(), settings);
        Ok(())
    }
}

impl ConfigProvider for RepositoryDirectory {
    fn lookup(&self, key: &RepoKey) -> Option<&RepoSettings> {
        self.entries.get(&key.config_key())
    }
}
