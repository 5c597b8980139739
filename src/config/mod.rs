//! Service configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified settings struct that merges values from
//! command-line arguments, environment variables, and configuration files
//! using ortho-config's layered approach. Per-repository secrets live in a
//! separate file, see [`RepositoryDirectory`].
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in service defaults
//! 2. **Configuration file** – `.github-slash.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `GITHUB_SLASH_PORT`, `GITHUB_SLASH_ADDRESS`,
//!    and so on
//! 4. **Command-line arguments** – `--port`/`-p`, `--address`/`-a`, `-vv`, ...
//!
//! # Configuration File
//!
//! ```toml
//! address = "0.0.0.0"
//! port = 8080
//! repos_file = "/etc/github-slash/repos.toml"
//! request_timeout_ms = 5000
//! verbose = 1
//! ```

mod args;
mod error;
mod repositories;

pub use args::expand_verbosity_flags;
pub use error::ConfigError;
pub use repositories::{ConfigProvider, DisplayDefaults, RepoSettings, RepositoryDirectory};

use std::time::Duration;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;
use url::Url;

use crate::github::{DEFAULT_TIMEOUT_MS, PersonalAccessToken};

const DEFAULT_ADDRESS: &str = "localhost";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_REPOS_FILE: &str = "./github-slash.toml";
const DEFAULT_API_URL: &str = "https://api.github.com";

/// Fallback display name when a repository entry sets none.
pub const DEFAULT_USERNAME: &str = "GitHub";

/// Fallback display icon when a repository entry sets none.
pub const DEFAULT_ICON_URL: &str = "https://octodex.github.com/images/original.png";

/// Service settings supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `GITHUB_SLASH_ADDRESS` or `--address`: Interface to listen on
/// - `GITHUB_SLASH_PORT` or `--port`: Port to listen on
/// - `GITHUB_SLASH_REPOS_FILE` or `--repos-file`: Per-repository settings
/// - `GITHUB_SLASH_API_URL` or `--api-url`: GitHub API base URL
/// - `GITHUB_SLASH_GITHUB_TOKEN` or `--github-token`: Upstream token
///
/// # Example
///
/// ```no_run
/// use github_slash::ServiceConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = ServiceConfig::load().expect("failed to load configuration");
/// config.validate().expect("configuration should be valid");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "GITHUB_SLASH",
    discovery(
        dotfile_name = ".github-slash.toml",
        config_file_name = "github-slash.toml",
        app_name = "github-slash"
    )
)]
pub struct ServiceConfig {
    /// IP address or hostname to listen on.
    #[ortho_config(cli_short = 'a')]
    pub address: String,

    /// Port to listen on.
    #[ortho_config(cli_short = 'p')]
    pub port: u16,

    /// Path of the per-repository settings file.
    #[ortho_config(cli_short = 'c')]
    pub repos_file: String,

    /// Base URL of the GitHub REST API.
    ///
    /// Override for GitHub Enterprise (`https://ghe.example.com/api/v3`).
    #[ortho_config(cli_short = 'u')]
    pub api_url: String,

    /// Personal access token used for upstream calls.
    ///
    /// Calls are anonymous when unset.
    #[ortho_config(cli_short = 't')]
    pub github_token: Option<String>,

    /// Timeout for each outbound call, in milliseconds.
    #[ortho_config(cli_short = 'T')]
    pub request_timeout_ms: u64,

    /// Log verbosity: 0 warns only, 1 adds info, 2 or more adds debug.
    ///
    /// Given as `--verbose N`, or counted as `-v`/`-vv` once the arguments
    /// pass through [`expand_verbosity_flags`]. `RUST_LOG` takes precedence
    /// when set.
    #[ortho_config(cli_short = 'v')]
    pub verbose: u8,

    /// Display name used when a repository entry sets none.
    #[ortho_config(cli_short = 'U')]
    pub default_username: String,

    /// Display icon used when a repository entry sets none.
    #[ortho_config(cli_short = 'I')]
    pub default_icon_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_owned(),
            port: DEFAULT_PORT,
            repos_file: DEFAULT_REPOS_FILE.to_owned(),
            api_url: DEFAULT_API_URL.to_owned(),
            github_token: None,
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
            verbose: 0,
            default_username: DEFAULT_USERNAME.to_owned(),
            default_icon_url: DEFAULT_ICON_URL.to_owned(),
        }
    }
}

impl ServiceConfig {
    /// Checks the settings that would otherwise fail only once serving.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the port or timeout is zero or
    /// the API URL is not absolute.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Invalid {
                message: "port must be non-zero".to_owned(),
            });
        }
        self.request_timeout()?;
        self.api_base()?;
        Ok(())
    }

    /// Address and port in the form accepted by `TcpListener::bind`.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }

    /// Path of the per-repository settings file.
    #[must_use]
    pub fn repos_path(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(self.repos_file.as_str())
    }

    /// Parsed API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `api_url` is not an absolute URL.
    pub fn api_base(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.api_url).map_err(|error| ConfigError::Invalid {
            message: format!("api_url '{}' is invalid: {error}", self.api_url),
        })
    }

    /// Per-call timeout for outbound requests.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the timeout is zero.
    pub fn request_timeout(&self) -> Result<Duration, ConfigError> {
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                message: "request_timeout_ms must be non-zero".to_owned(),
            });
        }
        Ok(Duration::from_millis(self.request_timeout_ms))
    }

    /// Upstream token, if a non-blank one is configured.
    #[must_use]
    pub fn upstream_token(&self) -> Option<PersonalAccessToken> {
        self.github_token.as_deref().and_then(PersonalAccessToken::new)
    }

    /// Display identity used when a repository entry omits its own.
    #[must_use]
    pub fn display_defaults(&self) -> DisplayDefaults {
        DisplayDefaults {
            username: self.default_username.clone(),
            icon_url: self.default_icon_url.clone(),
        }
    }

    /// Log level implied by `verbose`.
    #[must_use]
    pub const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            _ => LevelFilter::DEBUG,
        }
    }
}

#[cfg(test)]
mod tests;
