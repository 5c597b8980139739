//! Octocrab client construction helpers for gateway implementations.

use http::Uri;
use octocrab::Octocrab;
use octocrab::service::middleware::retry::RetryConfig;
use url::Url;

use crate::github::error::TrackerError;
use crate::github::locator::PersonalAccessToken;

use super::error_mapping::map_octocrab_error;

/// Builds an Octocrab client for the API base URL, authenticated when a
/// token is supplied and anonymous otherwise.
///
/// Octocrab's retry layer is switched off: every call is a single attempt.
///
/// # Errors
///
/// Returns `TrackerError::InvalidUrl` when the base URI cannot be parsed or
/// `TrackerError::Api` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(
    token: Option<&PersonalAccessToken>,
    api_base: &Url,
) -> Result<Octocrab, TrackerError> {
    let base_uri: Uri = api_base
        .as_str()
        .parse::<Uri>()
        .map_err(|error| TrackerError::InvalidUrl(error.to_string()))?;

    let builder = match token {
        Some(personal_token) => Octocrab::builder().personal_token(personal_token.value()),
        None => Octocrab::builder(),
    };

    builder
        .add_retry_config(RetryConfig::None)
        .base_uri(base_uri)
        .map_err(|error| TrackerError::Api {
            message: format!("build client failed: {error}"),
        })?
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
