//! Request orchestration for the slash command.

use std::sync::Arc;

use crate::config::{ConfigProvider, DisplayDefaults};
use crate::github::{IssueTrackerGateway, RepoKey};

use super::command::{SlashParams, parse_issue_tokens};
use super::error::SlashError;
use super::resolver::ItemResolver;
use super::response::ResponsePayload;

/// Authenticates a request, resolves every issue token in order, and builds
/// the aggregate reply.
pub struct SlashCommandHandler<Provider, Gateway>
where
    Provider: ConfigProvider + ?Sized,
    Gateway: IssueTrackerGateway + ?Sized,
{
    provider: Arc<Provider>,
    gateway: Arc<Gateway>,
    defaults: DisplayDefaults,
}

impl<Provider, Gateway> SlashCommandHandler<Provider, Gateway>
where
    Provider: ConfigProvider + ?Sized,
    Gateway: IssueTrackerGateway + ?Sized,
{
    /// Create a handler over a settings provider and tracker gateway.
    #[must_use]
    pub const fn new(
        provider: Arc<Provider>,
        gateway: Arc<Gateway>,
        defaults: DisplayDefaults,
    ) -> Self {
        Self {
            provider,
            gateway,
            defaults,
        }
    }

    /// Handle one slash-command request for `key`.
    ///
    /// Tokens are resolved sequentially and every token is attempted even
    /// when earlier ones fail.
    ///
    /// # Errors
    ///
    /// Returns [`SlashError`] when the repository is not configured, the
    /// shared secret does not match, or the command names no issues. No
    /// outbound call is made in those cases.
    pub async fn handle(
        &self,
        key: &RepoKey,
        params: &SlashParams,
    ) -> Result<ResponsePayload, SlashError> {
        tracing::debug!(
            repository = %key,
            text = %params.text,
            has_token = !params.token.is_empty(),
            "got a slash command request"
        );

        let Some(settings) = self.provider.lookup(key) else {
            tracing::error!("no configuration found for {key}");
            return Err(SlashError::MissingConfiguration {
                repository: key.to_string(),
            });
        };

        if params.token != settings.token {
            tracing::error!("token in request incorrect for {key}");
            return Err(SlashError::TokenMismatch {
                repository: key.to_string(),
            });
        }

        let tokens = parse_issue_tokens(&params.text);
        if tokens.is_empty() {
            tracing::error!("empty command for {key}");
            return Err(SlashError::EmptyCommand {
                repository: key.to_string(),
            });
        }

        let resolver = ItemResolver::new(self.gateway.as_ref());
        let mut lines = Vec::with_capacity(tokens.len());
        for token in &tokens {
            lines.push(resolver.resolve(key, token).await);
        }

        let (username, icon_url) = self.defaults.resolve(settings);
        let payload = ResponsePayload::assemble(lines, username, icon_url);
        if payload.has_errors() {
            tracing::info!(text = %payload.text, "had errors, sending response for {key}");
        } else {
            tracing::info!(text = %payload.text, "done, sending response for {key}");
        }
        Ok(payload)
    }
}
