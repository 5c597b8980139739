//! HTTP transport for the slash command.
//!
//! The chat platform calls `GET` or `POST /{org}/{repo}` with `token` and
//! `text` in the query string, a form-encoded body, or both. Query values
//! win over body values. Successful requests answer with the JSON reply;
//! rejected requests, unreadable parameters included, answer 400.

use std::io;
use std::sync::Arc;

use axum::Router;
use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::extract::{Form, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use serde::Deserialize;
use tokio::net::TcpListener;

use crate::config::ConfigProvider;
use crate::github::{IssueTrackerGateway, RepoKey};
use crate::slash::{ResponsePayload, SlashCommandHandler, SlashError, SlashParams};

/// Route of the slash-command webhook.
pub const SLASH_ENDPOINT: &str = "/{org}/{repo}";

/// Liveness probe route.
pub const HEALTH_ENDPOINT: &str = "/health";

/// Builds the router serving the slash command and health probe.
pub fn build_router<Provider, Gateway>(
    handler: Arc<SlashCommandHandler<Provider, Gateway>>,
) -> Router
where
    Provider: ConfigProvider + 'static,
    Gateway: IssueTrackerGateway + 'static,
{
    Router::new()
        .route(HEALTH_ENDPOINT, get(handle_health))
        .route(
            SLASH_ENDPOINT,
            get(handle_slash::<Provider, Gateway>).post(handle_slash::<Provider, Gateway>),
        )
        .with_state(handler)
}

/// Serves `router` on `listener` until Ctrl-C is received.
///
/// # Errors
///
/// Returns the I/O error that stopped the server.
pub async fn serve(listener: TcpListener, router: Router) -> io::Result<()> {
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {error}");
    }
}

#[expect(clippy::unused_async, reason = "axum handlers must be async")]
async fn handle_health() -> &'static str {
    "ok"
}

async fn handle_slash<Provider, Gateway>(
    State(handler): State<Arc<SlashCommandHandler<Provider, Gateway>>>,
    Path((org, repo)): Path<(String, String)>,
    query: Result<Query<RawParams>, QueryRejection>,
    body: Result<Form<RawParams>, FormRejection>,
) -> Result<Json<ResponsePayload>, SlashError>
where
    Provider: ConfigProvider + 'static,
    Gateway: IssueTrackerGateway + 'static,
{
    let key = RepoKey::new(&org, &repo);
    let params = read_params(&key, query, body)?;
    handler.handle(&key, &params).await.map(Json)
}

/// Parameters from a single source; absent keys stay `None`.
#[derive(Debug, Default, Deserialize)]
struct RawParams {
    token: Option<String>,
    text: Option<String>,
}

impl RawParams {
    /// Combines two sources, preferring values from `self`.
    fn prefer_over(self, fallback: Self) -> SlashParams {
        SlashParams {
            token: self.token.or(fallback.token).unwrap_or_default(),
            text: self.text.or(fallback.text).unwrap_or_default(),
        }
    }
}

/// Merges query and body parameters. A body that is not form-encoded is
/// ignored; any other extraction failure rejects the request.
fn read_params(
    key: &RepoKey,
    query: Result<Query<RawParams>, QueryRejection>,
    body: Result<Form<RawParams>, FormRejection>,
) -> Result<SlashParams, SlashError> {
    let Query(from_query) = query.map_err(|rejection| malformed(key, &rejection.body_text()))?;
    let from_body = match body {
        Ok(Form(params)) => params,
        Err(FormRejection::InvalidFormContentType(_)) => RawParams::default(),
        Err(rejection) => return Err(malformed(key, &rejection.body_text())),
    };
    Ok(from_query.prefer_over(from_body))
}

fn malformed(key: &RepoKey, message: &str) -> SlashError {
    tracing::error!("unreadable parameters for {key}: {message}");
    SlashError::MalformedRequest {
        repository: key.to_string(),
        message: message.to_owned(),
    }
}

impl IntoResponse for SlashError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, "Bad Request").into_response()
    }
}

#[cfg(test)]
mod tests;
