//! Slash-command webhook server entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use github_slash::config::{
    ConfigError, RepositoryDirectory, ServiceConfig, expand_verbosity_flags,
};
use github_slash::github::{OctocrabTrackerGateway, TrackerError};
use github_slash::server::{build_router, serve};
use github_slash::slash::SlashCommandHandler;
use ortho_config::OrthoConfig;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Failures that stop the service before or while serving.
#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to build GitHub client: {0}")]
    Gateway(#[from] TrackerError),

    #[error("failed to bind {address}: {message}")]
    Bind { address: String, message: String },

    #[error("server exited unexpectedly: {0}")]
    Serve(String),
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = load_config()?;
    init_tracing(&config);
    config.validate()?;

    let repos_path = config.repos_path();
    let directory = RepositoryDirectory::load(&repos_path)?;
    tracing::info!(
        "loaded {count} repositories from {repos_path}",
        count = directory.len()
    );

    let gateway = OctocrabTrackerGateway::for_api_base(
        &config.api_base()?,
        config.upstream_token().as_ref(),
        config.request_timeout()?,
    )?;

    let handler = SlashCommandHandler::new(
        Arc::new(directory),
        Arc::new(gateway),
        config.display_defaults(),
    );

    let bind_address = config.bind_address();
    let listener = TcpListener::bind(bind_address.as_str())
        .await
        .map_err(|error| StartupError::Bind {
            address: bind_address.clone(),
            message: error.to_string(),
        })?;
    tracing::info!("listening on {bind_address}");

    serve(listener, build_router(Arc::new(handler)))
        .await
        .map_err(|error| StartupError::Serve(error.to_string()))
}

/// Loads service settings from CLI, environment, and files. Counted `-v`
/// flags are folded into `--verbose N` first.
///
/// # Errors
///
/// Returns [`ConfigError::Load`] when ortho-config fails to parse arguments
/// or load configuration files.
fn load_config() -> Result<ServiceConfig, ConfigError> {
    let args = expand_verbosity_flags(std::env::args_os());
    ServiceConfig::load_from_iter(args).map_err(|error| ConfigError::Load {
        message: error.to_string(),
    })
}

fn init_tracing(config: &ServiceConfig) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(config.log_level().into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}
