//! CLI command implementations.

pub mod account;
pub mod shop;
pub mod wallet;

use std::sync::Arc;

use thiserror::Error;

use billfold_client::{ApiClient, ApiError, ClientConfig, ConfigError, InMemoryTokenStore};

/// Errors that can occur while running CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Client configuration error.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Invalid amount argument.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

/// Build an unauthenticated client from the environment.
pub(crate) fn client() -> Result<ApiClient, CliError> {
    let config = ClientConfig::from_env()?;
    Ok(ApiClient::new(
        &config,
        Arc::new(InMemoryTokenStore::new()),
    )?)
}

/// Build a client and sign in with `BILLFOLD_USERNAME`/`BILLFOLD_PASSWORD`.
///
/// Tokens are held in memory for the lifetime of this invocation; the
/// client refreshes them transparently if the access token expires
/// mid-command.
pub(crate) async fn authenticated_client() -> Result<ApiClient, CliError> {
    let username = std::env::var("BILLFOLD_USERNAME")
        .map_err(|_| CliError::MissingEnvVar("BILLFOLD_USERNAME"))?;
    let password = std::env::var("BILLFOLD_PASSWORD")
        .map_err(|_| CliError::MissingEnvVar("BILLFOLD_PASSWORD"))?;

    let client = client()?;
    client.login(&username, &password).await?;
    Ok(client)
}
