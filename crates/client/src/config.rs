//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `BILLFOLD_API_BASE_URL` - Base URL of the wallet backend
//!   (e.g., `https://api.example.com/`)
//!
//! ## Optional
//! - `BILLFOLD_API_TIMEOUT_SECS` - Per-request timeout (default: 10)

use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL all request paths are joined onto.
    pub base_url: Url,
    /// Applied to every request, including the refresh call and the resend.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration with the default 10-second timeout.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `base_url` is not a valid URL.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = parse_base_url(base_url)
            .map_err(|e| ConfigError::InvalidEnvVar("base_url".to_string(), e))?;
        Ok(Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = std::env::var("BILLFOLD_API_BASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("BILLFOLD_API_BASE_URL".to_string()))?;
        let base_url = parse_base_url(&base_url)
            .map_err(|e| ConfigError::InvalidEnvVar("BILLFOLD_API_BASE_URL".to_string(), e))?;

        let timeout_secs = match std::env::var("BILLFOLD_API_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("BILLFOLD_API_TIMEOUT_SECS".to_string(), e.to_string())
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Parse and normalize a base URL.
///
/// `Url::join` drops the last path segment unless the base ends with a
/// slash, so one is appended here; request paths are then always relative.
fn parse_base_url(raw: &str) -> Result<Url, String> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };

    let url = Url::parse(&normalized).map_err(|e| e.to_string())?;
    if url.cannot_be_a_base() {
        return Err("URL cannot be a base".to_string());
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_trailing_slash_to_base_url() {
        let config = ClientConfig::new("https://api.example.com/v1").expect("valid");
        assert_eq!(config.base_url.as_str(), "https://api.example.com/v1/");
    }

    #[test]
    fn joins_paths_without_dropping_segments() {
        let config = ClientConfig::new("https://api.example.com/v1").expect("valid");
        let joined = config.base_url.join("users/me/").expect("join");
        assert_eq!(joined.as_str(), "https://api.example.com/v1/users/me/");
    }

    #[test]
    fn default_timeout_is_ten_seconds() {
        let config = ClientConfig::new("https://api.example.com").expect("valid");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn rejects_invalid_urls() {
        assert!(ClientConfig::new("not a url").is_err());
    }
}
