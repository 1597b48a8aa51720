//! Authenticated HTTP core.
//!
//! Presents a plain request/response interface to the typed API modules
//! while transparently handling bearer-token authentication and a single
//! token-refresh-and-retry cycle on 401. The interceptor is explicit
//! middleware: a request transform (attach the current access token) and a
//! response transform (inspect the status, conditionally refresh and
//! resend) composed around one transport call - no hidden hook registry.
//!
//! # State machine per logical request
//!
//! ```text
//! Initial -> Sent -> Success (any non-401, returned unchanged)
//!                 -> Unauthorized
//!                      no refresh token  -> purge store, surface the 401
//!                      refresh fails     -> purge store, RefreshFailed
//!                      refresh succeeds  -> save pair, resend once;
//!                                           the resend's outcome is final
//! ```
//!
//! Each request carries its own [`RequestEnvelope`] with a private retry
//! flag; there is no shared retry state across requests. Two requests that
//! hit 401 at the same time will each refresh independently - the later
//! `save` wins in the token store. Callers needing single-flight refresh
//! must serialize around the client themselves. Cancellation is dropping
//! the returned future; every call honors the configured transport timeout.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use billfold_core::TokenPair;

use crate::cache::CacheValue;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::token_store::TokenStore;

/// Maximum response-body length kept in error values and logs.
const BODY_SNIPPET_LEN: usize = 200;

/// Catalog cache TTL.
const CACHE_TTL: Duration = Duration::from_secs(300);

/// The in-flight description of one HTTP call.
///
/// `retried` is scoped to the lifetime of this call: it flips to `true`
/// after the one permitted refresh, and a 401 on a retried envelope is
/// terminal.
#[derive(Debug)]
pub(crate) struct RequestEnvelope {
    method: Method,
    path: String,
    body: Option<serde_json::Value>,
    retried: bool,
}

impl RequestEnvelope {
    pub(crate) fn get(path: &str) -> Self {
        Self {
            method: Method::GET,
            path: path.to_string(),
            body: None,
            retried: false,
        }
    }

    pub(crate) fn post(path: &str, body: Option<serde_json::Value>) -> Self {
        Self {
            method: Method::POST,
            path: path.to_string(),
            body,
            retried: false,
        }
    }
}

/// Token endpoint response shape (`users/token/` and `users/token/refresh/`).
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access: String,
    pub refresh: String,
}

/// Client for the wallet backend API.
///
/// Cheap to clone; all clones share one connection pool, token store, and
/// catalog cache.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

pub(crate) struct ApiClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: Url,
    pub(crate) tokens: Arc<dyn TokenStore>,
    pub(crate) catalog_cache: Cache<String, CacheValue>,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &ClientConfig, tokens: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        let catalog_cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(CACHE_TTL)
            .build();

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                http,
                base_url: config.base_url.clone(),
                tokens,
                catalog_cache,
            }),
        })
    }

    pub(crate) fn inner(&self) -> &ApiClientInner {
        &self.inner
    }

    /// The token store backing this client.
    #[must_use]
    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.inner.tokens
    }

    // =========================================================================
    // Transport
    // =========================================================================

    /// Send one request with the current access token attached.
    async fn send(&self, envelope: &RequestEnvelope) -> Result<reqwest::Response, ApiError> {
        let url = self.inner.base_url.join(&envelope.path)?;
        let mut request = self.inner.http.request(envelope.method.clone(), url);

        // Attach the bearer credential when a session exists; otherwise the
        // request goes out unauthenticated.
        if let Some(access) = self.inner.tokens.access_token() {
            request = request.bearer_auth(access);
        }

        if let Some(body) = &envelope.body {
            request = request.json(body);
        }

        Ok(request.send().await?)
    }

    /// Execute a request with one-time refresh-and-retry on 401.
    ///
    /// Returns the final response whatever its status; side effects on the
    /// token store (save on refresh success, purge on auth failure) happen
    /// here. A refresh failure is the only path that returns `Err` before a
    /// response exists.
    pub(crate) async fn execute(
        &self,
        mut envelope: RequestEnvelope,
    ) -> Result<reqwest::Response, ApiError> {
        loop {
            let response = self.send(&envelope).await?;

            // Only 401 is interpreted here; everything else is the caller's.
            if response.status() != StatusCode::UNAUTHORIZED || envelope.retried {
                return Ok(response);
            }

            let Some(refresh) = self.inner.tokens.refresh_token() else {
                debug!(path = %envelope.path, "401 with no refresh token, signing out");
                self.inner.tokens.clear();
                return Ok(response);
            };

            // One cycle only, even if the resend comes back 401 again.
            envelope.retried = true;

            match self.refresh_tokens(&refresh).await {
                Ok(pair) => {
                    debug!(path = %envelope.path, "access token refreshed, retrying request");
                    self.inner.tokens.save(&pair);
                }
                Err(err) => {
                    warn!(path = %envelope.path, error = %err, "token refresh failed, signing out");
                    self.inner.tokens.clear();
                    return Err(ApiError::RefreshFailed(Box::new(err)));
                }
            }
        }
    }

    /// Exchange the refresh token for a new token pair.
    ///
    /// Deliberately bypasses [`Self::execute`]: the refresh endpoint is
    /// unauthenticated and must never trigger another refresh cycle.
    async fn refresh_tokens(&self, refresh: &str) -> Result<TokenPair, ApiError> {
        let url = self.inner.base_url.join("users/token/refresh/")?;
        let response = self
            .inner
            .http
            .post(url)
            .json(&serde_json::json!({ "refresh": refresh }))
            .send()
            .await?;

        let response = check_status(response).await?;
        let body: TokenResponse = response.json().await?;
        Ok(TokenPair::new(body.access, body.refresh))
    }

    // =========================================================================
    // JSON helpers for the typed API modules
    // =========================================================================

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(RequestEnvelope::get(path)).await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        let response = self.execute(RequestEnvelope::post(path, body)).await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }
}

/// Map non-success statuses to [`ApiError::Status`] with a truncated body.
pub(crate) async fn check_status(
    response: reqwest::Response,
) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let body: String = body.chars().take(BODY_SNIPPET_LEN).collect();
    debug!(status = %status, body = %body, "request failed");
    Err(ApiError::Status { status, body })
}
