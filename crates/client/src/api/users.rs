//! Authentication and account endpoints (`users/`).

use tracing::{debug, instrument};

use billfold_core::TokenPair;

use crate::error::ApiError;
use crate::http::{ApiClient, TokenResponse};
use crate::types::{NewUser, User};

impl ApiClient {
    /// Authenticate with username and password (`POST users/token/`).
    ///
    /// On success the returned token pair is persisted to the token store,
    /// so subsequent calls are authenticated automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are rejected or the request
    /// fails; the token store is left untouched on failure.
    #[instrument(skip(self, password), fields(username = %username))]
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair, ApiError> {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });

        // Deliberately not routed through the authenticated path: a stale
        // access token must not be attached, and a 401 here means bad
        // credentials, not an expired session.
        let url = self.inner().base_url.join("users/token/")?;
        let response = self.inner().http.post(url).json(&body).send().await?;
        let response = crate::http::check_status(response).await?;

        let tokens: TokenResponse = response.json().await?;
        let pair = TokenPair::new(tokens.access, tokens.refresh);
        self.inner().tokens.save(&pair);
        debug!("login succeeded, tokens persisted");
        Ok(pair)
    }

    /// Register a new account (`POST users/register/`).
    ///
    /// # Errors
    ///
    /// Returns an error if registration is rejected or the request fails.
    #[instrument(skip(self, new_user), fields(username = %new_user.username))]
    pub async fn register(&self, new_user: &NewUser) -> Result<User, ApiError> {
        self.post_json("users/register/", Some(serde_json::to_value(new_user)?))
            .await
    }

    /// Fetch the current user's details (`GET users/me/`).
    ///
    /// # Errors
    ///
    /// Returns an error if the session is invalid or the request fails.
    #[instrument(skip(self))]
    pub async fn me(&self) -> Result<User, ApiError> {
        self.get_json("users/me/").await
    }

    /// Sign out locally by purging the token store.
    ///
    /// The backend keeps no session state for bearer tokens, so logout is
    /// purely a client-side purge.
    pub fn logout(&self) {
        self.inner().tokens.clear();
        debug!("tokens purged");
    }
}
