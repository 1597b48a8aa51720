//! Authentication token pair.

use secrecy::{ExposeSecret, SecretString};

/// An access/refresh token pair issued by the backend.
///
/// Both tokens are opaque bearer strings. The pair is owned by a token
/// store; nothing else should hold onto a token beyond the lifetime of a
/// single request.
///
/// Implements `Debug` manually to redact both tokens.
#[derive(Clone)]
pub struct TokenPair {
    access: SecretString,
    refresh: SecretString,
}

impl TokenPair {
    /// Create a token pair from the raw token strings.
    #[must_use]
    pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            access: SecretString::from(access.into()),
            refresh: SecretString::from(refresh.into()),
        }
    }

    /// The short-lived access token, sent as a bearer credential.
    #[must_use]
    pub fn access(&self) -> &str {
        self.access.expose_secret()
    }

    /// The longer-lived refresh token, exchanged for a new pair.
    #[must_use]
    pub fn refresh(&self) -> &str {
        self.refresh.expose_secret()
    }
}

impl std::fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPair")
            .field("access", &"[REDACTED]")
            .field("refresh", &"[REDACTED]")
            .finish()
    }
}
