//! Token storage seam.
//!
//! The token pair is exclusively owned by a [`TokenStore`]; the HTTP client
//! reads and writes through this interface and never holds a token beyond
//! the lifetime of a single retry. A durable OS-keychain store is an
//! external implementation of the same four operations.

use std::sync::RwLock;

use billfold_core::TokenPair;

/// Storage for the access/refresh token pair.
///
/// Implementations must be cheap and non-blocking; the client reads the
/// access token before every outgoing request. All four operations must be
/// individually atomic - under concurrent refreshes the later `save` wins.
pub trait TokenStore: Send + Sync {
    /// Persist a new token pair, replacing any existing one.
    fn save(&self, tokens: &TokenPair);

    /// Current access token, if a session exists.
    fn access_token(&self) -> Option<String>;

    /// Current refresh token, if a session exists.
    fn refresh_token(&self) -> Option<String>;

    /// Delete both tokens (logout, or forced sign-out after auth failure).
    fn clear(&self);
}

/// Process-local token store.
///
/// Tokens live for the lifetime of the process; nothing is persisted across
/// restarts.
#[derive(Default)]
pub struct InMemoryTokenStore {
    tokens: RwLock<Option<TokenPair>>,
}

impl InMemoryTokenStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with a token pair.
    #[must_use]
    pub fn with_tokens(tokens: TokenPair) -> Self {
        Self {
            tokens: RwLock::new(Some(tokens)),
        }
    }
}

impl TokenStore for InMemoryTokenStore {
    fn save(&self, tokens: &TokenPair) {
        if let Ok(mut guard) = self.tokens.write() {
            *guard = Some(tokens.clone());
        }
    }

    fn access_token(&self) -> Option<String> {
        self.tokens
            .read()
            .ok()?
            .as_ref()
            .map(|pair| pair.access().to_string())
    }

    fn refresh_token(&self) -> Option<String> {
        self.tokens
            .read()
            .ok()?
            .as_ref()
            .map(|pair| pair.refresh().to_string())
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.tokens.write() {
            *guard = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let store = InMemoryTokenStore::new();
        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());
    }

    #[test]
    fn save_replaces_the_pair() {
        let store = InMemoryTokenStore::new();
        store.save(&TokenPair::new("a1", "r1"));
        store.save(&TokenPair::new("a2", "r2"));

        assert_eq!(store.access_token().as_deref(), Some("a2"));
        assert_eq!(store.refresh_token().as_deref(), Some("r2"));
    }

    #[test]
    fn clear_deletes_both_tokens() {
        let store = InMemoryTokenStore::with_tokens(TokenPair::new("a", "r"));
        store.clear();

        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());
    }
}
