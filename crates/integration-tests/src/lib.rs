//! Shared fixtures for Billfold integration tests.
//!
//! Tests run the real `ApiClient` against a `wiremock` server; no backend
//! is required.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use billfold_client::{ApiClient, ClientConfig, InMemoryTokenStore};
use billfold_core::TokenPair;

/// Build a client pointed at a mock server, sharing the given token store.
///
/// # Panics
///
/// Panics if the mock server URI is not a valid base URL.
#[must_use]
pub fn client_for(uri: &str, store: &Arc<InMemoryTokenStore>) -> ApiClient {
    let config = ClientConfig::new(uri).expect("mock server URI is a valid base URL");
    let store: Arc<dyn billfold_client::TokenStore> = Arc::clone(store) as _;
    ApiClient::new(&config, store).expect("client builds")
}

/// A token store holding the given pair, as after a successful login.
#[must_use]
pub fn signed_in_store(access: &str, refresh: &str) -> Arc<InMemoryTokenStore> {
    Arc::new(InMemoryTokenStore::with_tokens(TokenPair::new(
        access, refresh,
    )))
}

/// An empty token store, as before any login.
#[must_use]
pub fn signed_out_store() -> Arc<InMemoryTokenStore> {
    Arc::new(InMemoryTokenStore::new())
}
