//! The 401 refresh-and-retry state machine, exercised end to end against a
//! mock backend with exact call-count expectations.

use billfold_client::TokenStore;
use billfold_integration_tests::{client_for, signed_in_store, signed_out_store};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn user_body() -> serde_json::Value {
    serde_json::json!({ "id": "u-1", "username": "customer" })
}

fn token_body(access: &str, refresh: &str) -> serde_json::Value {
    serde_json::json!({ "access": access, "refresh": refresh })
}

#[tokio::test]
async fn expired_token_triggers_one_refresh_and_one_resend() {
    let server = MockServer::start().await;

    // The stale token is rejected exactly once.
    Mock::given(method("GET"))
        .and(path("/users/me/"))
        .and(header("authorization", "Bearer stale"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/users/token/refresh/"))
        .and(body_json(serde_json::json!({ "refresh": "refresh-1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("fresh", "refresh-2")))
        .expect(1)
        .mount(&server)
        .await;

    // The resend carries the refreshed token and succeeds.
    Mock::given(method("GET"))
        .and(path("/users/me/"))
        .and(header("authorization", "Bearer fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_body()))
        .expect(1)
        .mount(&server)
        .await;

    let store = signed_in_store("stale", "refresh-1");
    let client = client_for(&server.uri(), &store);

    let user = client.me().await.expect("resend's response is returned");
    assert_eq!(user.username, "customer");

    // The new pair was persisted before the resend.
    assert_eq!(store.access_token().as_deref(), Some("fresh"));
    assert_eq!(store.refresh_token().as_deref(), Some("refresh-2"));
}

#[tokio::test]
async fn second_401_after_refresh_is_terminal() {
    let server = MockServer::start().await;

    // Both the original send and the resend are rejected.
    Mock::given(method("GET"))
        .and(path("/users/me/"))
        .respond_with(ResponseTemplate::new(401))
        .expect(2)
        .mount(&server)
        .await;

    // Exactly one refresh, never two.
    Mock::given(method("POST"))
        .and(path("/users/token/refresh/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("fresh", "refresh-2")))
        .expect(1)
        .mount(&server)
        .await;

    let store = signed_in_store("stale", "refresh-1");
    let client = client_for(&server.uri(), &store);

    let err = client.me().await.expect_err("second 401 surfaces");
    assert_eq!(err.status().map(|s| s.as_u16()), Some(401));
    assert!(err.is_auth_error());
}

#[tokio::test]
async fn missing_refresh_token_surfaces_original_401_without_refreshing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/me/"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/users/token/refresh/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let store = signed_out_store();
    let client = client_for(&server.uri(), &store);

    let err = client.me().await.expect_err("401 surfaces");
    assert_eq!(err.status().map(|s| s.as_u16()), Some(401));

    // Store is purged (was already empty; must stay that way).
    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());
}

#[tokio::test]
async fn failed_refresh_purges_tokens_and_propagates_refresh_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/me/"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/users/token/refresh/"))
        .respond_with(
            ResponseTemplate::new(401).set_body_string("token blacklisted"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = signed_in_store("stale", "revoked");
    let client = client_for(&server.uri(), &store);

    let err = client.me().await.expect_err("refresh failure propagates");
    assert!(matches!(err, billfold_client::ApiError::RefreshFailed(_)));
    assert!(err.is_auth_error());

    // Forced sign-out: no half-authenticated state left behind.
    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());
}

#[tokio::test]
async fn non_401_errors_pass_through_without_refresh_or_resend() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wallets/me/summary/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/users/token/refresh/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let store = signed_in_store("valid", "refresh-1");
    let client = client_for(&server.uri(), &store);

    let err = client.credit_summary().await.expect_err("500 surfaces");
    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
    assert!(!err.is_auth_error());

    // Tokens untouched.
    assert_eq!(store.access_token().as_deref(), Some("valid"));
}

#[tokio::test]
async fn requests_without_a_session_go_out_unauthenticated() {
    let server = MockServer::start().await;

    // No authorization header at all.
    Mock::given(method("POST"))
        .and(path("/users/token/"))
        .and(body_json(serde_json::json!({
            "username": "customer",
            "password": "hunter2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("a-1", "r-1")))
        .expect(1)
        .mount(&server)
        .await;

    let store = signed_out_store();
    let client = client_for(&server.uri(), &store);

    client
        .login("customer", "hunter2")
        .await
        .expect("login succeeds");

    assert_eq!(store.access_token().as_deref(), Some("a-1"));
    assert_eq!(store.refresh_token().as_deref(), Some("r-1"));
}
