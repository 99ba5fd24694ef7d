use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use spotcast::config::SpotifyConfig;
use spotcast::management::{
    MemoryTokenStore, TOKEN_STORE_KEY, TokenError, TokenManager, TokenStore,
};
use spotcast::types::Token;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Helper to build a config pointing the token endpoint at a stub server
fn test_config(token_url: String) -> SpotifyConfig {
    SpotifyConfig {
        client_id: "client-id".to_string(),
        client_secret: "client-secret".to_string(),
        redirect_uri: "http://127.0.0.1:8080/callback".to_string(),
        scope: "user-read-playback-state".to_string(),
        auth_url: "https://accounts.spotify.com/authorize".to_string(),
        token_url,
        api_url: "https://api.spotify.com/v1".to_string(),
    }
}

fn unix_now() -> u64 {
    Utc::now().timestamp() as u64
}

// Helper to create a stored token record
fn record(access: &str, refresh: &str, expires_at: u64) -> Token {
    Token {
        access_token: access.to_string(),
        refresh_token: refresh.to_string(),
        scope: "user-read-playback-state".to_string(),
        token_type: "Bearer".to_string(),
        expires_at,
    }
}

async fn seed(store: &MemoryTokenStore, token: &Token) {
    store
        .set(TOKEN_STORE_KEY, &serde_json::to_string(token).unwrap())
        .await
        .unwrap();
}

async fn stored(store: &MemoryTokenStore) -> Token {
    let raw = store
        .get(TOKEN_STORE_KEY)
        .await
        .unwrap()
        .expect("token record present");
    serde_json::from_str(&raw).unwrap()
}

#[tokio::test]
async fn exchange_persists_token_record() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(body_string_contains("grant_type=authorization_code"))
        .and(body_string_contains("code=validcode"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "AT1",
            "refresh_token": "RT1",
            "token_type": "Bearer",
            "scope": "user-read-playback-state",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let manager = TokenManager::new(
        test_config(format!("{}/api/token", server.uri())),
        store.clone(),
    );

    let before = unix_now();
    manager.complete_authorization("validcode").await.unwrap();

    let token = stored(&store).await;
    assert_eq!(token.access_token, "AT1");
    assert_eq!(token.refresh_token, "RT1");
    assert_eq!(token.token_type, "Bearer");

    // expires_at lands at roughly now + 3600
    assert!(token.expires_at >= before + 3600);
    assert!(token.expires_at <= unix_now() + 3600);
}

#[tokio::test]
async fn empty_code_leaves_store_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let manager = TokenManager::new(
        test_config(format!("{}/api/token", server.uri())),
        store.clone(),
    );

    let err = manager.complete_authorization("").await.unwrap_err();
    assert!(matches!(err, TokenError::MissingCode));

    // No record was written and the token endpoint was never called
    assert!(store.get(TOKEN_STORE_KEY).await.unwrap().is_none());
}

#[tokio::test]
async fn failed_exchange_keeps_previous_record() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "invalid_grant"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let existing = record("AT-old", "RT-old", unix_now() + 3600);
    seed(&store, &existing).await;

    let manager = TokenManager::new(
        test_config(format!("{}/api/token", server.uri())),
        store.clone(),
    );

    let err = manager.complete_authorization("usedcode").await.unwrap_err();
    assert!(matches!(err, TokenError::Exchange(_)));

    // The prior record survives the failed exchange unchanged
    let token = stored(&store).await;
    assert_eq!(token.access_token, "AT-old");
    assert_eq!(token.refresh_token, "RT-old");

    // And the surviving record keeps serving callers
    assert_eq!(manager.get_valid_token().await.unwrap(), "AT-old");
}

#[tokio::test]
async fn last_successful_exchange_wins() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("code=first"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "AT1",
            "refresh_token": "RT1",
            "expires_in": 3600
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("code=broken"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "invalid_grant"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("code=second"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "AT2",
            "refresh_token": "RT2",
            "expires_in": 3600
        })))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let manager = TokenManager::new(
        test_config(format!("{}/api/token", server.uri())),
        store.clone(),
    );

    manager.complete_authorization("first").await.unwrap();
    manager.complete_authorization("broken").await.unwrap_err();
    manager.complete_authorization("second").await.unwrap();

    // The record reflects the last successful exchange
    assert_eq!(manager.get_valid_token().await.unwrap(), "AT2");
    assert_eq!(stored(&store).await.refresh_token, "RT2");
}

#[tokio::test]
async fn missing_record_reports_no_token_without_upstream_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let manager = TokenManager::new(test_config(format!("{}/api/token", server.uri())), store);

    let err = manager.get_valid_token().await.unwrap_err();
    assert!(matches!(err, TokenError::NoToken));
}

#[tokio::test]
async fn valid_record_returns_access_token_without_refresh() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let existing = record("AT-valid", "RT-valid", unix_now() + 3600);
    seed(&store, &existing).await;

    let manager = TokenManager::new(
        test_config(format!("{}/api/token", server.uri())),
        store.clone(),
    );

    assert_eq!(manager.get_valid_token().await.unwrap(), "AT-valid");

    // The stored record was not rewritten
    assert_eq!(stored(&store).await.expires_at, existing.expires_at);
}

#[tokio::test]
async fn expired_record_is_refreshed_and_rewritten() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(body_string_contains("grant_type=refresh_token"))
        .and(body_string_contains("refresh_token=RT-original"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "AT2",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let expired = record("AT1", "RT-original", unix_now() - 10);
    seed(&store, &expired).await;

    let manager = TokenManager::new(
        test_config(format!("{}/api/token", server.uri())),
        store.clone(),
    );

    let before = unix_now();
    assert_eq!(manager.get_valid_token().await.unwrap(), "AT2");

    // The response carried no refresh token, so the original one is kept
    let token = stored(&store).await;
    assert_eq!(token.access_token, "AT2");
    assert_eq!(token.refresh_token, "RT-original");
    assert!(token.expires_at >= before + 3600);
    assert!(token.expires_at <= unix_now() + 3600);
}

#[tokio::test]
async fn failed_refresh_leaves_record_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "invalid_grant"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let expired = record("AT1", "RT-revoked", unix_now() - 10);
    seed(&store, &expired).await;

    let manager = TokenManager::new(
        test_config(format!("{}/api/token", server.uri())),
        store.clone(),
    );

    let err = manager.get_valid_token().await.unwrap_err();
    assert!(matches!(err, TokenError::Exchange(_)));

    // The expired record stays as it was; re-authorization is required
    let token = stored(&store).await;
    assert_eq!(token.access_token, "AT1");
    assert_eq!(token.refresh_token, "RT-revoked");
    assert_eq!(token.expires_at, expired.expires_at);
}

#[tokio::test]
async fn rotated_refresh_token_is_adopted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("grant_type=refresh_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "AT2",
            "refresh_token": "RT-next",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    seed(&store, &record("AT1", "RT-original", unix_now() - 10)).await;

    let manager = TokenManager::new(
        test_config(format!("{}/api/token", server.uri())),
        store.clone(),
    );

    manager.get_valid_token().await.unwrap();
    assert_eq!(stored(&store).await.refresh_token, "RT-next");
}

#[test]
fn authorize_url_carries_required_parameters() {
    let store = Arc::new(MemoryTokenStore::new());
    let manager = TokenManager::new(
        test_config("https://accounts.spotify.com/api/token".to_string()),
        store,
    );

    let url = manager.authorize_url().unwrap();
    assert!(url.starts_with("https://accounts.spotify.com/authorize?client_id=client-id"));
    assert!(url.contains("response_type=code"));
    assert!(url.contains("redirect_uri=http://127.0.0.1:8080/callback"));
    assert!(url.contains("scope=user-read-playback-state"));
}

#[test]
fn authorize_url_requires_configuration() {
    let mut config = test_config("https://accounts.spotify.com/api/token".to_string());
    config.client_id = String::new();

    let store = Arc::new(MemoryTokenStore::new());
    let manager = TokenManager::new(config, store);

    let err = manager.authorize_url().unwrap_err();
    assert!(matches!(err, TokenError::Configuration(_)));
}
