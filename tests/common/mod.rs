#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use stockbit_account::{
    account::{
        memory::MemoryDb, model::Account, repo::AccountRepository, service::AccountService,
    },
    auth::jwt::JwtKeys,
    server::router,
};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-secret";

pub fn setup_test_app() -> Router {
    let svc = AccountService::new(
        AccountRepository::new(MemoryDb::new()),
        JwtKeys::from_secret(TEST_SECRET),
    );
    router(Arc::new(svc))
}

pub fn token_for(account: &Account, secret: &str) -> String {
    JwtKeys::from_secret(secret)
        .create_jwt(account)
        .expect("Failed to sign test token")
}

pub fn signed_token(payload: &serde_json::Value, secret: &str) -> String {
    jsonwebtoken::encode(
        &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS256),
        payload,
        &jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to sign test token")
}

pub fn unsigned_token(payload: &serde_json::Value) -> String {
    use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

    let header = serde_json::json!({ "alg": "none", "typ": "JWT" });
    format!(
        "{}.{}.",
        URL_SAFE_NO_PAD.encode(header.to_string()),
        URL_SAFE_NO_PAD.encode(payload.to_string())
    )
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.expect("Router failed");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("x-jwt-token", token);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn create_account(app: &Router, first_name: &str, last_name: &str) -> Account {
    let body = serde_json::json!({ "firstName": first_name, "lastName": last_name }).to_string();
    let (status, json) = send(app, json_request("POST", "/account", &body)).await;
    assert_eq!(status, StatusCode::OK, "create failed: {json}");
    serde_json::from_value(json).expect("Response is not an account")
}

#[cfg(feature = "test-sqlite")]
pub async fn setup_test_db() -> sqlx::SqlitePool {
    // One connection keeps the in-memory database alive for the whole test
    sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory SQLite DB")
}
