//! Shared helpers for HTTP-level integration tests.
//!
//! Requests go straight into the router through `tower::ServiceExt::oneshot`
//! without a TCP listener. Each test owns a fresh SQLite file in a temporary
//! directory.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use freezo_api::config::{CorsOrigins, ServerConfig};
use freezo_api::router::build_app_router;
use freezo_api::state::AppState;
use freezo_db::{DbConfig, DbPool};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestDb {
    pub pool: DbPool,
    _dir: TempDir,
}

/// Create and bootstrap a fresh database file.
pub async fn test_db() -> TestDb {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = DbConfig::for_path(dir.path().join("freezer.db"));
    let pool = freezo_db::create_pool(&config)
        .await
        .expect("open test database");
    freezo_db::bootstrap(&pool)
        .await
        .expect("bootstrap test database");
    TestDb { pool, _dir: dir }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: CorsOrigins::Any,
        request_timeout_secs: 30,
    }
}

/// Build the full application router, middleware included, over `pool`.
pub fn build_test_app(pool: DbPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    post_raw(app, method, uri, "application/json", body.to_string()).await
}

/// Send an arbitrary body with the given content type.
pub async fn post_raw(
    app: Router,
    method: Method,
    uri: &str,
    content_type: &str,
    body: impl Into<Body>,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", content_type)
        .body(body.into())
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a freezer through the API and return its id.
pub async fn create_freezer(pool: &DbPool, name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/freezers",
        serde_json::json!({ "name": name }),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create an item through the API and return its id.
pub async fn create_item(pool: &DbPool, name: &str, freezer_id: i64) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/items",
        serde_json::json!({ "name": name, "freezer_id": freezer_id }),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}
