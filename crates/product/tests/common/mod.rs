#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use product::{handler::AppRouter, state::AppState};
use serde_json::Value;
use shared::config::ConnectionPool;
use sqlx::any::{AnyPoolOptions, install_default_drivers};
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

pub type App = NormalizePath<Router>;

/// One connection only: every new `sqlite::memory:` connection is its own
/// empty database.
pub async fn setup_pool() -> ConnectionPool {
    install_default_drivers();

    let pool = AnyPoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite pool");

    sqlx::query(
        "CREATE TABLE products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            price REAL NOT NULL
        )",
    )
    .execute(&pool)
    .await
    .expect("create products table");

    pool
}

pub async fn drop_products_table(pool: &ConnectionPool) {
    sqlx::query("DROP TABLE products")
        .execute(pool)
        .await
        .expect("drop products table");
}

pub async fn setup_app() -> (App, ConnectionPool) {
    let pool = setup_pool().await;
    let app = AppRouter::build(Arc::new(AppState::new(pool.clone())));
    (app, pool)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Value,
}

pub async fn send(app: &App, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
        .expect("request");

    send_request(app, request).await
}

/// Non-JSON bodies (e.g. tower-http's plain-text rejections) come back as
/// a JSON string.
pub async fn send_request(app: &App, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.expect("infallible");

    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    TestResponse {
        status,
        content_type,
        body,
    }
}
