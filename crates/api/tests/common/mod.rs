//! Shared helpers for HTTP-level integration tests.
//!
//! Requests are sent straight to the router with `tower::ServiceExt::oneshot`,
//! so no TCP listener is involved.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use campaign_core::audit::AuditActor;
use campaign_core::metrics::MetricPlaceholders;
use campaign_db::DbPool;
use http_body_util::BodyExt;
use tower::ServiceExt;

use campaign_api::config::ServerConfig;
use campaign_api::router::build_app_router;
use campaign_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Sample data is off so every test starts from an empty store.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        seed_sample_data: false,
        audit_actor: AuditActor::default(),
        metric_placeholders: MetricPlaceholders::default(),
    }
}

/// A fresh, empty store.
pub fn test_pool() -> DbPool {
    campaign_db::create_pool()
}

/// Build the full application router over the given store, using the same
/// middleware stack as production.
pub fn build_test_app(pool: DbPool) -> Router {
    let config = test_config();
    let state = AppState::new(pool, config.clone());
    build_app_router(state, &config)
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
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

async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PATCH, uri, body).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A complete, valid create payload.
pub fn campaign_payload(name: &str, budget: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "description": "Integration test campaign",
        "type": "Email Marketing",
        "budget": budget,
        "startDate": "2025-01-01",
        "endDate": "2025-01-31",
    })
}

/// Create a campaign and return its id.
pub async fn create_campaign(pool: &DbPool, name: &str, budget: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/campaigns",
        campaign_payload(name, budget),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}
