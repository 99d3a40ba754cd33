#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use streetscape_api::{cors_layer, create_router, ApiConfig, AppState};

pub const TEST_ORIGIN: &str = "http://localhost:3000";

/// Build the application the way `main` does, backed by fresh seed data.
pub fn build_test_app() -> Router {
    let config = ApiConfig::default();
    let state = Arc::new(AppState::seeded(config));
    create_router(state).layer(cors_layer(TEST_ORIGIN).unwrap())
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().method(Method::GET).uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().method(Method::POST).uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
