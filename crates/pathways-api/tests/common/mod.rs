//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use pathways_conversation::application::dispatcher::StageDispatcher;
use pathways_conversation::application::enrichment::ImageEnrichment;
use pathways_conversation::application::generation::{ContentGenerationClient, DEFAULT_MODEL_ID};
use pathways_conversation::application::registry::SessionRegistry;
use pathways_core::clock::Clock;
use pathways_core::generation::{ImageGenerator, TextGenerator};
use pathways_test_support::FixedClock;
use tower::ServiceExt;

use pathways_api::routes;
use pathways_api::state::AppState;

/// Fixed timestamp used across all integration tests.
fn fixed_clock() -> Arc<dyn Clock + Send + Sync> {
    Arc::new(FixedClock(
        chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2026, 1, 15, 10, 0, 0).unwrap(),
    ))
}

/// Build the full app router over the given collaborators and a fixed
/// clock. Uses the same route structure as `main.rs`.
pub fn build_test_app(text: Arc<dyn TextGenerator>, images: Arc<dyn ImageGenerator>) -> Router {
    let dispatcher = StageDispatcher::new(
        ContentGenerationClient::new(text, DEFAULT_MODEL_ID),
        ImageEnrichment::new(images),
    );
    let app_state = AppState::new(
        fixed_clock(),
        Arc::new(SessionRegistry::new()),
        Arc::new(dispatcher),
    );

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/sessions", routes::conversation::router())
        .with_state(app_state)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}

/// Send a POST request with a JSON body and return the response.
/// Empty bodies come back as `Value::Null`.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    send(app, request).await
}

/// Send a POST request without a body and return the response.
pub async fn post_empty(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}
