//! HTTP tests driving the full router against an in-memory database.

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};


/// Response status and body, parsed as JSON when possible.
struct TestResponse {
    status: StatusCode,
    body: Value,
    text: String,
}

/// Creates a test context with every API table.
async fn setup() -> TestContext {
    TestBuilder::new().with_all_tables().build().await.unwrap()
}

fn app(db: &DatabaseConnection) -> Router {
    router().with_state(AppState::new(db.clone()))
}

/// Sends one request through a router and collects the response.
async fn send_to(app: Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    let body = serde_json::from_str(&text).unwrap_or(Value::Null);

    TestResponse { status, body, text }
}

async fn send(
    db: &DatabaseConnection,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> TestResponse {
    send_to(app(db), method, uri, body).await
}

/// Runs the futures as concurrent tasks and collects their outputs in order.
async fn spawn_all<F>(futures: impl Iterator<Item = F>) -> Vec<F::Output>
where
    F: std::future::Future + Send + 'static,
    F::Output: Send + 'static,
{
    let handles: Vec<_> = futures.map(tokio::spawn).collect();
    let mut outputs = Vec::with_capacity(handles.len());
    for handle in handles {
        outputs.push(handle.await.unwrap());
    }
    outputs
}

#[tokio::test]
async fn serves_openapi_document() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let response = send(db, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["paths"]["/api/composers"].is_object());
    assert!(response.body["paths"]["/api/teams/{id}/players"].is_object());
    assert!(response.body["paths"]["/api/signup"].is_object());
}

#[tokio::test]
async fn malformed_body_answers_bad_request_with_error_body() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/composers")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app(db).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());
}
