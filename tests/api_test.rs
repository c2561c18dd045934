//! End-to-end tests for the HTTP API
//!
//! The router is driven in-process with an in-memory store and a manual
//! clock so elapsed time can be simulated.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use padlock::{
    api::{create_router, create_router_with_static},
    AppState, JsonFileStore, ManualClock, MemoryStore, TimerStore,
};

const EPOCH: f64 = 1_700_000_000.0;

fn setup(store: Arc<dyn TimerStore>) -> (Router, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(EPOCH));
    let state = Arc::new(AppState::new(store, clock.clone(), 5000, "127.0.0.1".to_string()));
    (create_router(state), clock)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, body.to_vec())
}

async fn status_json(app: &Router) -> Value {
    let (status, _, body) = get(app, "/status").await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).unwrap()
}

fn assert_started(value: &Value, expected_remaining: f64) {
    assert_eq!(value[0], "started");
    let remaining = value[1].as_f64().unwrap();
    assert!(
        (remaining - expected_remaining).abs() < 1e-6,
        "remaining {remaining} != {expected_remaining}"
    );
}

#[tokio::test]
async fn reset_then_status_reports_stopped() {
    let (app, _) = setup(Arc::new(MemoryStore::new()));

    let (status, _, body) = get(&app, "/reset").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"reset done");

    assert_eq!(
        status_json(&app).await,
        json!({
            "pink": ["stopped", 5],
            "blue": ["stopped", 15],
            "magenta": ["stopped", 30],
        })
    );
}

#[tokio::test]
async fn status_without_any_stored_state_reports_stopped() {
    let (app, _) = setup(Arc::new(MemoryStore::new()));

    let body = status_json(&app).await;
    assert_eq!(body["pink"], json!(["stopped", 5]));
    assert_eq!(body["magenta"], json!(["stopped", 30]));
}

#[tokio::test]
async fn start_redirects_to_status() {
    let (app, _) = setup(Arc::new(MemoryStore::new()));

    let (status, headers, _) = get(&app, "/start").await;
    assert_eq!(status, StatusCode::FOUND);
    assert_eq!(headers[header::LOCATION], "/status");
}

#[tokio::test]
async fn six_seconds_after_start_only_pink_is_unlocked() {
    let (app, clock) = setup(Arc::new(MemoryStore::new()));

    get(&app, "/start").await;
    clock.advance(6.0);

    let body = status_json(&app).await;
    assert_eq!(body["pink"], json!(["secret", 135]));
    assert_started(&body["blue"], 9.0);
    assert_started(&body["magenta"], 24.0);
}

#[tokio::test]
async fn thirty_one_seconds_after_start_everything_is_unlocked() {
    let (app, clock) = setup(Arc::new(MemoryStore::new()));

    get(&app, "/start").await;
    clock.advance(31.0);

    assert_eq!(
        status_json(&app).await,
        json!({
            "pink": ["secret", 135],
            "blue": ["secret", 117],
            "magenta": ["secret", 143],
        })
    );
}

#[tokio::test]
async fn secret_is_revealed_exactly_at_the_delay() {
    let (app, clock) = setup(Arc::new(MemoryStore::new()));

    get(&app, "/start").await;
    clock.advance(15.0);

    let body = status_json(&app).await;
    assert_eq!(body["blue"], json!(["secret", 117]));
    assert_started(&body["magenta"], 15.0);
}

#[tokio::test]
async fn reset_after_start_stops_every_padlock() {
    let (app, clock) = setup(Arc::new(MemoryStore::new()));

    get(&app, "/start").await;
    clock.advance(10.0);
    get(&app, "/reset").await;

    let body = status_json(&app).await;
    assert_eq!(body["pink"], json!(["stopped", 5]));
    assert_eq!(body["blue"], json!(["stopped", 15]));
}

#[tokio::test]
async fn restart_resets_the_countdown() {
    let (app, clock) = setup(Arc::new(MemoryStore::new()));

    get(&app, "/start").await;
    clock.advance(20.0);
    get(&app, "/start").await;
    clock.advance(1.0);

    let body = status_json(&app).await;
    assert_started(&body["pink"], 4.0);
}

#[tokio::test]
async fn timer_survives_in_the_data_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");

    let (app, clock) = setup(Arc::new(JsonFileStore::new(&path)));
    get(&app, "/start").await;

    let stored: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(stored, json!({ "start": EPOCH }));

    // A fresh router over the same file sees the same timer
    let state = Arc::new(AppState::new(
        Arc::new(JsonFileStore::new(&path)),
        clock.clone(),
        5000,
        "127.0.0.1".to_string(),
    ));
    let reopened = create_router(state);
    clock.advance(6.0);
    assert_eq!(status_json(&reopened).await["pink"], json!(["secret", 135]));
}

#[tokio::test]
async fn corrupt_data_file_reads_as_stopped() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, "{ broken").unwrap();

    let (app, _) = setup(Arc::new(JsonFileStore::new(&path)));
    assert_eq!(status_json(&app).await["blue"], json!(["stopped", 15]));
}

#[tokio::test]
async fn failed_save_is_a_server_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing-dir").join("data.json");

    let (app, _) = setup(Arc::new(JsonFileStore::new(&path)));
    let (status, _, _) = get(&app, "/start").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let (status, _, _) = get(&app, "/reset").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn only_get_is_routed() {
    let (app, _) = setup(Arc::new(MemoryStore::new()));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/start")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn health_reports_ok() {
    let (app, _) = setup(Arc::new(MemoryStore::new()));

    let (status, _, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["port"], 5000);
    assert_eq!(body["host"], "127.0.0.1");
}

#[tokio::test]
async fn static_files_are_served() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("puzzle")).unwrap();
    std::fs::write(dir.path().join("puzzle").join("index.html"), "<h1>puzzle</h1>").unwrap();

    let clock = Arc::new(ManualClock::new(EPOCH));
    let state = Arc::new(AppState::new(
        Arc::new(MemoryStore::new()),
        clock,
        5000,
        "127.0.0.1".to_string(),
    ));
    let app = create_router_with_static(state, dir.path());

    let (status, _, body) = get(&app, "/static/puzzle/index.html").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<h1>puzzle</h1>");

    let (status, _, _) = get(&app, "/static/nope.js").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Static files pass through the same CORS layer as the API routes
    let response = app
        .oneshot(
            Request::builder()
                .uri("/static/puzzle/index.html")
                .header(header::ORIGIN, "http://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}
