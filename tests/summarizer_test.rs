use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use reddit_summarizer::{
    HfSummarizer, Summarize, SummarizerConfig, NO_API_KEY_SENTINEL, SUMMARY_UNAVAILABLE_SENTINEL,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Clone)]
struct AppState {
    request_count: Arc<AtomicUsize>,
}

async fn summarize_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.request_count.fetch_add(1, Ordering::SeqCst);

    let authorized = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        == Some("Bearer test-key");
    if !authorized {
        return (StatusCode::FORBIDDEN, Json(json!({"error": "unauthorized"})));
    }

    let input_chars = body["inputs"]
        .as_str()
        .map(|inputs| inputs.chars().count())
        .unwrap_or(0);
    (
        StatusCode::OK,
        Json(json!([{ "summary_text": format!("{} chars summarized", input_chars) }])),
    )
}

async fn error_object_handler() -> Json<Value> {
    Json(json!({"error": "Model facebook/bart-large-cnn is currently loading"}))
}

async fn not_array_handler() -> Json<Value> {
    Json(json!({"summary_text": "not wrapped in an array"}))
}

async fn missing_field_handler() -> Json<Value> {
    Json(json!([{ "generated_text": "wrong field" }]))
}

async fn server_error_handler() -> StatusCode {
    StatusCode::SERVICE_UNAVAILABLE
}

async fn spawn_test_server() -> (String, Arc<AtomicUsize>, tokio::task::JoinHandle<()>) {
    let request_count = Arc::new(AtomicUsize::new(0));
    let state = AppState {
        request_count: request_count.clone(),
    };
    let app = Router::new()
        .route("/summarize", post(summarize_handler))
        .route("/error-object", post(error_object_handler))
        .route("/not-array", post(not_array_handler))
        .route("/missing-field", post(missing_field_handler))
        .route("/server-error", post(server_error_handler))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("listener should bind");
    let address = listener.local_addr().expect("local addr should exist");
    let join_handle = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server should run");
    });

    (format!("http://{address}"), request_count, join_handle)
}

fn config(endpoint: String, api_key: Option<&str>) -> SummarizerConfig {
    SummarizerConfig {
        endpoint,
        api_key: api_key.map(|key| key.to_string()),
        ..SummarizerConfig::default()
    }
}

#[tokio::test]
async fn missing_api_key_yields_sentinel_without_a_request() {
    let (base, request_count, server) = spawn_test_server().await;

    let summarizer = HfSummarizer::new(config(format!("{base}/summarize"), None));
    let summary = summarizer.summarize("some article text").await.unwrap();

    assert_eq!(summary, NO_API_KEY_SENTINEL);
    assert_eq!(request_count.load(Ordering::SeqCst), 0);
    server.abort();
}

#[tokio::test]
async fn blank_api_key_counts_as_missing() {
    let (base, request_count, server) = spawn_test_server().await;

    let summarizer = HfSummarizer::new(config(format!("{base}/summarize"), Some("   ")));
    let summary = summarizer.summarize("some article text").await.unwrap();

    assert_eq!(summary, NO_API_KEY_SENTINEL);
    assert_eq!(request_count.load(Ordering::SeqCst), 0);
    server.abort();
}

#[tokio::test]
async fn successful_response_returns_summary_text() {
    let (base, _, server) = spawn_test_server().await;

    let summarizer = HfSummarizer::new(config(format!("{base}/summarize"), Some("test-key")));
    let summary = summarizer.summarize("short input").await.unwrap();

    assert_eq!(summary, "11 chars summarized");
    server.abort();
}

#[tokio::test]
async fn input_is_truncated_to_the_character_budget() {
    let (base, _, server) = spawn_test_server().await;

    let summarizer = HfSummarizer::new(config(format!("{base}/summarize"), Some("test-key")));
    let long_input = "a".repeat(3000);
    let summary = summarizer.summarize(&long_input).await.unwrap();

    assert_eq!(summary, "1024 chars summarized");
    server.abort();
}

#[tokio::test]
async fn wrong_key_degrades_to_sentinel() {
    let (base, _, server) = spawn_test_server().await;

    let summarizer = HfSummarizer::new(config(format!("{base}/summarize"), Some("wrong-key")));
    let summary = summarizer.summarize("some article text").await.unwrap();

    assert_eq!(summary, SUMMARY_UNAVAILABLE_SENTINEL);
    server.abort();
}

#[tokio::test]
async fn error_object_response_degrades_to_sentinel() {
    let (base, _, server) = spawn_test_server().await;

    let summarizer = HfSummarizer::new(config(format!("{base}/error-object"), Some("test-key")));
    let summary = summarizer.summarize("some article text").await.unwrap();

    assert_eq!(summary, SUMMARY_UNAVAILABLE_SENTINEL);
    server.abort();
}

#[tokio::test]
async fn non_array_response_degrades_to_sentinel() {
    let (base, _, server) = spawn_test_server().await;

    let summarizer = HfSummarizer::new(config(format!("{base}/not-array"), Some("test-key")));
    let summary = summarizer.summarize("some article text").await.unwrap();

    assert_eq!(summary, SUMMARY_UNAVAILABLE_SENTINEL);
    server.abort();
}

#[tokio::test]
async fn missing_summary_field_degrades_to_sentinel() {
    let (base, _, server) = spawn_test_server().await;

    let summarizer = HfSummarizer::new(config(format!("{base}/missing-field"), Some("test-key")));
    let summary = summarizer.summarize("some article text").await.unwrap();

    assert_eq!(summary, SUMMARY_UNAVAILABLE_SENTINEL);
    server.abort();
}

#[tokio::test]
async fn server_error_degrades_to_sentinel() {
    let (base, _, server) = spawn_test_server().await;

    let summarizer = HfSummarizer::new(config(format!("{base}/server-error"), Some("test-key")));
    let summary = summarizer.summarize("some article text").await.unwrap();

    assert_eq!(summary, SUMMARY_UNAVAILABLE_SENTINEL);
    server.abort();
}

#[tokio::test]
async fn unreachable_endpoint_degrades_to_sentinel() {
    let summarizer = HfSummarizer::new(config(
        "http://127.0.0.1:1/summarize".to_string(),
        Some("test-key"),
    ));
    let summary = summarizer.summarize("some article text").await.unwrap();

    assert_eq!(summary, SUMMARY_UNAVAILABLE_SENTINEL);
}
