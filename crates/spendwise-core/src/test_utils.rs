//! Test utilities for spendwise-core
//!
//! Provides an in-process mock of the Gemini API so integration tests can
//! exercise the real `GeminiBackend` over HTTP without a live credential.

use axum::{
    extract::{Json, Path},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::sync::oneshot;

/// API key the mock server accepts
pub const MOCK_API_KEY: &str = "test-api-key";

/// Model the mock server knows about
pub const MOCK_MODEL: &str = "gemini-1.5-flash";

/// Canned report returned for every valid generate request
pub const MOCK_REPORT: &str = "\
| STT | Nội dung | Số tiền (VNĐ) |\n\
|-----|----------|---------------|\n\
| 1 | Tiền nhà | 5.000.000 |\n\
| 2 | Ăn sáng | 30.000 |\n\n\
**Tổng chi:** 5.030.000 VNĐ\n\
**Số tiền dư còn lại:** 4.970.000 VNĐ\n";

/// Mock Gemini server for testing and development
pub struct MockGeminiServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockGeminiServer {
    /// Start the mock server on an available port
    pub async fn start() -> Self {
        let app = Router::new()
            .route("/v1beta/models", get(handle_list_models))
            .route(
                "/v1beta/models/:model",
                get(handle_get_model).post(handle_generate),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .unwrap();
        });

        Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Get the base URL for this mock server
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stop the mock server
    pub fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockGeminiServer {
    fn drop(&mut self) {
        self.stop();
    }
}

fn key_is_valid(headers: &HeaderMap) -> bool {
    headers
        .get("x-goog-api-key")
        .and_then(|v| v.to_str().ok())
        .map(|k| k == MOCK_API_KEY)
        .unwrap_or(false)
}

fn error_body(code: u16, message: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "error": {
            "code": code,
            "message": message,
            "status": status,
        }
    })
}

/// Model listing endpoint
async fn handle_list_models(headers: HeaderMap) -> impl IntoResponse {
    if !key_is_valid(&headers) {
        return (
            StatusCode::BAD_REQUEST,
            Json(error_body(
                400,
                "API key not valid. Please pass a valid API key.",
                "INVALID_ARGUMENT",
            )),
        );
    }

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "models": [
                { "name": format!("models/{}", MOCK_MODEL) },
                { "name": "models/gemini-1.5-pro" },
            ]
        })),
    )
}

/// Single-model endpoint (used as the health check)
async fn handle_get_model(headers: HeaderMap, Path(model): Path<String>) -> impl IntoResponse {
    if !key_is_valid(&headers) {
        return (
            StatusCode::BAD_REQUEST,
            Json(error_body(
                400,
                "API key not valid. Please pass a valid API key.",
                "INVALID_ARGUMENT",
            )),
        );
    }

    if model != MOCK_MODEL && model != "gemini-1.5-pro" {
        return (
            StatusCode::NOT_FOUND,
            Json(error_body(
                404,
                &format!("models/{} is not found", model),
                "NOT_FOUND",
            )),
        );
    }

    (
        StatusCode::OK,
        Json(serde_json::json!({ "name": format!("models/{}", model) })),
    )
}

// Request/response types for the generate endpoint

#[derive(Debug, Deserialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
}

#[derive(Debug, Deserialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Deserialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerateResponse {
    candidates: Vec<ResponseCandidate>,
}

#[derive(Debug, Serialize)]
struct ResponseCandidate {
    content: ResponseContent,
}

#[derive(Debug, Serialize)]
struct ResponseContent {
    parts: Vec<ResponsePart>,
    role: &'static str,
}

#[derive(Debug, Serialize)]
struct ResponsePart {
    text: String,
}

/// generateContent endpoint
///
/// The path segment arrives as "{model}:generateContent"; anything other
/// than a known model or an empty prompt is rejected the way the real API
/// rejects it.
async fn handle_generate(
    headers: HeaderMap,
    Path(model_action): Path<String>,
    Json(request): Json<GenerateRequest>,
) -> impl IntoResponse {
    if !key_is_valid(&headers) {
        return (
            StatusCode::BAD_REQUEST,
            Json(error_body(
                400,
                "API key not valid. Please pass a valid API key.",
                "INVALID_ARGUMENT",
            )),
        );
    }

    let model = model_action
        .split_once(':')
        .map(|(model, _)| model)
        .unwrap_or(model_action.as_str());

    if model != MOCK_MODEL && model != "gemini-1.5-pro" {
        return (
            StatusCode::NOT_FOUND,
            Json(error_body(
                404,
                &format!("models/{} is not found for API version v1beta", model),
                "NOT_FOUND",
            )),
        );
    }

    let prompt = request
        .contents
        .first()
        .and_then(|c| c.parts.first())
        .map(|p| p.text.as_str())
        .unwrap_or_default();

    if prompt.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(error_body(400, "contents is not specified", "INVALID_ARGUMENT")),
        );
    }

    let response = GenerateResponse {
        candidates: vec![ResponseCandidate {
            content: ResponseContent {
                parts: vec![ResponsePart {
                    text: MOCK_REPORT.to_string(),
                }],
                role: "model",
            },
        }],
    };

    (
        StatusCode::OK,
        Json(serde_json::to_value(&response).unwrap()),
    )
}
