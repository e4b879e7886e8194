#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use qrlink_api::config::ServerConfig;
use qrlink_api::router::build_app_router;
use qrlink_api::state::AppState;
use qrlink_core::encoder::{EncodeError, PngDataUriEncoder, QrEncoder};
use qrlink_core::render::RenderOptions;

/// Data-URI returned by [`CountingEncoder`].
pub const STUB_DATA_URI: &str = "data:image/png;base64,c3R1Yg==";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        qr: RenderOptions::default(),
    }
}

/// Build the full application router around the given encoder.
///
/// Goes through [`build_app_router`] so integration tests exercise the same
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery)
/// that production uses.
pub fn build_test_app(encoder: Arc<dyn QrEncoder>) -> Router {
    let config = test_config();
    let state = AppState { encoder };
    build_app_router(state, &config)
}

/// App wired to the real PNG encoder.
pub fn build_png_app() -> Router {
    let encoder = PngDataUriEncoder::new(RenderOptions::default()).unwrap();
    build_test_app(Arc::new(encoder))
}

// ---------------------------------------------------------------------------
// Stub encoders
// ---------------------------------------------------------------------------

/// Encoder that records how often it was called and returns a fixed URI.
#[derive(Default)]
pub struct CountingEncoder {
    calls: AtomicUsize,
}

impl CountingEncoder {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QrEncoder for CountingEncoder {
    async fn encode_to_data_uri(&self, _text: &str) -> Result<String, EncodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(STUB_DATA_URI.to_string())
    }
}

/// Encoder that always fails with a backend error carrying `detail`.
pub struct FailingEncoder {
    pub detail: &'static str,
}

#[async_trait]
impl QrEncoder for FailingEncoder {
    async fn encode_to_data_uri(&self, _text: &str) -> Result<String, EncodeError> {
        Err(EncodeError::Backend(self.detail.to_string()))
    }
}

/// Encoder that panics mid-request.
pub struct PanickingEncoder;

#[async_trait]
impl QrEncoder for PanickingEncoder {
    async fn encode_to_data_uri(&self, _text: &str) -> Result<String, EncodeError> {
        panic!("encoder blew up");
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with an arbitrary body and optional content type.
pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: Option<&str>,
    body: impl Into<Body>,
) -> Response<Body> {
    let mut builder = Request::builder().method(Method::POST).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header("content-type", ct);
    }
    app.oneshot(builder.body(body.into()).unwrap()).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
