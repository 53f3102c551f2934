//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use sketchmaker::models::AppConfig;
use sketchmaker::server::{build_router, create_app_state};
use sketchmaker::services::SketchSession;

/// Test application with router and direct access to the session
pub struct TestApp {
    router: axum::Router,
    pub session: Arc<SketchSession>,
    /// Output directory for saves; removed when the app is dropped
    pub output_dir: PathBuf,
    _output: TempDir,
}

impl TestApp {
    /// Create a new test application with an empty session
    pub fn new() -> Self {
        let output = tempfile::tempdir().expect("Failed to create output dir");
        let config = AppConfig {
            output_dir: output.path().to_path_buf(),
            ..AppConfig::default()
        };

        let state = create_app_state(config);
        let session = state.session.clone();
        let router = build_router(state);

        Self {
            router,
            session,
            output_dir: output.path().to_path_buf(),
            _output: output,
        }
    }

    /// Create a test application with an uploaded image
    pub async fn with_image(png: Vec<u8>) -> Self {
        let app = Self::new();
        let response = app.post_bytes("/api/upload?name=fixture.png", png).await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.text());
        app
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request with an empty body
    pub async fn post(&self, path: &str) -> TestResponse {
        self.request(Request::post(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::post(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.request(request).await
    }

    /// Make a PUT request with JSON body
    pub async fn put_json(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::put(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.request(request).await
    }

    /// Make a POST request with a raw byte body
    pub async fn post_bytes(&self, path: &str, body: Vec<u8>) -> TestResponse {
        let request = Request::post(path)
            .header("Content-Type", "application/octet-stream")
            .body(Body::from(body))
            .unwrap();
        self.request(request).await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// Check if response is a PNG image
    pub fn is_png(&self) -> bool {
        self.body.len() >= 8 && &self.body[0..8] == b"\x89PNG\r\n\x1a\n"
    }

    /// Decode a PNG body
    pub fn image(&self) -> image::DynamicImage {
        image::load_from_memory(&self.body).expect("Failed to decode image body")
    }
}
