//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the binary and integration tests.

use axum::{
    extract::DefaultBodyLimit,
    http::{header::CACHE_CONTROL, HeaderValue},
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::api;
use crate::models::AppConfig;
use crate::services::SketchSession;

/// Largest accepted upload body.
pub const MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<SketchSession>,
    pub config: Arc<AppConfig>,
}

/// Create application state with an empty session.
pub fn create_app_state(config: AppConfig) -> AppState {
    AppState {
        session: Arc::new(SketchSession::new()),
        config: Arc::new(config),
    }
}

/// Open the configured startup image, if any.
///
/// A missing or undecodable startup image is logged and the server starts
/// with an empty session.
pub async fn open_initial_image(state: &AppState) {
    let Some(path) = state.config.initial_image.clone() else {
        tracing::info!("No startup image; waiting for the UI to open one");
        return;
    };
    match state.session.open_path(path.clone()).await {
        Ok(snapshot) => tracing::info!(
            path = %path.display(),
            revision = snapshot.revision,
            "Opened startup image"
        ),
        Err(e) => tracing::warn!(path = %path.display(), %e, "Could not open startup image"),
    }
}

/// Build the router with all endpoints and middleware.
///
/// Previews change on every parameter update, so responses carry
/// `Cache-Control: no-store` unless a handler sets its own.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Browser UI
        .route("/", get(api::handle_index))
        .route("/ui/app.css", get(api::handle_css))
        .route("/ui/app.js", get(api::handle_js))
        // Session API
        .route("/api/state", get(api::handle_state))
        .route("/api/params", put(api::handle_set_params))
        .route("/api/params/reset", post(api::handle_reset_params))
        .route("/api/open", post(api::handle_open))
        .route("/api/upload", post(api::handle_upload))
        .route("/api/preview.png", get(api::handle_preview))
        .route("/api/source.png", get(api::handle_source))
        .route("/api/save", post(api::handle_save))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
}
