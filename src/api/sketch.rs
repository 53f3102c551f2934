//! Session endpoints driving the live preview.

use axum::{
    body::Bytes,
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use sketch_engine::{Bitmap, SketchParams};
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::ApiError;
use crate::rendering::{encode_png, fit_within, SaveFormat};
use crate::server::AppState;
use crate::services::SessionSnapshot;

/// Body of `POST /api/open`.
#[derive(Debug, Deserialize)]
pub struct OpenRequest {
    pub path: PathBuf,
}

/// Query of `POST /api/upload`.
#[derive(Debug, Default, Deserialize)]
pub struct UploadQuery {
    /// Shown in the UI; defaults to "upload".
    pub name: Option<String>,
}

/// Optional bounding box for image responses.
#[derive(Debug, Default, Deserialize)]
pub struct FitQuery {
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
}

/// Body of `POST /api/save`.
#[derive(Debug, Default, Deserialize)]
pub struct SaveRequest {
    /// Target path; relative paths resolve against the output directory.
    pub path: Option<String>,
    /// `png`, `jpg`/`jpeg` or `bmp`; taken from the extension when absent.
    pub format: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub path: String,
    pub format: &'static str,
}

/// Current session state.
pub async fn handle_state(State(state): State<AppState>) -> Json<SessionSnapshot> {
    Json(state.session.snapshot().await)
}

/// Replace the parameter vector and re-render.
pub async fn handle_set_params(
    State(state): State<AppState>,
    payload: Result<Json<SketchParams>, JsonRejection>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let Json(params) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    tracing::debug!(?params, "Parameters changed");
    Ok(Json(state.session.set_params(params).await?))
}

/// Restore default parameters.
pub async fn handle_reset_params(
    State(state): State<AppState>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    Ok(Json(state.session.reset_params().await?))
}

/// Open an image from the server's filesystem.
pub async fn handle_open(
    State(state): State<AppState>,
    payload: Result<Json<OpenRequest>, JsonRejection>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    Ok(Json(state.session.open_path(request.path).await?))
}

/// Open an image from the request body.
pub async fn handle_upload(
    State(state): State<AppState>,
    query: Result<Query<UploadQuery>, QueryRejection>,
    body: Bytes,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let name = query
        .name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| "upload".to_string());
    Ok(Json(state.session.open_bytes(name, body.to_vec()).await?))
}

/// Latest rendered sketch as PNG.
pub async fn handle_preview(
    State(state): State<AppState>,
    query: Result<Query<FitQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let fit = fit_query(query)?;
    png_response(state.session.preview().await?, fit).await
}

/// Current input image as PNG.
pub async fn handle_source(
    State(state): State<AppState>,
    query: Result<Query<FitQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let fit = fit_query(query)?;
    png_response(state.session.source().await?, fit).await
}

/// Write the latest sketch to disk.
pub async fn handle_save(
    State(state): State<AppState>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<Json<SaveResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let format = request
        .format
        .as_deref()
        .map(SaveFormat::from_name)
        .transpose()?;
    let (path, format) = state
        .config
        .resolve_save_target(request.path.as_deref(), format)?;

    state.session.save(path.clone(), format).await?;

    Ok(Json(SaveResponse {
        path: path.display().to_string(),
        format: format.extension(),
    }))
}

fn fit_query(query: Result<Query<FitQuery>, QueryRejection>) -> Result<FitQuery, ApiError> {
    let Query(fit) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    if fit.max_width == Some(0) || fit.max_height == Some(0) {
        return Err(ApiError::BadRequest(
            "max_width and max_height must be positive".to_string(),
        ));
    }
    Ok(fit)
}

async fn png_response(bitmap: Arc<Bitmap>, fit: FitQuery) -> Result<Response, ApiError> {
    let png = tokio::task::spawn_blocking(move || match (fit.max_width, fit.max_height) {
        (None, None) => encode_png(&bitmap),
        (w, h) => encode_png(&fit_within(
            &bitmap,
            w.unwrap_or(u32::MAX),
            h.unwrap_or(u32::MAX),
        )),
    })
    .await??;

    Ok(([(header::CONTENT_TYPE, "image/png")], Bytes::from(png)).into_response())
}
