use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use sketch_engine::SketchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No image loaded")]
    NoImage,

    #[error("No preview rendered yet")]
    NoPreview,

    #[error("Sketch error: {0}")]
    Sketch(#[from] SketchError),

    #[error("File error: {0}")]
    File(#[from] FileError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Failures reading or writing image files.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("Cannot decode image: {0}")]
    Decode(String),

    #[error("Cannot encode image: {0}")]
    Encode(String),

    #[error("Cannot write file: {0}")]
    Write(String),
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        ApiError::Internal(format!("worker task failed: {e}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NoImage | ApiError::NoPreview => StatusCode::NOT_FOUND,
            ApiError::Sketch(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::File(FileError::Decode(_) | FileError::Encode(_)) => StatusCode::BAD_REQUEST,
            ApiError::File(FileError::Write(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_no_image() {
        assert_eq!(ApiError::NoImage.to_string(), "No image loaded");
    }

    #[test]
    fn test_api_error_from_sketch_error() {
        let sketch_error = SketchError::InvalidParameter {
            name: "line_detail",
            value: 101.0,
            min: 0.0,
            max: 100.0,
        };
        let api_error: ApiError = sketch_error.into();
        assert!(matches!(api_error, ApiError::Sketch(_)));
        assert!(api_error.to_string().contains("line_detail"));
    }

    #[test]
    fn test_file_error_decode() {
        let error = FileError::Decode("not a PNG".to_string());
        assert_eq!(error.to_string(), "Cannot decode image: not a PNG");
    }

    #[test]
    fn test_file_error_write() {
        let error = FileError::Write("permission denied".to_string());
        assert_eq!(error.to_string(), "Cannot write file: permission denied");
    }

    #[test]
    fn test_api_error_into_response_status_codes() {
        let response = ApiError::NoImage.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError::NoPreview.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError::BadRequest("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::File(FileError::Decode("x".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::File(FileError::Encode("x".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::File(FileError::Write("x".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = ApiError::Sketch(SketchError::Dimension {
            width: 0,
            height: 0,
            reason: "width and height must be non-zero".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::Internal("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
