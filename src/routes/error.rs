use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::services::ServiceError;

/// Error type for HTTP handlers. Produces `{success: false, code, error}`
/// bodies; upload failures also name the rejected `file`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMedia(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, file) = match self {
            ApiError::Service(err) => match err {
                ServiceError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg, None)
                }
                ServiceError::Upload { file, comment } => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "UPLOAD_FAILED",
                    comment,
                    Some(file),
                ),
                ServiceError::Backend(msg) => (StatusCode::BAD_GATEWAY, "BACKEND_ERROR", msg, None),
                ServiceError::Transport(err) => {
                    tracing::error!(error = %err, "FaceX transport error");
                    (
                        StatusCode::BAD_GATEWAY,
                        "BACKEND_UNAVAILABLE",
                        "FaceX is unavailable".to_string(),
                        None,
                    )
                }
            },
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg, None),
            ApiError::UnsupportedMedia(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_MEDIA_TYPE",
                msg,
                None,
            ),
        };

        let mut body = json!({
            "success": false,
            "code": code,
            "error": message,
        });
        if let Some(file) = file {
            body["file"] = json!(file);
        }

        (status, axum::Json(body)).into_response()
    }
}

impl From<garde::Report> for ApiError {
    fn from(report: garde::Report) -> Self {
        ApiError::Service(ServiceError::Validation(report.to_string()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<axum::extract::multipart::MultipartError> for ApiError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        ApiError::BadRequest(err.body_text())
    }
}
