//! HTTP mapping for application errors.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use finmerge_core::BatchError;
use finmerge_shared::AppError;
use serde_json::json;
use tracing::error;

/// Wrapper that renders an [`AppError`] as a JSON response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<BatchError> for ApiError {
    fn from(err: BatchError) -> Self {
        Self(match err {
            BatchError::NoDataExtracted => AppError::NoDataExtracted,
            BatchError::Render(e) => AppError::Render(e.to_string()),
        })
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        }

        (
            status,
            Json(json!({
                "error": self.0.to_string(),
                "code": self.0.error_code(),
            })),
        )
            .into_response()
    }
}
