//! PDF upload endpoint.

use axum::extract::multipart::{Multipart, MultipartError, MultipartRejection};
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Router, routing::post};
use finmerge_core::upload::UploadedFile;
use finmerge_core::workbook::{MERGED_FILENAME, XLSX_CONTENT_TYPE};
use finmerge_shared::AppError;
use tracing::info;

use crate::{ApiError, AppState};

/// Multipart field carrying the PDFs.
pub const FILES_FIELD: &str = "files[]";

/// Accepts `files[]` and responds with the merged workbook.
async fn upload_files(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, ApiError> {
    let Ok(multipart) = multipart else {
        return Err(AppError::Validation("No files provided".to_string()).into());
    };

    let files = collect_files(multipart).await?;
    let Some(first) = files.first() else {
        return Err(AppError::Validation("No files provided".to_string()).into());
    };
    if first.filename.is_empty() {
        return Err(AppError::Validation("No files selected".to_string()).into());
    }

    info!(files = files.len(), "Processing upload batch");
    let output = state.processor.process(files).await?;
    info!(documents = ?output.documents, "Upload batch complete");

    let disposition = format!("attachment; filename=\"{MERGED_FILENAME}\"");
    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        output.workbook,
    )
        .into_response())
}

/// Reads every `files[]` part in order; other fields are ignored.
async fn collect_files(mut multipart: Multipart) -> Result<Vec<UploadedFile>, ApiError> {
    let mut files = Vec::new();
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILES_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let content = field.bytes().await.map_err(multipart_error)?;
        files.push(UploadedFile::new(filename, content.to_vec()));
    }
    Ok(files)
}

fn multipart_error(err: MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text()).into()
    } else {
        AppError::Validation(err.body_text()).into()
    }
}

/// Creates upload routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/upload", post(upload_files))
}
