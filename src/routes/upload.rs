use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::extract::ExtractError;
use crate::models::{AppState, ErrorResponse, UploadResponse};
use crate::uploads::TempUpload;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/upload", post(upload_file))
        .with_state(state)
}

/// Accept one multipart file, extract its text, and return it. The upload
/// only ever lives in a temp file scoped to this handler; the `TempUpload`
/// guard removes it on success, extraction failure, and cancellation alike.
async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Response> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidRequest(format!("failed to read multipart body: {e}")))?
        .ok_or_else(|| AppError::InvalidRequest("no file uploaded".to_string()))?;

    let filename = field.file_name().unwrap_or("unknown").to_string();
    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::InvalidRequest(format!("failed to read file: {e}")))?;

    info!(filename = %filename, bytes = data.len(), "File upload received");

    let extension = Path::new(&filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    let temp = TempUpload::create(&state.config.upload.dir, &extension, &data)?;
    let path = temp.path().to_path_buf();
    let extractor = Arc::clone(&state.extractor);

    let result = tokio::task::spawn_blocking(move || extractor.extract(&path, &extension))
        .await
        .map_err(|e| AppError::Internal(format!("extraction task failed: {e}")))?;

    // Remove the temp file before the response leaves the handler.
    drop(temp);

    match result {
        Ok(text) => Ok(Json(UploadResponse { text }).into_response()),
        Err(ExtractError::UnsupportedType(ext)) => {
            warn!(filename = %filename, extension = %ext, "Unsupported file type");
            // The front-end keys on the `error` field of an OK response,
            // so the status stays 200 here.
            Ok(Json(ErrorResponse {
                error: "Unsupported file type".to_string(),
            })
            .into_response())
        }
        Err(e) => Err(e.into()),
    }
}
