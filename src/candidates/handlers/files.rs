// src/candidates/handlers/files.rs
//! File serving for uploaded resumes

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
};

use crate::common::{ApiError, AppState};

/// GET /uploads/:filename - Serve a stored resume verbatim
pub async fn serve_upload(
    Extension(state): Extension<AppState>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let content = state.storage.read(&filename).await?;

    let content_type = infer::get(&content)
        .map(|kind| kind.mime_type())
        .unwrap_or_else(|| content_type_from_extension(&filename));

    Ok((
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, content_type)],
        content,
    ))
}

fn content_type_from_extension(filename: &str) -> &'static str {
    let lower = filename.to_ascii_lowercase();
    if lower.ends_with(".pdf") {
        "application/pdf"
    } else if lower.ends_with(".png") {
        "image/png"
    } else {
        "application/octet-stream"
    }
}
