// src/candidates/handlers/candidates.rs

use axum::{
    extract::{
        multipart::MultipartRejection, rejection::JsonRejection, Extension, Multipart, Path,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::candidates::models::{Candidate, CandidateInput, MessageResponse};
use crate::candidates::services::CandidatesService;
use crate::candidates::validators::validate_candidate_input;
use crate::common::{ApiError, AppState};

/// Multipart field carrying the resume file
const RESUME_FIELD: &str = "resume";

struct UploadedResume {
    filename: Option<String>,
    data: bytes::Bytes,
}

/// POST /candidates - Create a candidate from a multipart form
pub async fn create_candidate(
    Extension(state): Extension<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let mut multipart =
        multipart.map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {}", e)))?;
    let mut fields = Map::new();
    let mut resume: Option<UploadedResume> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if name == RESUME_FIELD {
            let filename = field.file_name().map(str::to_string);
            let data = field
                .bytes()
                .await
                .map_err(|_| ApiError::BadRequest("Invalid file".to_string()))?;

            if data.is_empty() {
                continue;
            }
            resume = Some(UploadedResume { filename, data });
        } else if !name.is_empty() {
            let value = field.text().await.map_err(|e| {
                ApiError::BadRequest(format!("Failed to read field {}: {}", name, e))
            })?;
            fields.insert(name, Value::String(value));
        }
    }

    let mut input: CandidateInput = serde_json::from_value(Value::Object(fields))
        .map_err(|e| ApiError::BadRequest(format!("Invalid candidate fields: {}", e)))?;

    // Nothing is written, file included, until the input is known to be valid
    if let Err(e) = validate_candidate_input(&input) {
        warn!(error = %e, "Rejected candidate submission");
        return Err(e);
    }

    input.resume_url = match &resume {
        Some(upload) => {
            let stored = state
                .storage
                .store(upload.filename.as_deref(), &upload.data)
                .await?;
            info!(filename = %stored.filename, "Resume attached to candidate submission");
            stored.url
        }
        None => String::new(),
    };

    let service = CandidatesService::new(state.db.clone());
    let candidate = service.create_candidate(input).await?;

    Ok((StatusCode::CREATED, Json(candidate)))
}

/// GET /candidates - List every candidate
pub async fn list_candidates(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<Candidate>>, ApiError> {
    let service = CandidatesService::new(state.db.clone());
    let candidates = service.get_all_candidates().await?;

    Ok(Json(candidates))
}

/// GET /candidates/:id - Get a single candidate
pub async fn get_candidate(
    Extension(state): Extension<AppState>,
    Path(candidate_id): Path<String>,
) -> Result<Json<Candidate>, ApiError> {
    let service = CandidatesService::new(state.db.clone());
    let candidate = service.get_candidate_by_id(&candidate_id).await?;

    Ok(Json(candidate))
}

/// PUT /candidates/:id - Replace all fields of a candidate
pub async fn update_candidate(
    Extension(state): Extension<AppState>,
    Path(candidate_id): Path<String>,
    payload: Result<Json<CandidateInput>, JsonRejection>,
) -> Result<Json<Candidate>, ApiError> {
    let Json(input) =
        payload.map_err(|e| ApiError::BadRequest(format!("Invalid candidate fields: {}", e)))?;

    let service = CandidatesService::new(state.db.clone());
    let candidate = service.update_candidate(&candidate_id, input).await?;

    Ok(Json(candidate))
}

/// DELETE /candidates/:id - Delete a candidate
pub async fn delete_candidate(
    Extension(state): Extension<AppState>,
    Path(candidate_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let service = CandidatesService::new(state.db.clone());
    service.delete_candidate(&candidate_id).await?;

    info!(candidate_id = %candidate_id, "Candidate removed via API");

    Ok(Json(MessageResponse {
        message: "Candidate deleted successfully".to_string(),
    }))
}
