//! Axum route handlers for the Résumé API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::extract::ValidatedJson;
use crate::models::resume::ResumeRecord;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SaveResumeResponse {
    pub message: String,
    pub resume_id: String,
    pub saved_at: String,
}

#[derive(Debug, Serialize)]
pub struct ResumeListResponse {
    pub resumes: Vec<String>,
    pub count: usize,
}

/// POST /save-resume
pub async fn handle_save_resume(
    State(state): State<AppState>,
    ValidatedJson(record): ValidatedJson<ResumeRecord>,
) -> Result<Json<SaveResumeResponse>, AppError> {
    let saved = state.store.save(record).await?;
    tracing::debug!(resume_id = %saved.id, path = %saved.path.display(), "Resume persisted");
    Ok(Json(SaveResumeResponse {
        message: "Resume saved successfully".to_string(),
        resume_id: saved.id,
        saved_at: saved.saved_at,
    }))
}

/// GET /resumes
pub async fn handle_list_resumes(State(state): State<AppState>) -> Json<ResumeListResponse> {
    let resumes = state.store.list().await;
    let count = resumes.len();
    Json(ResumeListResponse { resumes, count })
}

/// GET /resume/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResumeRecord>, AppError> {
    let record = state.store.get(&id).await?;
    Ok(Json(record))
}
