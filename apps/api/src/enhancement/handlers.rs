//! Axum route handlers for the Enhancement API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::enhancement::engine::EnhancementResult;
use crate::errors::AppError;
use crate::extract::ValidatedJson;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    pub section: String,
    pub content: String,
}

/// POST /ai-enhance
pub async fn handle_enhance(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<EnhanceRequest>,
) -> Result<Json<EnhancementResult>, AppError> {
    let result = state
        .enhancer
        .enhance(&req.section, &req.content)
        .await
        .map_err(|e| AppError::Enhancement(e.to_string()))?;

    tracing::debug!(
        section = %req.section,
        suggestions = result.suggestions.len(),
        "Section enhanced"
    );
    Ok(Json(result))
}
