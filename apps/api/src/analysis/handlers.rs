//! Axum route handlers for the Analysis API.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::analysis::enrichment::skill_relationships;
use crate::analysis::pipeline::run_analysis;
use crate::errors::AppError;
use crate::models::profile::{AnalyzeProfile, SkillRelationships};
use crate::models::request::AnalyzeRequest;
use crate::state::AppState;

/// POST /api/v1/analyze
///
/// Builds a full profile from posting text (or a fetched URL) and an optional resume.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeProfile>, AppError> {
    let Json(request) = payload?;
    let profile = run_analysis(
        Arc::clone(&state.pipeline),
        state.fetcher.as_ref(),
        request,
    )
    .await?;
    Ok(Json(profile))
}

/// GET /api/v1/skills/:name/relationships
pub async fn handle_skill_relationships(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<SkillRelationships>, AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("skill name cannot be empty".to_string()));
    }
    Ok(Json(skill_relationships(state.pipeline.lexicon(), &name)))
}
