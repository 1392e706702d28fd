use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use ocat_core::models::assessment::{Assessment, CreateAssessmentRequest, NewAssessment};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

pub async fn list_assessments(
    State(state): State<AppState>,
) -> Result<Json<Vec<Assessment>>, ApiError> {
    let assessments = state.assessments.find_all().await?;
    Ok(Json(assessments))
}

/// The client computes `score` and `riskLevel`. They are not recomputed
/// here (the answers never reach the service) but must satisfy the model
/// invariants and name a known instrument.
pub async fn create_assessment(
    State(state): State<AppState>,
    payload: Result<Json<CreateAssessmentRequest>, JsonRejection>,
) -> Result<Json<Assessment>, ApiError> {
    let Json(request) = payload?;
    let new = NewAssessment::try_from(request)?;
    ocat_instruments::require_instrument(new.instrument_type)?;

    let assessment = state.assessments.create(new).await?;
    Ok(Json(assessment))
}

pub async fn delete_assessment(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let Path(id) = id?;
    let deleted = state.assessments.delete(id).await?;
    Ok(Json(DeleteResponse { deleted }))
}
