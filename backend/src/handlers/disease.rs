//! HTTP handlers for disease and pest risk

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::models::{DiseaseRiskAssessment, DiseaseRiskInput};
use crate::services::AdvisoryService;
use crate::AppState;

/// Assess disease and pest risk for a crop
pub async fn compute_disease_risk(
    State(state): State<AppState>,
    Json(input): Json<DiseaseRiskInput>,
) -> AppResult<Json<DiseaseRiskAssessment>> {
    let service = AdvisoryService::new(state.engine);
    let assessment = service.disease_risk(input)?;
    Ok(Json(assessment))
}
