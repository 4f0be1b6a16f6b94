//! HTTP handlers for the full farm assessment

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::models::{AssessmentInput, FarmAssessment};
use crate::services::AdvisoryService;
use crate::AppState;

/// Run irrigation, yield, disease and eco scoring for one field
pub async fn assess_farm(
    State(state): State<AppState>,
    Json(input): Json<AssessmentInput>,
) -> AppResult<Json<FarmAssessment>> {
    let service = AdvisoryService::new(state.engine);
    let assessment = service.assessment(input)?;
    Ok(Json(assessment))
}
