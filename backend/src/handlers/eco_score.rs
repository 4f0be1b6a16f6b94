//! HTTP handlers for the sustainability score

use axum::{extract::State, Json};

use crate::models::{EcoScore, EcoScoreInput};
use crate::services::AdvisoryService;
use crate::AppState;

/// Score the sustainability of the current practice
pub async fn compute_eco_score(
    State(state): State<AppState>,
    Json(input): Json<EcoScoreInput>,
) -> Json<EcoScore> {
    let service = AdvisoryService::new(state.engine);
    Json(service.eco_score(input))
}
