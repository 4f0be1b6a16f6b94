//! HTTP handlers for irrigation planning

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::models::{IrrigationPlan, IrrigationPlanInput};
use crate::services::AdvisoryService;
use crate::AppState;

/// Compute a daily irrigation plan
pub async fn compute_irrigation_plan(
    State(state): State<AppState>,
    Json(input): Json<IrrigationPlanInput>,
) -> AppResult<Json<IrrigationPlan>> {
    let service = AdvisoryService::new(state.engine);
    let plan = service.irrigation_plan(input)?;
    Ok(Json(plan))
}
