//! HTTP handlers for crop reference endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppResult;
use crate::models::{CropDetail, CropSummary};
use crate::services::AdvisoryService;
use crate::AppState;

/// List all known crops
pub async fn list_crops(State(state): State<AppState>) -> Json<Vec<CropSummary>> {
    let service = AdvisoryService::new(state.engine);
    Json(service.list_crops())
}

/// Get a crop profile by ID
pub async fn get_crop(
    State(state): State<AppState>,
    Path(crop_id): Path<String>,
) -> AppResult<Json<CropDetail>> {
    let service = AdvisoryService::new(state.engine);
    let detail = service.get_crop(&crop_id)?;
    Ok(Json(detail))
}
