//! Route definitions for the Agro Advisor API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Reference data
        .nest("/crops", crop_routes())
        // Advisory calculators
        .route("/irrigation-plan", post(handlers::compute_irrigation_plan))
        .route("/yield-forecast", post(handlers::compute_yield_forecast))
        .route("/disease-risk", post(handlers::compute_disease_risk))
        .route("/eco-score", post(handlers::compute_eco_score))
        .route("/assessment", post(handlers::assess_farm))
}

/// Crop reference routes
fn crop_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_crops))
        .route("/:crop_id", get(handlers::get_crop))
}
