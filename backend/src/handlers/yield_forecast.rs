//! HTTP handlers for yield forecasting

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::models::{YieldForecast, YieldForecastInput};
use crate::services::AdvisoryService;
use crate::AppState;

/// Forecast the seasonal yield of a field
pub async fn compute_yield_forecast(
    State(state): State<AppState>,
    Json(input): Json<YieldForecastInput>,
) -> AppResult<Json<YieldForecast>> {
    let service = AdvisoryService::new(state.engine);
    let forecast = service.yield_forecast(input)?;
    Ok(Json(forecast))
}
