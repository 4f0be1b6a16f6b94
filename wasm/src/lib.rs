//! WebAssembly module for the Agro Advisor platform
//!
//! Provides client-side computation for:
//! - Irrigation planning
//! - Yield forecasting
//! - Disease risk assessment
//! - Eco scoring and the full farm assessment
//!
//! Every function takes and returns JSON strings and runs the built-in
//! catalog with the default policy, so the app keeps working offline.

use std::sync::OnceLock;

use agro_engine::{
    AgronomicEngine, CropSummary, DiseaseRiskRequest, EcoScoreInput, FarmContext,
    IrrigationRequest, ReferenceTables, YieldRequest,
};
use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::prelude::*;

// Re-export engine types for use in JavaScript
pub use agro_engine::models::*;
pub use agro_engine::types::*;

fn engine() -> &'static AgronomicEngine {
    static ENGINE: OnceLock<AgronomicEngine> = OnceLock::new();
    ENGINE.get_or_init(AgronomicEngine::default)
}

fn parse<T: DeserializeOwned>(json: &str, what: &str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid {} JSON: {}", what, e))
}

fn render<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization failed: {}", e))
}

fn to_js(result: Result<String, String>) -> Result<String, JsValue> {
    result.map_err(|msg| js_sys::Error::new(&msg).into())
}

// ============================================================================
// JSON Entry Points
// ============================================================================

fn irrigation_plan_json(request_json: &str) -> Result<String, String> {
    let request: IrrigationRequest = parse(request_json, "irrigation request")?;
    let plan = engine()
        .compute_irrigation_plan(&request)
        .map_err(|e| e.to_string())?;
    render(&plan)
}

fn yield_forecast_json(request_json: &str) -> Result<String, String> {
    let request: YieldRequest = parse(request_json, "yield request")?;
    let forecast = engine()
        .compute_yield_forecast(&request)
        .map_err(|e| e.to_string())?;
    render(&forecast)
}

fn disease_risk_json(request_json: &str) -> Result<String, String> {
    let request: DiseaseRiskRequest = parse(request_json, "disease risk request")?;
    let assessment = engine()
        .compute_disease_risk(&request)
        .map_err(|e| e.to_string())?;
    render(&assessment)
}

fn eco_score_json(input_json: &str) -> Result<String, String> {
    let input: EcoScoreInput = parse(input_json, "eco score input")?;
    render(&engine().compute_eco_score(&input))
}

fn assess_farm_json(context_json: &str) -> Result<(String, bool), String> {
    let context: FarmContext = parse(context_json, "farm context")?;
    let assessment = engine().assess_farm(&context).map_err(|e| e.to_string())?;
    Ok((render(&assessment)?, assessment.used_fallback_crop))
}

fn list_crops_json() -> Result<String, String> {
    let crops: Vec<CropSummary> = engine()
        .tables()
        .crops()
        .into_iter()
        .map(CropSummary::from)
        .collect();
    render(&crops)
}

// ============================================================================
// WASM Bindings
// ============================================================================

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    engine();
}

/// Compute a daily irrigation plan
#[wasm_bindgen]
pub fn compute_irrigation_plan(request_json: &str) -> Result<String, JsValue> {
    to_js(irrigation_plan_json(request_json))
}

/// Forecast the seasonal yield
#[wasm_bindgen]
pub fn compute_yield_forecast(request_json: &str) -> Result<String, JsValue> {
    to_js(yield_forecast_json(request_json))
}

/// Assess disease and pest risk
#[wasm_bindgen]
pub fn compute_disease_risk(request_json: &str) -> Result<String, JsValue> {
    to_js(disease_risk_json(request_json))
}

/// Score the sustainability of the current practice
#[wasm_bindgen]
pub fn compute_eco_score(input_json: &str) -> Result<String, JsValue> {
    to_js(eco_score_json(input_json))
}

/// Run the full assessment pipeline for one field
#[wasm_bindgen]
pub fn assess_farm(context_json: &str) -> Result<String, JsValue> {
    let (json, used_fallback) =
        assess_farm_json(context_json).map_err(|msg| JsValue::from(js_sys::Error::new(&msg)))?;
    if used_fallback {
        web_sys::console::warn_1(&"Unknown crop, assessed with the generic profile".into());
    }
    Ok(json)
}

/// List the built-in crops
#[wasm_bindgen]
pub fn list_crops() -> Result<String, JsValue> {
    to_js(list_crops_json())
}
