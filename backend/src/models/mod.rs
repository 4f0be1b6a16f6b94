//! Request and response models for the Agro Advisor API
//!
//! Re-exports models from the engine crate and adds the validated request
//! bodies accepted at the HTTP boundary.

pub use agro_engine::models::*;
pub use agro_engine::types::*;

use serde::{Deserialize, Serialize};
use validator::Validate;

// ============================================================================
// Request Bodies
// ============================================================================

/// Body of `POST /irrigation-plan`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct IrrigationPlanInput {
    #[validate(length(min = 1, message = "crop_id must not be empty"))]
    pub crop_id: String,
    pub weather: WeatherInput,
    #[serde(default)]
    pub days_after_planting: u32,
    #[serde(default = "default_soil")]
    pub soil_type: String,
    #[serde(default)]
    pub recent_rainfall_mm: f64,
    #[serde(default)]
    pub soil_moisture_deficit_mm: f64,
    pub root_depth_cm: Option<f64>,
}

impl From<IrrigationPlanInput> for IrrigationRequest {
    fn from(input: IrrigationPlanInput) -> Self {
        Self {
            weather: input.weather,
            crop_id: input.crop_id,
            days_after_planting: input.days_after_planting,
            soil_type: input.soil_type,
            recent_rainfall_mm: input.recent_rainfall_mm,
            soil_moisture_deficit_mm: input.soil_moisture_deficit_mm,
            root_depth_cm: input.root_depth_cm,
        }
    }
}

/// Body of `POST /yield-forecast`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct YieldForecastInput {
    #[validate(length(min = 1, message = "crop_id must not be empty"))]
    pub crop_id: String,
    #[serde(default = "default_soil")]
    pub soil_type: String,
    pub land_size_ha: f64,
    pub temperature_c: f64,
    pub rainfall_mm: f64,
    #[serde(default)]
    pub irrigation_mm: f64,
    #[serde(default)]
    pub nutrient_level: NutrientLevel,
    pub seasonal_et0_mm: Option<f64>,
}

impl From<YieldForecastInput> for YieldRequest {
    fn from(input: YieldForecastInput) -> Self {
        Self {
            crop_id: input.crop_id,
            soil_type: input.soil_type,
            land_size_ha: input.land_size_ha,
            temperature_c: input.temperature_c,
            rainfall_mm: input.rainfall_mm,
            irrigation_mm: input.irrigation_mm,
            nutrient_level: input.nutrient_level,
            seasonal_et0_mm: input.seasonal_et0_mm,
        }
    }
}

/// Rainfall given either as a category or as millimetres over the recent window
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RainfallInput {
    Category(RainfallCategory),
    Millimetres(f64),
}

impl RainfallInput {
    pub fn category(&self) -> RainfallCategory {
        match self {
            RainfallInput::Category(category) => *category,
            RainfallInput::Millimetres(mm) => RainfallCategory::from_mm(*mm),
        }
    }
}

/// Body of `POST /disease-risk`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DiseaseRiskInput {
    #[validate(length(min = 1, message = "crop_id must not be empty"))]
    pub crop_id: String,
    pub temperature_c: f64,
    pub humidity_percent: Option<f64>,
    pub rainfall: RainfallInput,
    #[serde(default = "default_soil")]
    pub soil_type: String,
    #[serde(default)]
    pub history: Vec<String>,
}

impl From<DiseaseRiskInput> for DiseaseRiskRequest {
    fn from(input: DiseaseRiskInput) -> Self {
        Self {
            crop_id: input.crop_id,
            temperature_c: input.temperature_c,
            humidity_percent: input.humidity_percent,
            rainfall: input.rainfall.category(),
            soil_type: input.soil_type,
            history: input.history,
        }
    }
}

/// Body of `POST /assessment`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AssessmentInput {
    #[validate(length(min = 1, message = "crop_id must not be empty"))]
    pub crop_id: String,
    #[serde(default = "default_soil")]
    pub soil_type: String,
    pub land_size_ha: f64,
    #[serde(default)]
    pub days_after_planting: u32,
    pub weather: WeatherInput,
    #[serde(default)]
    pub recent_rainfall_mm: f64,
    #[serde(default)]
    pub seasonal_rainfall_mm: f64,
    #[serde(default)]
    pub seasonal_irrigation_mm: f64,
    #[serde(default)]
    pub nutrient_level: NutrientLevel,
    pub irrigation_method: Option<IrrigationMethod>,
    pub rainfall_category: Option<RainfallCategory>,
    #[serde(default)]
    pub disease_history: Vec<String>,
    pub root_depth_cm: Option<f64>,
}

impl From<AssessmentInput> for FarmContext {
    fn from(input: AssessmentInput) -> Self {
        Self {
            crop_id: input.crop_id,
            soil_type: input.soil_type,
            land_size_ha: input.land_size_ha,
            days_after_planting: input.days_after_planting,
            weather: input.weather,
            recent_rainfall_mm: input.recent_rainfall_mm,
            seasonal_rainfall_mm: input.seasonal_rainfall_mm,
            seasonal_irrigation_mm: input.seasonal_irrigation_mm,
            nutrient_level: input.nutrient_level,
            irrigation_method: input.irrigation_method,
            rainfall_category: input.rainfall_category,
            disease_history: input.disease_history,
            root_depth_cm: input.root_depth_cm,
        }
    }
}

fn default_soil() -> String {
    SoilType::default().to_string()
}

// ============================================================================
// Responses
// ============================================================================

/// A crop profile as served by `GET /crops/:crop_id`
#[derive(Debug, Clone, Serialize)]
pub struct CropDetail {
    /// Id that was requested
    pub requested_id: String,
    /// True when the generic profile stands in for an unknown id
    pub is_fallback: bool,
    pub crop: CropProfile,
}
