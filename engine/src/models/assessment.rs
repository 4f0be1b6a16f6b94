//! Combined farm assessment models

use serde::{Deserialize, Serialize};

use super::{DiseaseRiskAssessment, EcoScore, IrrigationPlan, WeatherInput, YieldForecast};
use crate::types::{IrrigationMethod, NutrientLevel, RainfallCategory};

/// Everything known about one field for a full pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmContext {
    pub crop_id: String,
    pub soil_type: String,
    pub land_size_ha: f64,
    pub days_after_planting: u32,
    pub weather: WeatherInput,
    /// Rainfall over the recent window (mm)
    #[serde(default)]
    pub recent_rainfall_mm: f64,
    /// Seasonal rainfall (mm)
    pub seasonal_rainfall_mm: f64,
    /// Seasonal irrigation applied (mm)
    #[serde(default)]
    pub seasonal_irrigation_mm: f64,
    #[serde(default)]
    pub nutrient_level: NutrientLevel,
    pub irrigation_method: Option<IrrigationMethod>,
    /// Overrides the category derived from recent rainfall
    pub rainfall_category: Option<RainfallCategory>,
    #[serde(default)]
    pub disease_history: Vec<String>,
    pub root_depth_cm: Option<f64>,
}

/// Output of the full pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmAssessment {
    pub crop_id: String,
    /// True when the generic profile stood in for an unknown crop
    pub used_fallback_crop: bool,
    pub irrigation: IrrigationPlan,
    pub yield_forecast: YieldForecast,
    pub disease_risk: DiseaseRiskAssessment,
    pub eco_score: EcoScore,
}
