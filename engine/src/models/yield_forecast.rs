//! Yield forecast models

use serde::{Deserialize, Serialize};

use crate::types::NutrientLevel;

/// Inputs for a seasonal yield forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YieldRequest {
    pub crop_id: String,
    pub soil_type: String,
    /// Cultivated area (ha)
    pub land_size_ha: f64,
    /// Seasonal mean temperature (°C)
    pub temperature_c: f64,
    /// Seasonal rainfall (mm)
    pub rainfall_mm: f64,
    /// Seasonal irrigation applied (mm)
    #[serde(default)]
    pub irrigation_mm: f64,
    #[serde(default)]
    pub nutrient_level: NutrientLevel,
    /// Mean daily ET0 over the season; derives seasonal ETc from the Kc curve
    pub seasonal_et0_mm: Option<f64>,
}

/// Factors that moved the estimate away from potential
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YieldFactors {
    pub seasonal_etc_mm: f64,
    pub available_water_mm: f64,
    pub actual_et_mm: f64,
    /// Fractional loss from water stress (0-1)
    pub water_stress_reduction: f64,
    pub soil_factor: f64,
    pub nutrient_factor: f64,
    pub temperature_factor: f64,
    pub rainfall_within_tolerance: bool,
}

/// Seasonal yield forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YieldForecast {
    pub crop_id: String,
    /// Estimated harvest (kg)
    pub estimated_yield_kg: f64,
    /// Potential harvest under no stress (kg)
    pub potential_yield_kg: f64,
    pub yield_gap_percent: f64,
    pub factors: YieldFactors,
}
