//! Irrigation planning models

use serde::{Deserialize, Serialize};

use super::WeatherInput;

/// Inputs for a daily irrigation plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrrigationRequest {
    pub weather: WeatherInput,
    pub crop_id: String,
    pub days_after_planting: u32,
    /// Soil type name; unknown names fall back to loamy
    pub soil_type: String,
    /// Rainfall over the recent window (mm)
    #[serde(default)]
    pub recent_rainfall_mm: f64,
    /// Soil-moisture deficit to make up (mm/day)
    #[serde(default)]
    pub soil_moisture_deficit_mm: f64,
    pub root_depth_cm: Option<f64>,
}

/// Discrete watering cadence
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind", content = "days")]
pub enum IrrigationFrequency {
    NotRequired,
    Daily,
    EveryNDays(u32),
}

impl std::fmt::Display for IrrigationFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IrrigationFrequency::NotRequired => write!(f, "Not required"),
            IrrigationFrequency::Daily => write!(f, "Daily"),
            IrrigationFrequency::EveryNDays(n) => write!(f, "Every {} days", n),
        }
    }
}

/// Daily irrigation plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrrigationPlan {
    pub crop_id: String,
    pub growth_stage: GrowthStage,
    /// Reference evapotranspiration (mm/day)
    pub et0_mm: f64,
    pub kc: f64,
    /// Crop evapotranspiration (mm/day)
    pub etc_mm: f64,
    /// Effective rainfall spread per day (mm/day)
    pub effective_rainfall_mm: f64,
    pub net_irrigation_mm: f64,
    /// Gross irrigation need after system losses (mm/day)
    pub irrigation_need_mm: f64,
    pub interval_days: u32,
    pub frequency: IrrigationFrequency,
    pub frequency_label: String,
    pub amount_per_irrigation_mm: f64,
    pub applications_per_week: f64,
    pub weekly_total_mm: f64,
}

/// FAO-56 growth stage of a crop on a given day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GrowthStage {
    Initial,
    Development,
    Mid,
    Late,
    Fallow,
}
