//! Sustainability score models

use serde::{Deserialize, Serialize};

use crate::types::{IrrigationMethod, NutrientLevel, RiskLevel};

/// Inputs for the eco score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EcoScoreInput {
    /// Gross irrigation need (mm/day)
    pub irrigation_need_mm: f64,
    pub irrigation_method: Option<IrrigationMethod>,
    pub disease_level: RiskLevel,
    pub yield_gap_percent: f64,
    #[serde(default)]
    pub nutrient_level: NutrientLevel,
}

/// One line of the eco score checklist
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EcoAdjustment {
    pub label: String,
    pub delta: i32,
}

/// Sustainability score (0-100)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EcoScore {
    pub score: u8,
    pub adjustments: Vec<EcoAdjustment>,
}
