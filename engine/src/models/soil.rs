//! Soil reference profiles

use serde::{Deserialize, Serialize};

use crate::types::SoilType;

/// Hydraulic and risk properties of a soil class
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoilProfile {
    pub soil_type: SoilType,
    /// Available water-holding capacity (mm per cm of root depth)
    pub water_holding_capacity_mm_per_cm: f64,
    /// Application efficiency of the irrigation system on this soil (0-1)
    pub irrigation_efficiency: f64,
    /// Base disease pressure attributed to the soil (0-100)
    pub disease_risk_score: f64,
}
