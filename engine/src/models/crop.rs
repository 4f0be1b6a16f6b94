//! Crop reference profiles

use serde::{Deserialize, Serialize};

use crate::types::{SoilType, ValueRange};

/// Length in days of each FAO-56 growth stage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GrowthStages {
    pub initial_days: u32,
    pub development_days: u32,
    pub mid_days: u32,
    pub late_days: u32,
}

impl GrowthStages {
    pub const fn new(initial: u32, development: u32, mid: u32, late: u32) -> Self {
        Self {
            initial_days: initial,
            development_days: development,
            mid_days: mid,
            late_days: late,
        }
    }

    /// Total growth duration in days
    pub fn total_days(&self) -> u32 {
        self.initial_days
            .saturating_add(self.development_days)
            .saturating_add(self.mid_days)
            .saturating_add(self.late_days)
    }
}

/// Stage-anchored crop coefficients
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CropCoefficients {
    pub kc_initial: f64,
    pub kc_mid: f64,
    pub kc_end: f64,
}

/// Baseline nutrient requirement (kg/ha)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct NutrientRequirement {
    pub nitrogen_kg_ha: f64,
    pub phosphorus_kg_ha: f64,
    pub potassium_kg_ha: f64,
}

/// Agronomic profile of a crop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropProfile {
    pub id: String,
    pub name: String,
    pub stages: GrowthStages,
    pub coefficients: CropCoefficients,
    /// FAO-33 yield response factor
    pub ky: f64,
    pub temperature_range_c: ValueRange,
    /// Seasonal rainfall tolerance (mm)
    pub rainfall_range_mm: ValueRange,
    pub compatible_soils: Vec<SoilType>,
    pub potential_yield_kg_ha: f64,
    /// Seasonal crop water requirement (mm)
    pub seasonal_water_requirement_mm: f64,
    #[serde(default)]
    pub nutrients: NutrientRequirement,
}

impl CropProfile {
    pub fn is_soil_compatible(&self, soil: SoilType) -> bool {
        self.compatible_soils.contains(&soil)
    }

    pub fn total_growth_days(&self) -> u32 {
        self.stages.total_days()
    }
}

/// Short listing entry for a crop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropSummary {
    pub id: String,
    pub name: String,
    pub growth_days: u32,
    pub potential_yield_kg_ha: f64,
}

impl From<&CropProfile> for CropSummary {
    fn from(crop: &CropProfile) -> Self {
        Self {
            id: crop.id.clone(),
            name: crop.name.clone(),
            growth_days: crop.total_growth_days(),
            potential_yield_kg_ha: crop.potential_yield_kg_ha,
        }
    }
}
