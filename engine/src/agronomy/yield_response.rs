//! FAO-33 seasonal yield response to water

use serde::Serialize;

use super::crop_coefficient::kc_for_day;
use super::irrigation::effective_rainfall;
use crate::models::{CropProfile, SoilProfile, YieldFactors};
use crate::types::{NutrientLevel, SoilType};
use crate::validation::non_negative;

/// Days per month when spreading seasonal rainfall
pub const DAYS_PER_MONTH: f64 = 30.0;
pub const INCOMPATIBLE_SOIL_FACTOR: f64 = 0.85;
pub const OUT_OF_RANGE_TEMPERATURE_FACTOR: f64 = 0.7;

/// Season-level conditions of a field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonConditions {
    pub soil_type: SoilType,
    pub land_size_ha: f64,
    pub temperature_c: f64,
    pub rainfall_mm: f64,
    pub irrigation_mm: f64,
    pub nutrient_level: NutrientLevel,
    pub seasonal_et0_mm: Option<f64>,
}

/// Unrounded yield estimate
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YieldEstimate {
    pub estimated_kg: f64,
    pub potential_kg: f64,
    pub gap_percent: f64,
    pub factors: YieldFactors,
}

/// Seasonal ETc, from a mean daily ET0 and the Kc curve when known
pub fn seasonal_crop_et(crop: &CropProfile, seasonal_et0_mm: Option<f64>) -> f64 {
    match seasonal_et0_mm {
        Some(et0) => {
            let et0 = non_negative(et0);
            (1..=crop.total_growth_days())
                .map(|day| et0 * kc_for_day(crop, day))
                .sum()
        }
        None => non_negative(crop.seasonal_water_requirement_mm),
    }
}

/// Effective part of a seasonal rainfall total, applied month by month
pub fn seasonal_effective_rainfall(rainfall_mm: f64, growth_days: u32) -> f64 {
    let months = (growth_days as f64 / DAYS_PER_MONTH).ceil().max(1.0);
    effective_rainfall(non_negative(rainfall_mm) / months) * months
}

/// Fractional yield loss from water stress
pub fn water_stress_reduction(ky: f64, actual_et_mm: f64, seasonal_etc_mm: f64) -> f64 {
    if seasonal_etc_mm <= 0.0 {
        return 0.0;
    }
    let deficit = (1.0 - actual_et_mm / seasonal_etc_mm).max(0.0);
    (ky * deficit).clamp(0.0, 1.0)
}

/// Estimate the harvest of `crop` under `conditions`
pub fn estimate_yield(crop: &CropProfile, soil: &SoilProfile, conditions: &SeasonConditions) -> YieldEstimate {
    let potential_kg = non_negative(crop.potential_yield_kg_ha) * non_negative(conditions.land_size_ha);

    let seasonal_etc_mm = seasonal_crop_et(crop, conditions.seasonal_et0_mm);
    let rainfall_mm = non_negative(conditions.rainfall_mm);
    let available_water_mm = seasonal_effective_rainfall(rainfall_mm, crop.total_growth_days())
        + non_negative(conditions.irrigation_mm) * soil.irrigation_efficiency;
    let actual_et_mm = available_water_mm.min(seasonal_etc_mm);
    let reduction = water_stress_reduction(crop.ky, actual_et_mm, seasonal_etc_mm);

    let soil_factor = if crop.is_soil_compatible(conditions.soil_type) {
        1.0
    } else {
        INCOMPATIBLE_SOIL_FACTOR
    };
    let nutrient_factor = conditions.nutrient_level.yield_factor();
    let temperature_factor = if crop.temperature_range_c.contains(conditions.temperature_c) {
        1.0
    } else {
        OUT_OF_RANGE_TEMPERATURE_FACTOR
    };

    let estimated_kg = (potential_kg * (1.0 - reduction) * soil_factor * nutrient_factor * temperature_factor)
        .clamp(0.0, potential_kg);
    let gap_percent = if potential_kg > 0.0 {
        (potential_kg - estimated_kg) / potential_kg * 100.0
    } else {
        0.0
    };

    YieldEstimate {
        estimated_kg,
        potential_kg,
        gap_percent,
        factors: YieldFactors {
            seasonal_etc_mm,
            available_water_mm,
            actual_et_mm,
            water_stress_reduction: reduction,
            soil_factor,
            nutrient_factor,
            temperature_factor,
            rainfall_within_tolerance: crop.rainfall_range_mm.contains(rainfall_mm),
        },
    }
}
