//! Boundary sanitisation and reference-data validation
//!
//! Numeric inputs are clamped into physically valid bounds rather than
//! rejected. Reference profiles, on the other hand, are checked strictly when
//! a catalog is loaded.

use crate::models::{CropProfile, DiseaseProfile, GrowthStages, SoilProfile};

// ============================================================================
// Input Sanitisation
// ============================================================================

/// Clamp to >= 0, mapping NaN to 0
pub fn non_negative(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0)
    }
}

/// Clamp a percentage to [0, 100], mapping NaN to 0
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Clamp a latitude to [-90, 90], mapping NaN to the equator
pub fn clamp_latitude(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-90.0, 90.0)
    }
}

/// Replace non-finite values with `fallback`
pub fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// Round to `decimals` places for reporting
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Validate that a required identifier is present
pub fn validate_identifier(id: &str) -> Result<(), &'static str> {
    if id.trim().is_empty() {
        return Err("Identifier must not be empty");
    }
    Ok(())
}

// ============================================================================
// Reference Data Validations
// ============================================================================

/// Maximum crop coefficient accepted in a profile
pub const MAX_KC: f64 = 1.5;
/// Longest growth duration accepted in a profile (two years)
pub const MAX_GROWTH_DAYS: u32 = 730;

/// Validate the id of a reference profile
///
/// Catalog keys are matched against trimmed lookups, so padded ids are
/// rejected.
pub fn validate_reference_id(id: &str) -> Result<(), &'static str> {
    validate_identifier(id)?;
    if id.trim() != id {
        return Err("Identifier must not have leading or trailing whitespace");
    }
    Ok(())
}

/// Validate growth-stage lengths
pub fn validate_growth_stages(stages: &GrowthStages) -> Result<(), &'static str> {
    let total = stages
        .initial_days
        .checked_add(stages.development_days)
        .and_then(|d| d.checked_add(stages.mid_days))
        .and_then(|d| d.checked_add(stages.late_days))
        .ok_or("Growth stages exceed the maximum growth duration")?;
    if total == 0 {
        return Err("Growth duration must be at least one day");
    }
    if total > MAX_GROWTH_DAYS {
        return Err("Growth stages exceed the maximum growth duration");
    }
    Ok(())
}

/// Validate a crop profile
pub fn validate_crop_profile(crop: &CropProfile) -> Result<(), &'static str> {
    validate_reference_id(&crop.id)?;
    validate_growth_stages(&crop.stages)?;
    let kc = &crop.coefficients;
    for value in [kc.kc_initial, kc.kc_mid, kc.kc_end] {
        if !(0.0..=MAX_KC).contains(&value) {
            return Err("Crop coefficients must be within [0, 1.5]");
        }
    }
    if !(crop.ky.is_finite() && crop.ky >= 0.0) {
        return Err("Yield response factor must be non-negative");
    }
    if !crop.temperature_range_c.is_well_ordered() {
        return Err("Temperature tolerance range is not well ordered");
    }
    if !crop.rainfall_range_mm.is_well_ordered() {
        return Err("Rainfall tolerance range is not well ordered");
    }
    if !(crop.potential_yield_kg_ha.is_finite() && crop.potential_yield_kg_ha >= 0.0) {
        return Err("Potential yield must be non-negative");
    }
    if !(crop.seasonal_water_requirement_mm.is_finite() && crop.seasonal_water_requirement_mm >= 0.0)
    {
        return Err("Seasonal water requirement must be non-negative");
    }
    if crop.compatible_soils.is_empty() {
        return Err("Crop must list at least one compatible soil");
    }
    Ok(())
}

/// Validate a soil profile
pub fn validate_soil_profile(soil: &SoilProfile) -> Result<(), &'static str> {
    if !(soil.water_holding_capacity_mm_per_cm.is_finite()
        && soil.water_holding_capacity_mm_per_cm > 0.0)
    {
        return Err("Water-holding capacity must be positive");
    }
    if !(soil.irrigation_efficiency > 0.0 && soil.irrigation_efficiency <= 1.0) {
        return Err("Irrigation efficiency must be within (0, 1]");
    }
    if !(0.0..=100.0).contains(&soil.disease_risk_score) {
        return Err("Soil disease risk score must be within [0, 100]");
    }
    Ok(())
}

/// Validate a disease profile
pub fn validate_disease_profile(disease: &DiseaseProfile) -> Result<(), &'static str> {
    validate_reference_id(&disease.id)?;
    if disease.affected_crops.is_empty() {
        return Err("Disease must affect at least one crop");
    }
    if !disease.temperature_range_c.is_well_ordered() {
        return Err("Favorable temperature range is not well ordered");
    }
    if !disease.humidity_range_percent.is_well_ordered() {
        return Err("Favorable humidity range is not well ordered");
    }
    if !disease.yield_loss_percent.is_well_ordered() {
        return Err("Yield loss range is not well ordered");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{Catalog, ReferenceTables};

    // ========================================================================
    // Sanitisation Tests
    // ========================================================================

    #[test]
    fn test_non_negative() {
        assert_eq!(non_negative(-4.0), 0.0);
        assert_eq!(non_negative(f64::NAN), 0.0);
        assert_eq!(non_negative(3.5), 3.5);
    }

    #[test]
    fn test_clamp_percent() {
        assert_eq!(clamp_percent(-1.0), 0.0);
        assert_eq!(clamp_percent(101.0), 100.0);
        assert_eq!(clamp_percent(55.0), 55.0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round_to(2.005, 0), 2.0);
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("rice").is_ok());
        assert!(validate_identifier("").is_err());
        assert!(validate_identifier("   ").is_err());
    }

    // ========================================================================
    // Reference Data Tests
    // ========================================================================

    #[test]
    fn test_builtin_crops_are_valid() {
        let catalog = Catalog::builtin();
        for crop in catalog.crops() {
            assert!(validate_crop_profile(crop).is_ok(), "invalid crop {}", crop.id);
        }
    }

    #[test]
    fn test_crop_kc_out_of_range() {
        let mut crop = Catalog::builtin().fallback_crop().clone();
        crop.coefficients.kc_mid = 1.8;
        assert!(validate_crop_profile(&crop).is_err());
    }

    #[test]
    fn test_crop_negative_ky() {
        let mut crop = Catalog::builtin().fallback_crop().clone();
        crop.ky = -0.1;
        assert!(validate_crop_profile(&crop).is_err());
    }

    #[test]
    fn test_growth_stage_bounds() {
        assert!(validate_growth_stages(&GrowthStages::new(25, 35, 50, 30)).is_ok());
        assert!(validate_growth_stages(&GrowthStages::new(0, 0, 0, 0)).is_err());
        assert!(validate_growth_stages(&GrowthStages::new(400, 200, 100, 31)).is_err());
        assert!(validate_growth_stages(&GrowthStages::new(u32::MAX, 1, 0, 0)).is_err());
    }

    #[test]
    fn test_reference_id_must_be_trimmed() {
        assert!(validate_reference_id("rice").is_ok());
        assert!(validate_reference_id(" rice").is_err());
        assert!(validate_reference_id("rice\t").is_err());
    }

    #[test]
    fn test_soil_efficiency_bounds() {
        let mut soil = Catalog::builtin().soil(crate::types::SoilType::Loamy).clone();
        assert!(validate_soil_profile(&soil).is_ok());
        soil.irrigation_efficiency = 0.0;
        assert!(validate_soil_profile(&soil).is_err());
    }
}
