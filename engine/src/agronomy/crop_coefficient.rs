//! FAO-56 single crop coefficient curve

use crate::models::{CropProfile, GrowthStage};

/// Days past maturity before the field counts as fallow
pub const FALLOW_GRACE_DAYS: u32 = 30;
/// Kc of bare soil or stubble after harvest
pub const FALLOW_KC: f64 = 0.5;
/// Lowest Kc reached during late-season senescence
pub const LATE_SEASON_KC_FLOOR: f64 = 0.3;

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Crop coefficient on `days_after_planting`
pub fn kc_for_day(crop: &CropProfile, days_after_planting: u32) -> f64 {
    let stages = &crop.stages;
    let kc = &crop.coefficients;
    let total = stages.total_days();

    if days_after_planting > total.saturating_add(FALLOW_GRACE_DAYS) {
        return FALLOW_KC;
    }

    let day = days_after_planting.min(total);
    let end_initial = stages.initial_days;
    let end_development = end_initial.saturating_add(stages.development_days);
    let end_mid = end_development.saturating_add(stages.mid_days);

    if day <= end_initial {
        kc.kc_initial
    } else if day <= end_development {
        let t = (day - end_initial) as f64 / stages.development_days as f64;
        lerp(kc.kc_initial, kc.kc_mid, t)
    } else if day <= end_mid {
        kc.kc_mid
    } else {
        let t = (day - end_mid) as f64 / stages.late_days as f64;
        lerp(kc.kc_mid, kc.kc_end, t).max(LATE_SEASON_KC_FLOOR)
    }
}

/// Growth stage on `days_after_planting`
pub fn stage_at(crop: &CropProfile, days_after_planting: u32) -> GrowthStage {
    let stages = &crop.stages;
    let total = stages.total_days();
    if days_after_planting > total.saturating_add(FALLOW_GRACE_DAYS) {
        return GrowthStage::Fallow;
    }

    let day = days_after_planting.min(total);
    let end_initial = stages.initial_days;
    let end_development = end_initial.saturating_add(stages.development_days);
    let end_mid = end_development.saturating_add(stages.mid_days);

    if day <= end_initial {
        GrowthStage::Initial
    } else if day <= end_development {
        GrowthStage::Development
    } else if day <= end_mid {
        GrowthStage::Mid
    } else {
        GrowthStage::Late
    }
}
