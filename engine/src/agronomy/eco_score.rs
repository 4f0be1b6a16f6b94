//! Sustainability checklist score

use crate::models::{EcoAdjustment, EcoScore, EcoScoreInput};
use crate::policy::EcoScorePolicy;
use crate::types::{IrrigationMethod, NutrientLevel, RiskLevel};
use crate::validation::non_negative;

fn adjustment(label: &str, delta: i32) -> EcoAdjustment {
    EcoAdjustment {
        label: label.to_string(),
        delta,
    }
}

/// Score water use, disease pressure, yield gap and nutrient practice
pub fn eco_score(input: &EcoScoreInput, policy: &EcoScorePolicy) -> EcoScore {
    let mut adjustments = Vec::with_capacity(5);

    let need = non_negative(input.irrigation_need_mm);
    adjustments.push(if need <= policy.low_need_mm {
        adjustment("Efficient water requirement", policy.low_need_delta)
    } else if need <= policy.moderate_need_mm {
        adjustment("Moderate water requirement", policy.moderate_need_delta)
    } else {
        adjustment("High water requirement", policy.high_need_delta)
    });

    if let Some(method) = input.irrigation_method {
        adjustments.push(match method {
            IrrigationMethod::Drip => adjustment("Drip irrigation", policy.drip_delta),
            IrrigationMethod::Sprinkler => adjustment("Sprinkler irrigation", policy.sprinkler_delta),
            IrrigationMethod::Flood => adjustment("Flood irrigation", policy.flood_delta),
        });
    }

    adjustments.push(match input.disease_level {
        RiskLevel::Low => adjustment("Low disease pressure", policy.disease_low_delta),
        RiskLevel::Medium => adjustment("Medium disease pressure", policy.disease_medium_delta),
        RiskLevel::High => adjustment("High disease pressure", policy.disease_high_delta),
        RiskLevel::Critical => adjustment("Critical disease pressure", policy.disease_critical_delta),
    });

    let gap = non_negative(input.yield_gap_percent);
    adjustments.push(if gap < policy.small_gap_percent {
        adjustment("Yield close to potential", policy.small_gap_delta)
    } else if gap < policy.moderate_gap_percent {
        adjustment("Moderate yield gap", policy.moderate_gap_delta)
    } else if gap < policy.large_gap_percent {
        adjustment("Large yield gap", policy.large_gap_delta)
    } else {
        adjustment("Severe yield gap", policy.severe_gap_delta)
    });

    adjustments.push(match input.nutrient_level {
        NutrientLevel::Excellent => adjustment("Excellent nutrient management", policy.nutrient_excellent_delta),
        NutrientLevel::Good => adjustment("Good nutrient management", policy.nutrient_good_delta),
        NutrientLevel::Average => adjustment("Average nutrient management", policy.nutrient_average_delta),
        NutrientLevel::Poor => adjustment("Poor nutrient management", policy.nutrient_poor_delta),
    });

    let total = policy.baseline + adjustments.iter().map(|a| a.delta).sum::<i32>();

    EcoScore {
        score: total.clamp(0, 100) as u8,
        adjustments,
    }
}
