//! Tunable policy constants
//!
//! The disease blend weights and eco-score deltas carry no physical
//! derivation; they are kept here so deployments can retune them through
//! configuration. Defaults reproduce the stock advisory behaviour.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// All policy knobs of the engine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct EnginePolicy {
    pub irrigation: IrrigationPolicy,
    pub risk: RiskPolicy,
    pub eco: EcoScorePolicy,
}

impl EnginePolicy {
    /// Check internal consistency of the policy
    pub fn validate(&self) -> EngineResult<()> {
        self.irrigation.validate()?;
        self.risk.validate()?;
        Ok(())
    }
}

// ============================================================================
// Irrigation
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct IrrigationPolicy {
    /// Fraction of root-zone water allowed to deplete before watering
    pub depletion_fraction: f64,
    pub default_root_depth_cm: f64,
    pub min_interval_days: u32,
    pub max_interval_days: u32,
    /// Days covered by the recent-rainfall total
    pub rainfall_window_days: u32,
}

impl Default for IrrigationPolicy {
    fn default() -> Self {
        Self {
            depletion_fraction: 0.5,
            default_root_depth_cm: 30.0,
            min_interval_days: 1,
            max_interval_days: 7,
            rainfall_window_days: 30,
        }
    }
}

impl IrrigationPolicy {
    fn validate(&self) -> EngineResult<()> {
        if !(self.depletion_fraction > 0.0 && self.depletion_fraction <= 1.0) {
            return Err(EngineError::InvalidPolicy(
                "irrigation.depletion_fraction must be within (0, 1]".to_string(),
            ));
        }
        if self.min_interval_days == 0 || self.min_interval_days > self.max_interval_days {
            return Err(EngineError::InvalidPolicy(
                "irrigation interval bounds must satisfy 1 <= min <= max".to_string(),
            ));
        }
        if self.rainfall_window_days == 0 {
            return Err(EngineError::InvalidPolicy(
                "irrigation.rainfall_window_days must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Disease Risk
// ============================================================================

/// Relative weights of the blended risk factors (sum to 1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RiskBlendWeights {
    pub base: f64,
    pub history: f64,
    pub soil: f64,
    pub season: f64,
    pub trend: f64,
}

impl Default for RiskBlendWeights {
    fn default() -> Self {
        Self {
            base: 0.40,
            history: 0.20,
            soil: 0.15,
            season: 0.15,
            trend: 0.10,
        }
    }
}

impl RiskBlendWeights {
    pub fn total(&self) -> f64 {
        self.base + self.history + self.soil + self.season + self.trend
    }
}

/// Points a condition contributes to a disease match score
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MatchWeights {
    pub temperature: f64,
    pub humidity: f64,
    pub rainfall: f64,
    /// Share of the weight granted near (but outside) a favorable range
    pub partial_fraction: f64,
    pub temperature_margin_c: f64,
    pub humidity_margin_percent: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            temperature: 40.0,
            humidity: 40.0,
            rainfall: 20.0,
            partial_fraction: 0.5,
            temperature_margin_c: 5.0,
            humidity_margin_percent: 10.0,
        }
    }
}

/// Score cut-offs for the ordinal risk level
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RiskThresholds {
    pub critical: f64,
    pub high: f64,
    pub medium: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            critical: 80.0,
            high: 60.0,
            medium: 40.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RiskPolicy {
    pub blend: RiskBlendWeights,
    pub matching: MatchWeights,
    pub thresholds: RiskThresholds,
    /// History score per previously reported matching disease
    pub history_points_per_report: f64,
    pub season_baseline: f64,
    pub season_high_rainfall_bonus: f64,
    pub season_hot_humid_bonus: f64,
    pub hot_temperature_c: f64,
    pub humid_percent: f64,
    /// Confidence bonus when the farm has reported the disease before
    pub history_confidence_bonus: f64,
    pub top_n: usize,
    pub max_recommended_actions: usize,
}

impl Default for RiskPolicy {
    fn default() -> Self {
        Self {
            blend: RiskBlendWeights::default(),
            matching: MatchWeights::default(),
            thresholds: RiskThresholds::default(),
            history_points_per_report: 35.0,
            season_baseline: 30.0,
            season_high_rainfall_bonus: 40.0,
            season_hot_humid_bonus: 30.0,
            hot_temperature_c: 25.0,
            humid_percent: 80.0,
            history_confidence_bonus: 15.0,
            top_n: 3,
            max_recommended_actions: 5,
        }
    }
}

impl RiskPolicy {
    fn validate(&self) -> EngineResult<()> {
        let total = self.blend.total();
        if (total - 1.0).abs() > 1e-6 {
            return Err(EngineError::InvalidPolicy(format!(
                "risk.blend weights must sum to 1, got {:.4}",
                total
            )));
        }
        let t = &self.thresholds;
        if !(t.medium <= t.high && t.high <= t.critical) {
            return Err(EngineError::InvalidPolicy(
                "risk.thresholds must satisfy medium <= high <= critical".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.matching.partial_fraction) {
            return Err(EngineError::InvalidPolicy(
                "risk.matching.partial_fraction must be within [0, 1]".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Eco Score
// ============================================================================

/// Point deltas of the eco score checklist
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EcoScorePolicy {
    pub baseline: i32,
    /// Need at or below this is "efficient" (mm/day)
    pub low_need_mm: f64,
    /// Need at or below this is "moderate" (mm/day)
    pub moderate_need_mm: f64,
    pub low_need_delta: i32,
    pub moderate_need_delta: i32,
    pub high_need_delta: i32,
    pub drip_delta: i32,
    pub sprinkler_delta: i32,
    pub flood_delta: i32,
    pub disease_low_delta: i32,
    pub disease_medium_delta: i32,
    pub disease_high_delta: i32,
    pub disease_critical_delta: i32,
    pub small_gap_percent: f64,
    pub moderate_gap_percent: f64,
    pub large_gap_percent: f64,
    pub small_gap_delta: i32,
    pub moderate_gap_delta: i32,
    pub large_gap_delta: i32,
    pub severe_gap_delta: i32,
    pub nutrient_excellent_delta: i32,
    pub nutrient_good_delta: i32,
    pub nutrient_average_delta: i32,
    pub nutrient_poor_delta: i32,
}

impl Default for EcoScorePolicy {
    fn default() -> Self {
        Self {
            baseline: 50,
            low_need_mm: 3.0,
            moderate_need_mm: 6.0,
            low_need_delta: 15,
            moderate_need_delta: 5,
            high_need_delta: -10,
            drip_delta: 10,
            sprinkler_delta: 5,
            flood_delta: -10,
            disease_low_delta: 10,
            disease_medium_delta: 0,
            disease_high_delta: -10,
            disease_critical_delta: -20,
            small_gap_percent: 10.0,
            moderate_gap_percent: 25.0,
            large_gap_percent: 50.0,
            small_gap_delta: 15,
            moderate_gap_delta: 5,
            large_gap_delta: -5,
            severe_gap_delta: -15,
            nutrient_excellent_delta: 10,
            nutrient_good_delta: 5,
            nutrient_average_delta: 0,
            nutrient_poor_delta: -10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_valid() {
        assert!(EnginePolicy::default().validate().is_ok());
    }

    #[test]
    fn test_blend_weights_must_sum_to_one() {
        let mut policy = EnginePolicy::default();
        policy.risk.blend.base = 0.5;
        assert!(matches!(policy.validate(), Err(EngineError::InvalidPolicy(_))));
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let policy: EnginePolicy =
            serde_json::from_str(r#"{"risk": {"top_n": 5}, "eco": {"baseline": 40}}"#).unwrap();
        assert_eq!(policy.risk.top_n, 5);
        assert_eq!(policy.risk.blend, RiskBlendWeights::default());
        assert_eq!(policy.eco.baseline, 40);
        assert_eq!(policy.eco.drip_delta, 10);
        assert_eq!(policy.irrigation, IrrigationPolicy::default());
    }

    #[test]
    fn test_interval_bounds() {
        let mut policy = EnginePolicy::default();
        policy.irrigation.min_interval_days = 0;
        assert!(policy.validate().is_err());
    }
}
