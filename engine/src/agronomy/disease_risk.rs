//! Weighted disease and pest risk
//!
//! Each disease attacking the crop is matched against the current
//! conditions. The best match, the farm's reported history, the soil, the
//! season and the trend are then blended into one score with policy weights.

use std::cmp::Ordering;

use crate::models::{DiseaseCandidate, DiseaseProfile, DiseaseRiskAssessment, RiskFactorScores};
use crate::policy::{MatchWeights, RiskPolicy, RiskThresholds};
use crate::types::{RainfallCategory, RiskLevel, Severity, ValueRange};

/// Advice returned when no disease qualifies
pub const ROUTINE_SCOUTING_ACTION: &str = "Continue routine field scouting";

/// Field conditions the risk engine scores against
#[derive(Debug, Clone, Copy)]
pub struct RiskConditions<'a> {
    pub temperature_c: f64,
    pub humidity_percent: f64,
    pub rainfall: RainfallCategory,
    /// Base disease pressure of the soil (0-100)
    pub soil_risk_score: f64,
    /// Diseases previously reported on the farm
    pub history: &'a [String],
}

fn band_points(range: &ValueRange, value: f64, weight: f64, margin: f64, partial: f64) -> f64 {
    let distance = range.distance_to(value);
    if distance == 0.0 {
        weight
    } else if distance <= margin {
        weight * partial
    } else {
        0.0
    }
}

/// How well the conditions fit a disease (0-100)
pub fn match_score(disease: &DiseaseProfile, conditions: &RiskConditions<'_>, weights: &MatchWeights) -> f64 {
    let temperature = band_points(
        &disease.temperature_range_c,
        conditions.temperature_c,
        weights.temperature,
        weights.temperature_margin_c,
        weights.partial_fraction,
    );
    let humidity = band_points(
        &disease.humidity_range_percent,
        conditions.humidity_percent,
        weights.humidity,
        weights.humidity_margin_percent,
        weights.partial_fraction,
    );
    let rainfall = if disease.favorable_rainfall == conditions.rainfall {
        weights.rainfall
    } else {
        0.0
    };
    (temperature + humidity + rainfall).clamp(0.0, 100.0)
}

/// Map a blended score to its ordinal level
pub fn risk_level(score: f64, thresholds: &RiskThresholds) -> RiskLevel {
    if score >= thresholds.critical {
        RiskLevel::Critical
    } else if score >= thresholds.high {
        RiskLevel::High
    } else if score >= thresholds.medium {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

fn severity_bonus(severity: Severity) -> f64 {
    match severity {
        Severity::High => 10.0,
        Severity::Medium => 5.0,
        Severity::Low => 0.0,
    }
}

fn was_reported(disease: &DiseaseProfile, history: &[String]) -> bool {
    history.iter().any(|h| disease.matches_report(h))
}

fn season_score(conditions: &RiskConditions<'_>, policy: &RiskPolicy) -> f64 {
    let mut score = policy.season_baseline;
    if conditions.rainfall == RainfallCategory::High {
        score += policy.season_high_rainfall_bonus;
    }
    if conditions.temperature_c >= policy.hot_temperature_c
        && conditions.humidity_percent >= policy.humid_percent
    {
        score += policy.season_hot_humid_bonus;
    }
    score.clamp(0.0, 100.0)
}

fn trend_score(diseases: &[&DiseaseProfile], conditions: &RiskConditions<'_>) -> f64 {
    diseases
        .iter()
        .map(|d| {
            let inside = d.temperature_range_c.contains(conditions.temperature_c) as u8
                + d.humidity_range_percent.contains(conditions.humidity_percent) as u8;
            match inside {
                2 => 100.0,
                1 => 50.0,
                _ => 0.0,
            }
        })
        .fold(0.0, f64::max)
}

/// Assess disease risk for `crop_id` from the diseases that attack it
pub fn assess_disease_risk(
    crop_id: &str,
    diseases: &[&DiseaseProfile],
    conditions: &RiskConditions<'_>,
    policy: &RiskPolicy,
) -> DiseaseRiskAssessment {
    let scored: Vec<(&DiseaseProfile, f64)> = diseases
        .iter()
        .map(|d| (*d, match_score(d, conditions, &policy.matching)))
        .collect();

    let reported = diseases
        .iter()
        .filter(|d| was_reported(d, conditions.history))
        .count();

    let factors = RiskFactorScores {
        base: scored.iter().map(|(_, s)| *s).fold(0.0, f64::max),
        history: (policy.history_points_per_report * reported as f64).min(100.0),
        soil: conditions.soil_risk_score.clamp(0.0, 100.0),
        season: season_score(conditions, policy),
        trend: trend_score(diseases, conditions),
    };

    let w = &policy.blend;
    let score = (factors.base * w.base
        + factors.history * w.history
        + factors.soil * w.soil
        + factors.season * w.season
        + factors.trend * w.trend)
        .clamp(0.0, 100.0);

    let mut candidates: Vec<DiseaseCandidate> = scored
        .into_iter()
        .map(|(disease, match_score)| {
            let mut confidence = match_score + severity_bonus(disease.severity);
            if was_reported(disease, conditions.history) {
                confidence += policy.history_confidence_bonus;
            }
            DiseaseCandidate {
                disease_id: disease.id.clone(),
                name: disease.name.clone(),
                match_score,
                confidence: confidence.clamp(0.0, 100.0),
                severity: disease.severity,
                yield_loss_percent: disease.yield_loss_percent,
                prevention: disease.prevention.clone(),
            }
        })
        .filter(|c| c.confidence > 0.0)
        .collect();

    candidates.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.disease_id.cmp(&b.disease_id))
    });
    candidates.truncate(policy.top_n);

    let confidence = candidates
        .first()
        .map(|c| c.confidence)
        .unwrap_or(100.0 - score);

    let mut recommended_actions: Vec<String> = Vec::new();
    for action in candidates.iter().flat_map(|c| c.prevention.iter()) {
        if recommended_actions.len() >= policy.max_recommended_actions {
            break;
        }
        if !recommended_actions.iter().any(|a| a.eq_ignore_ascii_case(action)) {
            recommended_actions.push(action.clone());
        }
    }
    if recommended_actions.is_empty() {
        recommended_actions.push(ROUTINE_SCOUTING_ACTION.to_string());
    }

    DiseaseRiskAssessment {
        crop_id: crop_id.to_string(),
        level: risk_level(score, &policy.thresholds),
        score,
        confidence,
        factors,
        candidates,
        recommended_actions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ThreatKind;

    fn disease(id: &str, severity: Severity, rainfall: RainfallCategory) -> DiseaseProfile {
        DiseaseProfile {
            id: id.to_string(),
            name: id.replace('_', " "),
            kind: ThreatKind::Disease,
            affected_crops: vec!["rice".to_string()],
            temperature_range_c: ValueRange::new(25.0, 28.0),
            humidity_range_percent: ValueRange::new(85.0, 100.0),
            favorable_rainfall: rainfall,
            severity,
            yield_loss_percent: ValueRange::new(10.0, 30.0),
            prevention: vec![format!("Prevent {}", id), "Scout weekly".to_string()],
            treatment: vec![],
        }
    }

    fn conditions(t: f64, h: f64, rainfall: RainfallCategory) -> RiskConditions<'static> {
        RiskConditions {
            temperature_c: t,
            humidity_percent: h,
            rainfall,
            soil_risk_score: 40.0,
            history: &[],
        }
    }

    #[test]
    fn test_full_match() {
        let d = disease("blast", Severity::High, RainfallCategory::High);
        let c = conditions(26.0, 90.0, RainfallCategory::High);
        assert_eq!(match_score(&d, &c, &MatchWeights::default()), 100.0);
    }

    #[test]
    fn test_partial_bands() {
        let d = disease("blast", Severity::High, RainfallCategory::High);
        // 3°C below range, 5 points below range, wrong rain
        let c = conditions(22.0, 80.0, RainfallCategory::Low);
        assert_eq!(match_score(&d, &c, &MatchWeights::default()), 40.0);
    }

    #[test]
    fn test_cold_dry_conditions_are_low_risk() {
        let d = disease("blast", Severity::High, RainfallCategory::High);
        let c = conditions(10.0, 20.0, RainfallCategory::Low);
        let a = assess_disease_risk("rice", &[&d], &c, &RiskPolicy::default());
        assert_eq!(a.factors.base, 0.0);
        assert_eq!(a.level, RiskLevel::Low);
        // soil 40 x 0.15 + season 30 x 0.15
        assert!((a.score - 10.5).abs() < 1e-9);
    }

    #[test]
    fn test_favourable_conditions_are_critical() {
        let d = disease("blast", Severity::High, RainfallCategory::High);
        let history = vec!["BLAST".to_string()];
        let c = RiskConditions {
            history: &history,
            soil_risk_score: 70.0,
            ..conditions(27.0, 95.0, RainfallCategory::High)
        };
        let a = assess_disease_risk("rice", &[&d], &c, &RiskPolicy::default());
        assert_eq!(a.factors.history, 35.0);
        assert_eq!(a.factors.season, 100.0);
        assert_eq!(a.factors.trend, 100.0);
        assert_eq!(a.level, RiskLevel::Critical);
        assert_eq!(a.candidates[0].confidence, 100.0);
    }

    #[test]
    fn test_ranking_by_confidence_then_id() {
        let a = disease("b_disease", Severity::Low, RainfallCategory::High);
        let b = disease("a_disease", Severity::Low, RainfallCategory::High);
        let c = disease("c_disease", Severity::High, RainfallCategory::High);
        let d = disease("d_disease", Severity::Medium, RainfallCategory::Low);
        // Low rain: a, b 80; c 80 + 10; d 100 + 5 (clamped)
        let cond = conditions(26.0, 90.0, RainfallCategory::Low);
        let result = assess_disease_risk("rice", &[&a, &b, &c, &d], &cond, &RiskPolicy::default());
        let ids: Vec<&str> = result.candidates.iter().map(|c| c.disease_id.as_str()).collect();
        assert_eq!(ids, vec!["d_disease", "c_disease", "a_disease"]);
    }

    #[test]
    fn test_zero_confidence_candidates_are_dropped() {
        let d = disease("mild", Severity::Low, RainfallCategory::High);
        let c = conditions(0.0, 10.0, RainfallCategory::Low);
        let a = assess_disease_risk("rice", &[&d], &c, &RiskPolicy::default());
        assert!(a.candidates.is_empty());
        assert!((a.confidence - (100.0 - a.score)).abs() < 1e-9);
        assert_eq!(a.recommended_actions, vec![ROUTINE_SCOUTING_ACTION.to_string()]);
    }

    #[test]
    fn test_actions_are_deduplicated() {
        let a = disease("one", Severity::High, RainfallCategory::High);
        let b = disease("two", Severity::High, RainfallCategory::High);
        let c = conditions(26.0, 90.0, RainfallCategory::High);
        let result = assess_disease_risk("rice", &[&a, &b], &c, &RiskPolicy::default());
        assert_eq!(
            result.recommended_actions,
            vec!["Prevent one".to_string(), "Scout weekly".to_string(), "Prevent two".to_string()]
        );
    }

    #[test]
    fn test_no_diseases() {
        let c = conditions(26.0, 90.0, RainfallCategory::High);
        let a = assess_disease_risk("generic", &[], &c, &RiskPolicy::default());
        assert_eq!(a.factors.base, 0.0);
        assert_eq!(a.factors.trend, 0.0);
        assert!(a.candidates.is_empty());
    }

    #[test]
    fn test_risk_level_thresholds() {
        let t = RiskThresholds::default();
        assert_eq!(risk_level(80.0, &t), RiskLevel::Critical);
        assert_eq!(risk_level(79.9, &t), RiskLevel::High);
        assert_eq!(risk_level(60.0, &t), RiskLevel::High);
        assert_eq!(risk_level(40.0, &t), RiskLevel::Medium);
        assert_eq!(risk_level(39.9, &t), RiskLevel::Low);
    }
}
