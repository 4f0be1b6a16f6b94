//! Decision engine entry points
//!
//! [`AgronomicEngine`] owns the injected reference tables and policy and
//! turns boundary requests into advisory outputs. Every method is a pure
//! function of its input; the engine holds no mutable state and can be
//! shared across threads behind an `Arc`.

use tracing::{debug, warn};

use crate::agronomy::{
    assess_disease_risk, crop_et, eco_score, estimate_yield, irrigation_need, kc_for_day,
    plan_frequency, reference_et0, stage_at, RiskConditions, SeasonConditions,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    CropProfile, DiseaseRiskAssessment, DiseaseRiskRequest, EcoScore, EcoScoreInput,
    FarmAssessment, FarmContext, IrrigationPlan, IrrigationRequest, YieldForecast, YieldRequest,
    DEFAULT_HUMIDITY_PERCENT, DEFAULT_MEAN_TEMPERATURE_C,
};
use crate::policy::EnginePolicy;
use crate::reference::{Catalog, ReferenceTables};
use crate::types::{RainfallCategory, SoilType};
use crate::validation::{clamp_percent, finite_or, non_negative, round_to, validate_identifier};

/// Agronomic decision engine
#[derive(Debug, Clone)]
pub struct AgronomicEngine<R = Catalog> {
    tables: R,
    policy: EnginePolicy,
}

impl Default for AgronomicEngine<Catalog> {
    fn default() -> Self {
        Self {
            tables: Catalog::builtin(),
            policy: EnginePolicy::default(),
        }
    }
}

impl<R: ReferenceTables> AgronomicEngine<R> {
    /// Create an engine, rejecting an inconsistent policy
    pub fn new(tables: R, policy: EnginePolicy) -> EngineResult<Self> {
        policy.validate()?;
        Ok(Self { tables, policy })
    }

    pub fn tables(&self) -> &R {
        &self.tables
    }

    pub fn policy(&self) -> &EnginePolicy {
        &self.policy
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    /// Resolve a crop id, substituting the generic profile for unknown ids
    ///
    /// Returns the profile and whether the fallback was used.
    pub fn resolve_crop(&self, crop_id: &str) -> EngineResult<(&CropProfile, bool)> {
        validate_identifier(crop_id).map_err(|_| EngineError::MissingIdentifier("crop_id"))?;
        match self.tables.crop(crop_id) {
            Some(crop) => Ok((crop, false)),
            None => {
                let fallback = self.tables.fallback_crop();
                warn!(crop_id = %crop_id, fallback = %fallback.id, "Unknown crop, using generic profile");
                Ok((fallback, true))
            }
        }
    }

    /// Parse a soil name, falling back to loamy
    pub fn resolve_soil(&self, soil_type: &str) -> SoilType {
        soil_type.parse().unwrap_or_else(|_| {
            warn!(soil_type = %soil_type, "Unknown soil type, using loamy");
            SoilType::Loamy
        })
    }

    // ========================================================================
    // Irrigation
    // ========================================================================

    /// Daily irrigation plan for a crop on a given day after planting
    pub fn compute_irrigation_plan(&self, request: &IrrigationRequest) -> EngineResult<IrrigationPlan> {
        let (crop, _) = self.resolve_crop(&request.crop_id)?;
        Ok(self.irrigation_plan_for(crop, request))
    }

    fn irrigation_plan_for(&self, crop: &CropProfile, request: &IrrigationRequest) -> IrrigationPlan {
        let soil = self.tables.soil(self.resolve_soil(&request.soil_type));
        let policy = &self.policy.irrigation;

        let weather = request.weather.normalize();
        let et0 = reference_et0(&weather);
        let kc = kc_for_day(crop, request.days_after_planting);
        let need = irrigation_need(
            crop_et(et0, kc),
            request.recent_rainfall_mm,
            policy.rainfall_window_days,
            request.soil_moisture_deficit_mm,
            soil.irrigation_efficiency,
        );
        let schedule = plan_frequency(
            need.gross_mm,
            soil.water_holding_capacity_mm_per_cm,
            request.root_depth_cm,
            policy,
        );

        let plan = IrrigationPlan {
            crop_id: crop.id.clone(),
            growth_stage: stage_at(crop, request.days_after_planting),
            et0_mm: round_to(et0, 2),
            kc: round_to(kc, 3),
            etc_mm: round_to(need.etc_mm, 2),
            effective_rainfall_mm: round_to(need.effective_rainfall_mm, 2),
            net_irrigation_mm: round_to(need.net_mm, 2),
            irrigation_need_mm: round_to(need.gross_mm, 2),
            interval_days: schedule.interval_days,
            frequency: schedule.frequency,
            frequency_label: schedule.frequency.to_string(),
            amount_per_irrigation_mm: round_to(schedule.amount_per_irrigation_mm, 2),
            applications_per_week: round_to(schedule.applications_per_week, 2),
            weekly_total_mm: round_to(schedule.weekly_total_mm, 2),
        };

        debug!(
            crop_id = %plan.crop_id,
            et0 = plan.et0_mm,
            kc = plan.kc,
            need = plan.irrigation_need_mm,
            interval = plan.interval_days,
            "Computed irrigation plan"
        );
        plan
    }

    // ========================================================================
    // Yield
    // ========================================================================

    /// Seasonal yield forecast
    pub fn compute_yield_forecast(&self, request: &YieldRequest) -> EngineResult<YieldForecast> {
        let (crop, _) = self.resolve_crop(&request.crop_id)?;
        Ok(self.yield_forecast_for(crop, request))
    }

    fn yield_forecast_for(&self, crop: &CropProfile, request: &YieldRequest) -> YieldForecast {
        let soil_type = self.resolve_soil(&request.soil_type);
        let soil = self.tables.soil(soil_type);

        let conditions = SeasonConditions {
            soil_type,
            land_size_ha: non_negative(request.land_size_ha),
            temperature_c: finite_or(request.temperature_c, DEFAULT_MEAN_TEMPERATURE_C),
            rainfall_mm: non_negative(request.rainfall_mm),
            irrigation_mm: non_negative(request.irrigation_mm),
            nutrient_level: request.nutrient_level,
            seasonal_et0_mm: request.seasonal_et0_mm.map(non_negative),
        };
        let estimate = estimate_yield(crop, soil, &conditions);

        let mut factors = estimate.factors;
        factors.seasonal_etc_mm = round_to(factors.seasonal_etc_mm, 1);
        factors.available_water_mm = round_to(factors.available_water_mm, 1);
        factors.actual_et_mm = round_to(factors.actual_et_mm, 1);
        factors.water_stress_reduction = round_to(factors.water_stress_reduction, 3);

        let forecast = YieldForecast {
            crop_id: crop.id.clone(),
            estimated_yield_kg: round_to(estimate.estimated_kg, 1),
            potential_yield_kg: round_to(estimate.potential_kg, 1),
            yield_gap_percent: round_to(estimate.gap_percent, 1),
            factors,
        };

        debug!(
            crop_id = %forecast.crop_id,
            estimated = forecast.estimated_yield_kg,
            potential = forecast.potential_yield_kg,
            gap = forecast.yield_gap_percent,
            "Computed yield forecast"
        );
        forecast
    }

    // ========================================================================
    // Disease Risk
    // ========================================================================

    /// Blended disease and pest risk for a crop
    pub fn compute_disease_risk(&self, request: &DiseaseRiskRequest) -> EngineResult<DiseaseRiskAssessment> {
        let (crop, _) = self.resolve_crop(&request.crop_id)?;
        Ok(self.disease_risk_for(crop, request))
    }

    fn disease_risk_for(&self, crop: &CropProfile, request: &DiseaseRiskRequest) -> DiseaseRiskAssessment {
        let soil = self.tables.soil(self.resolve_soil(&request.soil_type));

        let conditions = RiskConditions {
            temperature_c: finite_or(request.temperature_c, DEFAULT_MEAN_TEMPERATURE_C),
            humidity_percent: clamp_percent(request.humidity_percent.unwrap_or(DEFAULT_HUMIDITY_PERCENT)),
            rainfall: request.rainfall,
            soil_risk_score: soil.disease_risk_score,
            history: &request.history,
        };
        let diseases = self.tables.diseases_for(&crop.id);
        let mut assessment = assess_disease_risk(&crop.id, &diseases, &conditions, &self.policy.risk);

        assessment.score = round_to(assessment.score, 1);
        assessment.confidence = round_to(assessment.confidence, 1);
        for candidate in assessment.candidates.iter_mut() {
            candidate.match_score = round_to(candidate.match_score, 1);
            candidate.confidence = round_to(candidate.confidence, 1);
        }

        debug!(
            crop_id = %assessment.crop_id,
            level = %assessment.level,
            score = assessment.score,
            candidates = assessment.candidates.len(),
            "Computed disease risk"
        );
        assessment
    }

    // ========================================================================
    // Eco Score
    // ========================================================================

    /// Sustainability score of the current practice
    pub fn compute_eco_score(&self, input: &EcoScoreInput) -> EcoScore {
        let score = eco_score(input, &self.policy.eco);
        debug!(score = score.score, "Computed eco score");
        score
    }

    // ========================================================================
    // Full Assessment
    // ========================================================================

    /// Run every calculator for one field
    ///
    /// The eco score is fed from the irrigation need, disease level and
    /// yield gap computed in the same call.
    pub fn assess_farm(&self, context: &FarmContext) -> EngineResult<FarmAssessment> {
        let (crop, used_fallback_crop) = self.resolve_crop(&context.crop_id)?;
        let crop_id = crop.id.clone();
        let weather = context.weather.normalize();

        let irrigation = self.irrigation_plan_for(crop, &IrrigationRequest {
            weather: context.weather.clone(),
            crop_id: crop_id.clone(),
            days_after_planting: context.days_after_planting,
            soil_type: context.soil_type.clone(),
            recent_rainfall_mm: context.recent_rainfall_mm,
            soil_moisture_deficit_mm: 0.0,
            root_depth_cm: context.root_depth_cm,
        });

        let yield_forecast = self.yield_forecast_for(crop, &YieldRequest {
            crop_id: crop_id.clone(),
            soil_type: context.soil_type.clone(),
            land_size_ha: context.land_size_ha,
            temperature_c: weather.temperature_mean_c,
            rainfall_mm: context.seasonal_rainfall_mm,
            irrigation_mm: context.seasonal_irrigation_mm,
            nutrient_level: context.nutrient_level,
            seasonal_et0_mm: None,
        });

        let rainfall = context
            .rainfall_category
            .unwrap_or_else(|| RainfallCategory::from_mm(context.recent_rainfall_mm));
        let disease_risk = self.disease_risk_for(crop, &DiseaseRiskRequest {
            crop_id: crop_id.clone(),
            temperature_c: weather.temperature_mean_c,
            humidity_percent: Some(weather.humidity_percent),
            rainfall,
            soil_type: context.soil_type.clone(),
            history: context.disease_history.clone(),
        });

        let eco_score = self.compute_eco_score(&EcoScoreInput {
            irrigation_need_mm: irrigation.irrigation_need_mm,
            irrigation_method: context.irrigation_method,
            disease_level: disease_risk.level,
            yield_gap_percent: yield_forecast.yield_gap_percent,
            nutrient_level: context.nutrient_level,
        });

        Ok(FarmAssessment {
            crop_id,
            used_fallback_crop,
            irrigation,
            yield_forecast,
            disease_risk,
            eco_score,
        })
    }
}
