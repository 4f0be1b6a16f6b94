//! Advisory service wrapping the agronomic engine

use std::sync::Arc;

use agro_engine::{AgronomicEngine, Catalog, ReferenceTables};
use validator::Validate;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{
    AssessmentInput, CropDetail, CropSummary, DiseaseRiskAssessment, DiseaseRiskInput, EcoScore,
    EcoScoreInput, FarmAssessment, IrrigationPlan, IrrigationPlanInput, YieldForecast,
    YieldForecastInput,
};

/// Advisory service for computing farm recommendations
#[derive(Clone)]
pub struct AdvisoryService {
    engine: Arc<AgronomicEngine>,
}

impl AdvisoryService {
    pub fn new(engine: Arc<AgronomicEngine>) -> Self {
        Self { engine }
    }

    /// Build the engine from configuration
    ///
    /// Loads the JSON catalog named in `reference_data.path` when set,
    /// otherwise the built-in tables.
    pub fn build_engine(config: &Config) -> AppResult<AgronomicEngine> {
        let catalog = match &config.reference_data.path {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|e| {
                    AppError::Configuration(format!("cannot read reference data {}: {}", path, e))
                })?;
                let catalog = Catalog::from_json(&json)?;
                tracing::info!(
                    path = %path,
                    crops = catalog.crops().len(),
                    diseases = catalog.disease_count(),
                    "Loaded reference data"
                );
                catalog
            }
            None => Catalog::builtin(),
        };

        Ok(AgronomicEngine::new(catalog, config.policy.clone())?)
    }

    /// List all known crops
    pub fn list_crops(&self) -> Vec<CropSummary> {
        self.engine
            .tables()
            .crops()
            .into_iter()
            .map(CropSummary::from)
            .collect()
    }

    /// Get a crop profile, substituting the generic profile for unknown ids
    pub fn get_crop(&self, crop_id: &str) -> AppResult<CropDetail> {
        let (crop, is_fallback) = self.engine.resolve_crop(crop_id)?;
        Ok(CropDetail {
            requested_id: crop_id.to_string(),
            is_fallback,
            crop: crop.clone(),
        })
    }

    /// Compute a daily irrigation plan
    pub fn irrigation_plan(&self, input: IrrigationPlanInput) -> AppResult<IrrigationPlan> {
        input.validate()?;
        Ok(self.engine.compute_irrigation_plan(&input.into())?)
    }

    /// Forecast the seasonal yield
    pub fn yield_forecast(&self, input: YieldForecastInput) -> AppResult<YieldForecast> {
        input.validate()?;
        Ok(self.engine.compute_yield_forecast(&input.into())?)
    }

    /// Assess disease and pest risk
    pub fn disease_risk(&self, input: DiseaseRiskInput) -> AppResult<DiseaseRiskAssessment> {
        input.validate()?;
        Ok(self.engine.compute_disease_risk(&input.into())?)
    }

    /// Score the sustainability of the current practice
    pub fn eco_score(&self, input: EcoScoreInput) -> EcoScore {
        self.engine.compute_eco_score(&input)
    }

    /// Run the full assessment pipeline
    pub fn assessment(&self, input: AssessmentInput) -> AppResult<FarmAssessment> {
        input.validate()?;
        let assessment = self.engine.assess_farm(&input.into())?;
        if assessment.used_fallback_crop {
            tracing::info!(crop_id = %assessment.crop_id, "Assessment used the generic crop profile");
        }
        Ok(assessment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AdvisoryService {
        AdvisoryService::new(Arc::new(AgronomicEngine::default()))
    }

    #[test]
    fn test_list_crops_is_sorted() {
        let crops = service().list_crops();
        assert_eq!(crops.len(), 9);
        let ids: Vec<_> = crops.iter().map(|c| c.id.clone()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_get_unknown_crop_is_flagged() {
        let detail = service().get_crop("kale").unwrap();
        assert!(detail.is_fallback);
        assert_eq!(detail.crop.id, "generic");
    }

    #[test]
    fn test_build_engine_rejects_bad_policy() {
        let mut config = Config::default();
        config.policy.risk.blend.base = 0.9;
        assert!(matches!(
            AdvisoryService::build_engine(&config),
            Err(AppError::Engine(_))
        ));
    }

    #[test]
    fn test_build_engine_missing_catalog_file() {
        let mut config = Config::default();
        config.reference_data.path = Some("/nonexistent/catalog.json".to_string());
        assert!(matches!(
            AdvisoryService::build_engine(&config),
            Err(AppError::Configuration(_))
        ));
    }
}
