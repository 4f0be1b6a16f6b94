//! Disease risk assessment models

use serde::{Deserialize, Serialize};

use crate::types::{RainfallCategory, RiskLevel, Severity, ValueRange};

/// Inputs for a disease risk assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseRiskRequest {
    pub crop_id: String,
    pub temperature_c: f64,
    pub humidity_percent: Option<f64>,
    pub rainfall: RainfallCategory,
    pub soil_type: String,
    /// Diseases previously reported on this farm
    #[serde(default)]
    pub history: Vec<String>,
}

/// Score of each blended factor (0-100)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskFactorScores {
    pub base: f64,
    pub history: f64,
    pub soil: f64,
    pub season: f64,
    pub trend: f64,
}

/// A disease or pest likely under the given conditions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseCandidate {
    pub disease_id: String,
    pub name: String,
    pub match_score: f64,
    pub confidence: f64,
    pub severity: Severity,
    pub yield_loss_percent: ValueRange,
    pub prevention: Vec<String>,
}

/// Result of the disease risk engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseRiskAssessment {
    pub crop_id: String,
    pub level: RiskLevel,
    /// Blended risk score (0-100)
    pub score: f64,
    pub confidence: f64,
    pub factors: RiskFactorScores,
    pub candidates: Vec<DiseaseCandidate>,
    pub recommended_actions: Vec<String>,
}
