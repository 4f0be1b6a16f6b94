//! Disease and pest reference profiles

use serde::{Deserialize, Serialize};

use crate::types::{RainfallCategory, Severity, ValueRange};

/// Whether an entry is a pathogen or an insect pest
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThreatKind {
    #[default]
    Disease,
    Pest,
}

/// Favorable conditions and advice for one disease or pest
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiseaseProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub kind: ThreatKind,
    /// Crop ids this entry attacks (lower case)
    pub affected_crops: Vec<String>,
    pub temperature_range_c: ValueRange,
    pub humidity_range_percent: ValueRange,
    pub favorable_rainfall: RainfallCategory,
    pub severity: Severity,
    /// Typical yield loss (%) when unmanaged
    pub yield_loss_percent: ValueRange,
    pub prevention: Vec<String>,
    #[serde(default)]
    pub treatment: Vec<String>,
}

impl DiseaseProfile {
    pub fn affects(&self, crop_id: &str) -> bool {
        self.affected_crops
            .iter()
            .any(|c| c.eq_ignore_ascii_case(crop_id))
    }

    /// Whether a farmer-reported name refers to this entry
    pub fn matches_report(&self, reported: &str) -> bool {
        let reported = reported.trim();
        !reported.is_empty()
            && (self.id.eq_ignore_ascii_case(reported) || self.name.eq_ignore_ascii_case(reported))
    }
}
