//! Read-only reference tables for crops, soils and diseases
//!
//! The engine never reaches for global data; it receives a
//! [`ReferenceTables`] implementation at construction. [`Catalog`] is the
//! stock implementation, backed by the built-in tables or a JSON document.

mod builtin;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{EngineError, EngineResult};
use crate::models::{CropProfile, DiseaseProfile, SoilProfile};
use crate::types::SoilType;
use crate::validation::{validate_crop_profile, validate_disease_profile, validate_soil_profile};

/// Id of the generic profile substituted for unknown crops
pub const FALLBACK_CROP_ID: &str = "generic";

/// Lookup interface the engine depends on
pub trait ReferenceTables: Send + Sync {
    /// Case-insensitive crop lookup
    fn crop(&self, id: &str) -> Option<&CropProfile>;

    /// Profile used when a crop id is unknown
    fn fallback_crop(&self) -> &CropProfile;

    /// All known crops, ordered by id
    fn crops(&self) -> Vec<&CropProfile>;

    fn soil(&self, soil_type: SoilType) -> &SoilProfile;

    /// Diseases and pests that attack the given crop
    fn diseases_for(&self, crop_id: &str) -> Vec<&DiseaseProfile>;
}

/// Soil table covering the closed set of soil types
#[derive(Debug, Clone)]
struct SoilTable {
    clay: SoilProfile,
    sandy: SoilProfile,
    loamy: SoilProfile,
    silty: SoilProfile,
}

impl SoilTable {
    fn get(&self, soil_type: SoilType) -> &SoilProfile {
        match soil_type {
            SoilType::Clay => &self.clay,
            SoilType::Sandy => &self.sandy,
            SoilType::Loamy => &self.loamy,
            SoilType::Silty => &self.silty,
        }
    }

    fn set(&mut self, profile: SoilProfile) {
        match profile.soil_type {
            SoilType::Clay => self.clay = profile,
            SoilType::Sandy => self.sandy = profile,
            SoilType::Loamy => self.loamy = profile,
            SoilType::Silty => self.silty = profile,
        }
    }
}

/// Serialized form of a catalog
///
/// Missing sections fall back to the built-in tables.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogDocument {
    pub crops: Vec<CropProfile>,
    pub fallback_crop: Option<CropProfile>,
    pub soils: Vec<SoilProfile>,
    pub diseases: Vec<DiseaseProfile>,
}

/// In-memory reference tables
#[derive(Debug, Clone)]
pub struct Catalog {
    crops: BTreeMap<String, CropProfile>,
    fallback: CropProfile,
    soils: SoilTable,
    diseases: Vec<DiseaseProfile>,
}

impl Catalog {
    /// Catalog with the built-in crop, soil and disease tables
    pub fn builtin() -> Self {
        let crops = builtin::crops()
            .into_iter()
            .map(|c| (c.id.to_lowercase(), c))
            .collect();
        Self {
            crops,
            fallback: builtin::generic_crop(),
            soils: builtin_soils(),
            diseases: builtin::diseases(),
        }
    }

    /// Build a catalog from a document, validating every profile
    pub fn from_document(doc: CatalogDocument) -> EngineResult<Self> {
        let mut crops = BTreeMap::new();
        for crop in doc.crops {
            validate_crop_profile(&crop).map_err(|reason| invalid("crop", &crop.id, reason))?;
            let key = crop.id.to_lowercase();
            if crops.contains_key(&key) {
                return Err(invalid("crop", &crop.id, "Duplicate crop id"));
            }
            crops.insert(key, crop);
        }

        let fallback = match doc.fallback_crop {
            Some(crop) => {
                validate_crop_profile(&crop).map_err(|reason| invalid("crop", &crop.id, reason))?;
                crop
            }
            None => builtin::generic_crop(),
        };

        let mut soils = builtin_soils();
        for soil in doc.soils {
            validate_soil_profile(&soil)
                .map_err(|reason| invalid("soil", &soil.soil_type.to_string(), reason))?;
            soils.set(soil);
        }

        let diseases = if doc.diseases.is_empty() {
            builtin::diseases()
        } else {
            let mut seen = std::collections::BTreeSet::new();
            for disease in &doc.diseases {
                validate_disease_profile(disease)
                    .map_err(|reason| invalid("disease", &disease.id, reason))?;
                if !seen.insert(disease.id.to_lowercase()) {
                    return Err(invalid("disease", &disease.id, "Duplicate disease id"));
                }
            }
            doc.diseases
        };

        let crops = if crops.is_empty() {
            builtin::crops()
                .into_iter()
                .map(|c| (c.id.to_lowercase(), c))
                .collect()
        } else {
            crops
        };

        Ok(Self {
            crops,
            fallback,
            soils,
            diseases,
        })
    }

    /// Parse and validate a JSON catalog document
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        Self::from_document(doc)
    }

    pub fn disease_count(&self) -> usize {
        self.diseases.len()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ReferenceTables for Catalog {
    fn crop(&self, id: &str) -> Option<&CropProfile> {
        self.crops.get(&id.trim().to_lowercase())
    }

    fn fallback_crop(&self) -> &CropProfile {
        &self.fallback
    }

    fn crops(&self) -> Vec<&CropProfile> {
        self.crops.values().collect()
    }

    fn soil(&self, soil_type: SoilType) -> &SoilProfile {
        self.soils.get(soil_type)
    }

    fn diseases_for(&self, crop_id: &str) -> Vec<&DiseaseProfile> {
        let crop_id = crop_id.trim();
        self.diseases.iter().filter(|d| d.affects(crop_id)).collect()
    }
}

fn builtin_soils() -> SoilTable {
    let [clay, sandy, loamy, silty] = builtin::soils();
    SoilTable {
        clay,
        sandy,
        loamy,
        silty,
    }
}

fn invalid(table: &'static str, id: &str, reason: &str) -> EngineError {
    EngineError::InvalidReferenceData {
        table,
        id: id.to_string(),
        reason: reason.to_string(),
    }
}
