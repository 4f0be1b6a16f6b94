//! Built-in reference tables
//!
//! Stage lengths and crop coefficients follow FAO-56 tables 11 and 12, yield
//! response factors FAO-33 table 24. Disease windows are extension-service
//! rules of thumb.

use crate::models::{
    CropCoefficients, CropProfile, DiseaseProfile, GrowthStages, NutrientRequirement, SoilProfile,
    ThreatKind,
};
use crate::types::{RainfallCategory, Severity, SoilType, ValueRange};

use super::FALLBACK_CROP_ID;

#[allow(clippy::too_many_arguments)]
fn crop(
    id: &str,
    name: &str,
    stages: GrowthStages,
    kc: (f64, f64, f64),
    ky: f64,
    temperature: (f64, f64),
    rainfall: (f64, f64),
    soils: &[SoilType],
    potential_yield_kg_ha: f64,
    water_requirement_mm: f64,
    npk: (f64, f64, f64),
) -> CropProfile {
    CropProfile {
        id: id.to_string(),
        name: name.to_string(),
        stages,
        coefficients: CropCoefficients {
            kc_initial: kc.0,
            kc_mid: kc.1,
            kc_end: kc.2,
        },
        ky,
        temperature_range_c: ValueRange::new(temperature.0, temperature.1),
        rainfall_range_mm: ValueRange::new(rainfall.0, rainfall.1),
        compatible_soils: soils.to_vec(),
        potential_yield_kg_ha,
        seasonal_water_requirement_mm: water_requirement_mm,
        nutrients: NutrientRequirement {
            nitrogen_kg_ha: npk.0,
            phosphorus_kg_ha: npk.1,
            potassium_kg_ha: npk.2,
        },
    }
}

pub(super) fn crops() -> Vec<CropProfile> {
    use SoilType::*;
    vec![
        crop(
            "rice",
            "Rice",
            GrowthStages::new(30, 30, 60, 30),
            (1.05, 1.20, 0.75),
            1.1,
            (20.0, 35.0),
            (1000.0, 2000.0),
            &[Clay, Loamy, Silty],
            6000.0,
            1100.0,
            (120.0, 60.0, 40.0),
        ),
        crop(
            "wheat",
            "Wheat",
            GrowthStages::new(20, 25, 60, 30),
            (0.30, 1.15, 0.40),
            1.05,
            (12.0, 25.0),
            (300.0, 900.0),
            &[Loamy, Clay, Silty],
            4500.0,
            500.0,
            (120.0, 60.0, 40.0),
        ),
        crop(
            "maize",
            "Maize",
            GrowthStages::new(25, 40, 45, 30),
            (0.30, 1.20, 0.35),
            1.25,
            (18.0, 32.0),
            (500.0, 800.0),
            &[Loamy, Silty, Sandy],
            6500.0,
            600.0,
            (150.0, 75.0, 50.0),
        ),
        crop(
            "cotton",
            "Cotton",
            GrowthStages::new(30, 50, 60, 55),
            (0.35, 1.15, 0.60),
            0.85,
            (21.0, 35.0),
            (500.0, 1200.0),
            &[Loamy, Clay],
            2500.0,
            800.0,
            (100.0, 50.0, 50.0),
        ),
        crop(
            "sugarcane",
            "Sugarcane",
            GrowthStages::new(35, 60, 190, 120),
            (0.40, 1.25, 0.75),
            1.2,
            (20.0, 35.0),
            (1500.0, 2500.0),
            &[Loamy, Clay],
            70000.0,
            1800.0,
            (250.0, 100.0, 120.0),
        ),
        crop(
            "tomato",
            "Tomato",
            GrowthStages::new(30, 40, 40, 25),
            (0.60, 1.15, 0.80),
            1.05,
            (18.0, 30.0),
            (400.0, 600.0),
            &[Loamy, Sandy, Silty],
            40000.0,
            550.0,
            (150.0, 100.0, 150.0),
        ),
        crop(
            "potato",
            "Potato",
            GrowthStages::new(25, 30, 45, 30),
            (0.50, 1.15, 0.75),
            1.1,
            (15.0, 25.0),
            (500.0, 700.0),
            &[Loamy, Sandy],
            25000.0,
            550.0,
            (150.0, 80.0, 150.0),
        ),
        crop(
            "soybean",
            "Soybean",
            GrowthStages::new(20, 35, 60, 25),
            (0.40, 1.15, 0.50),
            0.85,
            (20.0, 30.0),
            (450.0, 700.0),
            &[Loamy, Clay, Silty],
            3000.0,
            550.0,
            (30.0, 60.0, 40.0),
        ),
        crop(
            "groundnut",
            "Groundnut",
            GrowthStages::new(25, 35, 45, 25),
            (0.40, 1.15, 0.60),
            0.7,
            (22.0, 32.0),
            (500.0, 1000.0),
            &[Sandy, Loamy],
            2500.0,
            550.0,
            (25.0, 50.0, 40.0),
        ),
    ]
}

/// Generic profile: moderate yield, neutral coefficients, every soil accepted
pub(super) fn generic_crop() -> CropProfile {
    crop(
        FALLBACK_CROP_ID,
        "Generic crop",
        GrowthStages::new(25, 35, 50, 30),
        (0.60, 1.00, 0.70),
        1.0,
        (15.0, 32.0),
        (400.0, 1200.0),
        &SoilType::ALL,
        3000.0,
        600.0,
        (100.0, 50.0, 50.0),
    )
}

pub(super) fn soils() -> [SoilProfile; 4] {
    let soil = |soil_type, whc, efficiency, risk| SoilProfile {
        soil_type,
        water_holding_capacity_mm_per_cm: whc,
        irrigation_efficiency: efficiency,
        disease_risk_score: risk,
    };
    [
        soil(SoilType::Clay, 2.0, 0.90, 70.0),
        soil(SoilType::Sandy, 0.7, 0.70, 30.0),
        soil(SoilType::Loamy, 1.5, 0.85, 40.0),
        soil(SoilType::Silty, 1.8, 0.85, 60.0),
    ]
}

#[allow(clippy::too_many_arguments)]
fn disease(
    id: &str,
    name: &str,
    kind: ThreatKind,
    crops: &[&str],
    temperature: (f64, f64),
    humidity: (f64, f64),
    rainfall: RainfallCategory,
    severity: Severity,
    loss: (f64, f64),
    prevention: &[&str],
    treatment: &[&str],
) -> DiseaseProfile {
    let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
    DiseaseProfile {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        affected_crops: strings(crops),
        temperature_range_c: ValueRange::new(temperature.0, temperature.1),
        humidity_range_percent: ValueRange::new(humidity.0, humidity.1),
        favorable_rainfall: rainfall,
        severity,
        yield_loss_percent: ValueRange::new(loss.0, loss.1),
        prevention: strings(prevention),
        treatment: strings(treatment),
    }
}

pub(super) fn diseases() -> Vec<DiseaseProfile> {
    use RainfallCategory::{High, Low, Medium};
    use ThreatKind::{Disease, Pest};
    vec![
        disease(
            "rice_blast",
            "Rice Blast",
            Disease,
            &["rice"],
            (24.0, 28.0),
            (90.0, 100.0),
            High,
            Severity::High,
            (10.0, 30.0),
            &[
                "Use blast-resistant varieties",
                "Avoid excess nitrogen top-dressing",
                "Keep bunds and channels free of grass hosts",
            ],
            &["Spray tricyclazole at first lesions"],
        ),
        disease(
            "bacterial_leaf_blight",
            "Bacterial Leaf Blight",
            Disease,
            &["rice"],
            (25.0, 34.0),
            (70.0, 100.0),
            High,
            Severity::High,
            (20.0, 50.0),
            &[
                "Use certified disease-free seed",
                "Drain fields periodically after heavy rain",
                "Apply potash to strengthen tissue",
            ],
            &["Remove infected stubble after harvest"],
        ),
        disease(
            "brown_spot",
            "Brown Spot",
            Disease,
            &["rice"],
            (25.0, 30.0),
            (80.0, 100.0),
            Medium,
            Severity::Medium,
            (5.0, 20.0),
            &["Correct soil nutrient deficiencies", "Treat seed with fungicide before sowing"],
            &["Spray mancozeb when spots appear"],
        ),
        disease(
            "wheat_leaf_rust",
            "Wheat Leaf Rust",
            Disease,
            &["wheat"],
            (15.0, 22.0),
            (85.0, 100.0),
            Medium,
            Severity::High,
            (10.0, 40.0),
            &[
                "Sow rust-resistant varieties",
                "Avoid late sowing",
                "Scout lower leaves weekly",
            ],
            &["Spray propiconazole at first pustules"],
        ),
        disease(
            "powdery_mildew",
            "Powdery Mildew",
            Disease,
            &["wheat", "tomato"],
            (15.0, 25.0),
            (50.0, 75.0),
            Low,
            Severity::Medium,
            (5.0, 20.0),
            &["Improve air circulation with proper spacing", "Avoid dense canopies"],
            &["Apply wettable sulphur"],
        ),
        disease(
            "fall_armyworm",
            "Fall Armyworm",
            Pest,
            &["maize", "sorghum"],
            (25.0, 30.0),
            (60.0, 90.0),
            Medium,
            Severity::High,
            (15.0, 60.0),
            &[
                "Install pheromone traps at sowing",
                "Inspect whorls twice a week",
                "Intercrop with legumes",
            ],
            &["Apply neem-based spray into whorls"],
        ),
        disease(
            "northern_leaf_blight",
            "Northern Leaf Blight",
            Disease,
            &["maize"],
            (18.0, 27.0),
            (90.0, 100.0),
            High,
            Severity::Medium,
            (10.0, 30.0),
            &["Rotate with non-host crops", "Bury or remove infected residue"],
            &["Spray azoxystrobin before tasselling"],
        ),
        disease(
            "cotton_bollworm",
            "Cotton Bollworm",
            Pest,
            &["cotton", "tomato"],
            (25.0, 30.0),
            (50.0, 80.0),
            Low,
            Severity::High,
            (20.0, 50.0),
            &[
                "Use pheromone traps for monitoring",
                "Plant trap crops along field borders",
                "Conserve natural enemies",
            ],
            &["Apply Bt or NPV sprays on young larvae"],
        ),
        disease(
            "red_rot",
            "Red Rot",
            Disease,
            &["sugarcane"],
            (25.0, 30.0),
            (85.0, 100.0),
            High,
            Severity::High,
            (20.0, 100.0),
            &["Plant healthy setts from disease-free nurseries", "Avoid waterlogging"],
            &["Uproot and burn affected clumps"],
        ),
        disease(
            "late_blight",
            "Late Blight",
            Disease,
            &["potato", "tomato"],
            (10.0, 25.0),
            (90.0, 100.0),
            High,
            Severity::High,
            (30.0, 80.0),
            &[
                "Use certified seed tubers",
                "Avoid overhead irrigation",
                "Destroy volunteer plants and cull piles",
            ],
            &["Spray metalaxyl-mancozeb at first symptoms"],
        ),
        disease(
            "early_blight",
            "Early Blight",
            Disease,
            &["potato", "tomato"],
            (24.0, 29.0),
            (75.0, 100.0),
            Medium,
            Severity::Medium,
            (5.0, 30.0),
            &["Rotate crops for at least two seasons", "Mulch to stop soil splash"],
            &["Spray chlorothalonil at 7-10 day intervals"],
        ),
        disease(
            "soybean_rust",
            "Soybean Rust",
            Disease,
            &["soybean"],
            (15.0, 28.0),
            (75.0, 100.0),
            High,
            Severity::High,
            (10.0, 80.0),
            &["Sow early-maturing varieties", "Scout lower canopy after rain"],
            &["Apply triazole fungicide at first detection"],
        ),
        disease(
            "tikka_leaf_spot",
            "Tikka Leaf Spot",
            Disease,
            &["groundnut"],
            (25.0, 30.0),
            (80.0, 100.0),
            High,
            Severity::Medium,
            (10.0, 50.0),
            &["Remove crop debris", "Rotate with cereals"],
            &["Spray carbendazim with mancozeb"],
        ),
        disease(
            "aphids",
            "Aphids",
            Pest,
            &["wheat", "cotton", "potato", "groundnut"],
            (18.0, 28.0),
            (40.0, 70.0),
            Low,
            Severity::Low,
            (5.0, 15.0),
            &["Encourage ladybird beetles", "Remove weed hosts around fields"],
            &["Spray neem oil or insecticidal soap"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate_crop_profile, validate_disease_profile, validate_soil_profile};

    #[test]
    fn test_builtin_tables_validate() {
        for crop in crops().iter().chain(std::iter::once(&generic_crop())) {
            assert!(validate_crop_profile(crop).is_ok(), "crop {}", crop.id);
        }
        for soil in soils().iter() {
            assert!(validate_soil_profile(soil).is_ok(), "soil {}", soil.soil_type);
        }
        for disease in diseases().iter() {
            assert!(validate_disease_profile(disease).is_ok(), "disease {}", disease.id);
        }
    }

    #[test]
    fn test_every_crop_has_a_threat() {
        let diseases = diseases();
        for crop in crops() {
            assert!(
                diseases.iter().any(|d| d.affects(&crop.id)),
                "no disease listed for {}",
                crop.id
            );
        }
    }
}
