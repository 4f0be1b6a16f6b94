//! Engine property tests
//!
//! Tests for the decision engine including:
//! - Non-negativity of water-balance outputs
//! - Crop coefficient continuity at stage boundaries
//! - Yield bounds and the no-stress identity
//! - Irrigation frequency consistency
//! - Disease risk monotonicity in humidity

use agro_engine::agronomy::{
    estimate_yield, kc_for_day, match_score, plan_frequency, reference_et0, RiskConditions,
    SeasonConditions,
};
use agro_engine::{
    AgronomicEngine, Catalog, CatalogDocument, DiseaseProfile, DiseaseRiskRequest,
    IrrigationPolicy, IrrigationRequest, MatchWeights, NutrientLevel, RainfallCategory, ReferenceTables,
    RiskLevel, Severity, SoilType, ThreatKind, ValueRange, WeatherInput, YieldRequest,
};
use chrono::NaiveDate;
use proptest::prelude::*;

fn date(day_of_year: u32) -> NaiveDate {
    NaiveDate::from_yo_opt(2024, day_of_year).unwrap()
}

fn blast() -> DiseaseProfile {
    DiseaseProfile {
        id: "blast".to_string(),
        name: "Blast".to_string(),
        kind: ThreatKind::Disease,
        affected_crops: vec!["rice".to_string()],
        temperature_range_c: ValueRange::new(25.0, 28.0),
        humidity_range_percent: ValueRange::new(85.0, 100.0),
        favorable_rainfall: RainfallCategory::High,
        severity: Severity::High,
        yield_loss_percent: ValueRange::new(10.0, 30.0),
        prevention: vec!["Use resistant varieties".to_string()],
        treatment: vec![],
    }
}

fn single_disease_engine() -> AgronomicEngine {
    let catalog = Catalog::from_document(CatalogDocument {
        diseases: vec![blast()],
        ..CatalogDocument::default()
    })
    .unwrap();
    AgronomicEngine::new(catalog, Default::default()).unwrap()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Loamy soil, 5 mm/day, 30 cm roots: 22.5 mm store -> every 4 days
    #[test]
    fn test_loamy_schedule() {
        let catalog = Catalog::builtin();
        let loam = catalog.soil(SoilType::Loamy);
        let plan = plan_frequency(
            5.0,
            loam.water_holding_capacity_mm_per_cm,
            Some(30.0),
            &IrrigationPolicy::default(),
        );
        assert_eq!(plan.interval_days, 4);
        assert!((plan.amount_per_irrigation_mm - 20.0).abs() < 1e-9);
        assert_eq!(plan.frequency.to_string(), "Every 4 days");
    }

    /// Cold dry weather far from a wet-season disease's band is low risk
    #[test]
    fn test_cold_dry_weather_is_low_risk() {
        let engine = single_disease_engine();
        let assessment = engine
            .compute_disease_risk(&DiseaseRiskRequest {
                crop_id: "rice".to_string(),
                temperature_c: 10.0,
                humidity_percent: Some(20.0),
                rainfall: RainfallCategory::Low,
                soil_type: "loamy".to_string(),
                history: vec![],
            })
            .unwrap();
        assert_eq!(assessment.factors.base, 0.0);
        assert_eq!(assessment.level, RiskLevel::Low);
    }

    /// Well-watered crop with perfect factors reaches its potential
    #[test]
    fn test_no_stress_potential() {
        let catalog = Catalog::builtin();
        let mut crop = catalog.fallback_crop().clone();
        crop.potential_yield_kg_ha = 5000.0;
        let estimate = estimate_yield(
            &crop,
            catalog.soil(SoilType::Loamy),
            &SeasonConditions {
                soil_type: SoilType::Loamy,
                land_size_ha: 1.0,
                temperature_c: 24.0,
                rainfall_mm: 1000.0,
                irrigation_mm: 500.0,
                nutrient_level: NutrientLevel::Excellent,
                seasonal_et0_mm: None,
            },
        );
        assert_eq!(estimate.estimated_kg, 5000.0);
        assert_eq!(estimate.gap_percent, 0.0);
    }
}

// ============================================================================
// Property Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn weather_strategy() -> impl Strategy<Value = WeatherInput> {
        (
            1u32..=366,
            proptest::option::of(-15.0f64..45.0),
            proptest::option::of(-20.0f64..40.0),
            proptest::option::of(-10.0f64..50.0),
            proptest::option::of(-10.0f64..120.0),
            proptest::option::of(-2.0f64..15.0),
            -95.0f64..95.0,
            -200.0f64..4500.0,
            proptest::option::of(-5.0f64..45.0),
        )
            .prop_map(|(day, mean, min, max, rh, wind, lat, elev, rs)| WeatherInput {
                temperature_c: mean,
                temperature_min_c: min,
                temperature_max_c: max,
                humidity_percent: rh,
                wind_speed_mps: wind,
                latitude: Some(lat),
                elevation_m: Some(elev),
                solar_radiation_mj: rs,
                ..WeatherInput::on(date(day))
            })
    }

    fn crop_id_strategy() -> impl Strategy<Value = String> {
        prop::sample::select(vec![
            "rice", "wheat", "maize", "cotton", "sugarcane", "tomato", "potato", "soybean",
            "groundnut", "unknown",
        ])
        .prop_map(String::from)
    }

    fn soil_strategy() -> impl Strategy<Value = String> {
        prop::sample::select(vec!["clay", "sandy", "loamy", "silty", "peat"]).prop_map(String::from)
    }

    fn nutrient_strategy() -> impl Strategy<Value = NutrientLevel> {
        prop::sample::select(vec![
            NutrientLevel::Poor,
            NutrientLevel::Average,
            NutrientLevel::Good,
            NutrientLevel::Excellent,
        ])
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// ET0, ETc and irrigation need never go negative
        #[test]
        fn prop_water_balance_non_negative(
            weather in weather_strategy(),
            crop_id in crop_id_strategy(),
            soil in soil_strategy(),
            days in 0u32..500,
            rain in -100.0f64..2000.0,
            deficit in -10.0f64..10.0,
        ) {
            prop_assert!(reference_et0(&weather.normalize()) >= 0.0);

            let engine = AgronomicEngine::default();
            let plan = engine.compute_irrigation_plan(&IrrigationRequest {
                weather,
                crop_id,
                days_after_planting: days,
                soil_type: soil,
                recent_rainfall_mm: rain,
                soil_moisture_deficit_mm: deficit,
                root_depth_cm: None,
            }).unwrap();

            prop_assert!(plan.et0_mm >= 0.0);
            prop_assert!(plan.etc_mm >= 0.0);
            prop_assert!(plan.net_irrigation_mm >= 0.0);
            prop_assert!(plan.irrigation_need_mm >= 0.0);
            prop_assert!((1..=7).contains(&plan.interval_days));
        }

        /// Normalised weather always keeps min <= mean <= max
        #[test]
        fn prop_normalized_temperature_order(weather in weather_strategy()) {
            let obs = weather.normalize();
            prop_assert!(obs.temperature_min_c <= obs.temperature_mean_c);
            prop_assert!(obs.temperature_mean_c <= obs.temperature_max_c);
            prop_assert!((0.0..=100.0).contains(&obs.humidity_percent));
            prop_assert!(obs.wind_speed_mps >= 0.0);
        }

        /// Estimated yield stays within [0, potential]
        #[test]
        fn prop_yield_bounds(
            crop_id in crop_id_strategy(),
            soil in soil_strategy(),
            land in -5.0f64..100.0,
            temperature in -10.0f64..50.0,
            rain in -50.0f64..3000.0,
            irrigation in -50.0f64..1500.0,
            nutrient in nutrient_strategy(),
            et0 in proptest::option::of(0.0f64..12.0),
        ) {
            let engine = AgronomicEngine::default();
            let forecast = engine.compute_yield_forecast(&YieldRequest {
                crop_id,
                soil_type: soil,
                land_size_ha: land,
                temperature_c: temperature,
                rainfall_mm: rain,
                irrigation_mm: irrigation,
                nutrient_level: nutrient,
                seasonal_et0_mm: et0,
            }).unwrap();

            prop_assert!(forecast.estimated_yield_kg >= 0.0);
            prop_assert!(forecast.estimated_yield_kg <= forecast.potential_yield_kg);
            prop_assert!((0.0..=100.0).contains(&forecast.yield_gap_percent));
        }

        /// With enough water the estimate is potential x soil x nutrient x temperature
        #[test]
        fn prop_no_stress_identity(
            land in 0.0f64..50.0,
            temperature in 0.0f64..45.0,
            nutrient in nutrient_strategy(),
            soil_index in 0usize..4,
        ) {
            let catalog = Catalog::builtin();
            let soil_type = SoilType::ALL[soil_index];
            for crop in catalog.crops() {
                let conditions = SeasonConditions {
                    soil_type,
                    land_size_ha: land,
                    temperature_c: temperature,
                    rainfall_mm: 0.0,
                    irrigation_mm: 100_000.0,
                    nutrient_level: nutrient,
                    seasonal_et0_mm: None,
                };
                let estimate = estimate_yield(crop, catalog.soil(soil_type), &conditions);
                let f = &estimate.factors;
                prop_assert!(f.available_water_mm >= f.seasonal_etc_mm);
                let expected = estimate.potential_kg * f.soil_factor * f.nutrient_factor * f.temperature_factor;
                prop_assert_eq!(estimate.estimated_kg, expected);
            }
        }

        /// Amount per event times applications per week equals the weekly total
        #[test]
        fn prop_frequency_consistency(
            need in 0.0f64..30.0,
            whc in 0.1f64..3.0,
            root in proptest::option::of(5.0f64..150.0),
        ) {
            let plan = plan_frequency(need, whc, root, &IrrigationPolicy::default());
            let weekly = plan.amount_per_irrigation_mm * plan.applications_per_week;
            prop_assert!((weekly - plan.weekly_total_mm).abs() < 1e-9);
            prop_assert!((1..=7).contains(&plan.interval_days));
        }

        /// Kc hits the stage coefficients exactly and rises through development
        #[test]
        fn prop_kc_boundaries(offset in 0u32..200) {
            let catalog = Catalog::builtin();
            for crop in catalog.crops() {
                let s = &crop.stages;
                let kc = &crop.coefficients;
                let end_development = s.initial_days + s.development_days;
                prop_assert_eq!(kc_for_day(crop, 0), kc.kc_initial);
                prop_assert_eq!(kc_for_day(crop, end_development), kc.kc_mid);

                if kc.kc_mid >= kc.kc_initial {
                    let a = s.initial_days + offset.min(s.development_days);
                    let b = (a + 1).min(end_development);
                    prop_assert!(kc_for_day(crop, a) <= kc_for_day(crop, b));
                }
            }
        }

        /// Match score and risk never fall as humidity rises toward the
        /// middle of the favorable band
        #[test]
        fn prop_risk_monotone_in_humidity(
            temperature in 0.0f64..40.0,
            f1 in 0.0f64..=1.0,
            f2 in 0.0f64..=1.0,
            rainfall in prop::sample::select(vec![
                RainfallCategory::Low,
                RainfallCategory::Medium,
                RainfallCategory::High,
            ]),
        ) {
            let midpoint = blast().humidity_range_percent.midpoint();
            let (low, high) = if f1 <= f2 {
                (f1 * midpoint, f2 * midpoint)
            } else {
                (f2 * midpoint, f1 * midpoint)
            };

            let weights = MatchWeights::default();
            let conditions = |humidity_percent: f64| RiskConditions {
                temperature_c: temperature,
                humidity_percent,
                rainfall,
                soil_risk_score: 40.0,
                history: &[],
            };
            let disease = blast();
            prop_assert!(
                match_score(&disease, &conditions(low), &weights)
                    <= match_score(&disease, &conditions(high), &weights)
            );

            let engine = single_disease_engine();
            let request = |humidity: f64| DiseaseRiskRequest {
                crop_id: "rice".to_string(),
                temperature_c: temperature,
                humidity_percent: Some(humidity),
                rainfall,
                soil_type: "loamy".to_string(),
                history: vec![],
            };
            let at_low = engine.compute_disease_risk(&request(low)).unwrap();
            let at_high = engine.compute_disease_risk(&request(high)).unwrap();
            prop_assert!(at_low.score <= at_high.score);
            prop_assert!(at_low.candidates[0].match_score <= at_high.candidates[0].match_score);
        }
    }
}
