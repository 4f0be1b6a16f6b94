//! Agronomic calculators
//!
//! Pure functions over reference profiles and sanitised inputs. The
//! [`crate::engine::AgronomicEngine`] wires them together.

pub mod crop_coefficient;
pub mod disease_risk;
pub mod eco_score;
pub mod et0;
pub mod frequency;
pub mod irrigation;
pub mod solar;
pub mod yield_response;

pub use crop_coefficient::{kc_for_day, stage_at};
pub use disease_risk::{assess_disease_risk, match_score, risk_level, RiskConditions};
pub use eco_score::eco_score;
pub use et0::{et0_breakdown, reference_et0, Et0Breakdown};
pub use frequency::{plan_frequency, FrequencyPlan};
pub use irrigation::{crop_et, effective_rainfall, irrigation_need, IrrigationNeed};
pub use solar::SolarGeometry;
pub use yield_response::{estimate_yield, seasonal_crop_et, SeasonConditions, YieldEstimate};
