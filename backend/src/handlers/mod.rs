//! HTTP handlers for the Agro Advisor API

pub mod assessment;
pub mod crops;
pub mod disease;
pub mod eco_score;
pub mod health;
pub mod irrigation;
pub mod yield_forecast;

pub use assessment::assess_farm;
pub use crops::{get_crop, list_crops};
pub use disease::compute_disease_risk;
pub use eco_score::compute_eco_score;
pub use health::health_check;
pub use irrigation::compute_irrigation_plan;
pub use yield_forecast::compute_yield_forecast;
