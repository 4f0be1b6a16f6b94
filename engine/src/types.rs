//! Common types used across the engine

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Closed numeric interval `[min, max]`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Distance from `value` to the nearest bound, 0 when inside
    pub fn distance_to(&self, value: f64) -> f64 {
        if value < self.min {
            self.min - value
        } else if value > self.max {
            value - self.max
        } else {
            0.0
        }
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn is_well_ordered(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

/// Soil texture classes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Clay,
    Sandy,
    #[default]
    Loamy,
    Silty,
}

impl SoilType {
    pub const ALL: [SoilType; 4] = [
        SoilType::Clay,
        SoilType::Sandy,
        SoilType::Loamy,
        SoilType::Silty,
    ];
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoilType::Clay => write!(f, "Clay"),
            SoilType::Sandy => write!(f, "Sandy"),
            SoilType::Loamy => write!(f, "Loamy"),
            SoilType::Silty => write!(f, "Silty"),
        }
    }
}

impl FromStr for SoilType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "clay" | "clayey" => Ok(SoilType::Clay),
            "sandy" | "sand" => Ok(SoilType::Sandy),
            "loamy" | "loam" => Ok(SoilType::Loamy),
            "silty" | "silt" => Ok(SoilType::Silty),
            other => Err(format!("unknown soil type: {}", other)),
        }
    }
}

/// Nutrient management quality reported by the farmer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum NutrientLevel {
    Poor,
    #[default]
    Average,
    Good,
    Excellent,
}

impl NutrientLevel {
    /// Multiplicative yield factor for this nutrient level
    pub fn yield_factor(&self) -> f64 {
        match self {
            NutrientLevel::Poor => 0.6,
            NutrientLevel::Average => 0.85,
            NutrientLevel::Good => 0.95,
            NutrientLevel::Excellent => 1.0,
        }
    }
}

impl FromStr for NutrientLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "poor" | "low" => Ok(NutrientLevel::Poor),
            "average" | "medium" | "moderate" => Ok(NutrientLevel::Average),
            "good" => Ok(NutrientLevel::Good),
            "excellent" | "high" => Ok(NutrientLevel::Excellent),
            other => Err(format!("unknown nutrient level: {}", other)),
        }
    }
}

/// Rainfall intensity category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RainfallCategory {
    Low,
    Medium,
    High,
}

impl RainfallCategory {
    /// Categorise a rainfall total (mm over the recent window)
    pub fn from_mm(rainfall_mm: f64) -> Self {
        if rainfall_mm < 50.0 {
            RainfallCategory::Low
        } else if rainfall_mm < 150.0 {
            RainfallCategory::Medium
        } else {
            RainfallCategory::High
        }
    }
}

/// Ordinal disease risk level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
            RiskLevel::Critical => write!(f, "Critical"),
        }
    }
}

/// Severity tag of a disease or pest
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Irrigation delivery method
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum IrrigationMethod {
    Drip,
    Sprinkler,
    Flood,
}
