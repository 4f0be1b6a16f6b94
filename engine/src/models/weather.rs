//! Weather data models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::validation::{clamp_latitude, clamp_percent, non_negative};

/// Humidity assumed when the observation has none
pub const DEFAULT_HUMIDITY_PERCENT: f64 = 50.0;
/// FAO-56 default wind speed at 2 m when no measurement exists
pub const DEFAULT_WIND_SPEED_MPS: f64 = 2.0;
/// Mean temperature assumed when no temperature is reported at all
pub const DEFAULT_MEAN_TEMPERATURE_C: f64 = 25.0;
/// Half of the diurnal range assumed when only a mean is reported
pub const DEFAULT_HALF_RANGE_C: f64 = 5.0;

/// A daily weather observation, normalised for the energy-balance model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherObservation {
    pub date: NaiveDate,
    pub temperature_mean_c: f64,
    pub temperature_min_c: f64,
    pub temperature_max_c: f64,
    pub humidity_percent: f64,
    /// Wind speed at 2 m height
    pub wind_speed_mps: f64,
    pub latitude: f64,
    pub elevation_m: f64,
    /// Measured shortwave radiation (MJ/m²/day)
    pub solar_radiation_mj: Option<f64>,
}

/// Weather record as received from the weather collaborator
///
/// Every field except the date may be missing; [`WeatherInput::normalize`]
/// fills the gaps with documented defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherInput {
    pub date: NaiveDate,
    pub temperature_c: Option<f64>,
    pub temperature_min_c: Option<f64>,
    pub temperature_max_c: Option<f64>,
    pub humidity_percent: Option<f64>,
    pub wind_speed_mps: Option<f64>,
    /// Height of the anemometer; wind is converted to 2 m when set
    pub wind_height_m: Option<f64>,
    pub latitude: Option<f64>,
    pub elevation_m: Option<f64>,
    pub solar_radiation_mj: Option<f64>,
}

impl WeatherInput {
    /// Weather record with only a date; every reading takes its default
    pub fn on(date: NaiveDate) -> Self {
        Self {
            date,
            temperature_c: None,
            temperature_min_c: None,
            temperature_max_c: None,
            humidity_percent: None,
            wind_speed_mps: None,
            wind_height_m: None,
            latitude: None,
            elevation_m: None,
            solar_radiation_mj: None,
        }
    }

    /// Turn a partial record into a [`WeatherObservation`]
    pub fn normalize(&self) -> WeatherObservation {
        let finite = |v: Option<f64>| v.filter(|x| x.is_finite());

        let mean = finite(self.temperature_c);
        let min = finite(self.temperature_min_c);
        let max = finite(self.temperature_max_c);

        let (mean, min, max) = match (mean, min, max) {
            (Some(mean), Some(min), Some(max)) => (mean, min, max),
            (Some(mean), Some(min), None) => (mean, min, mean + (mean - min).abs()),
            (Some(mean), None, Some(max)) => (mean, mean - (max - mean).abs(), max),
            (Some(mean), None, None) => (mean, mean - DEFAULT_HALF_RANGE_C, mean + DEFAULT_HALF_RANGE_C),
            (None, Some(min), Some(max)) => ((min + max) / 2.0, min, max),
            (None, Some(t), None) | (None, None, Some(t)) => {
                (t, t - DEFAULT_HALF_RANGE_C, t + DEFAULT_HALF_RANGE_C)
            }
            (None, None, None) => (
                DEFAULT_MEAN_TEMPERATURE_C,
                DEFAULT_MEAN_TEMPERATURE_C - DEFAULT_HALF_RANGE_C,
                DEFAULT_MEAN_TEMPERATURE_C + DEFAULT_HALF_RANGE_C,
            ),
        };

        // Repair ordering so min <= mean <= max always holds
        let mut temps = [min, mean, max];
        temps.sort_by(|a, b| a.total_cmp(b));

        let wind = non_negative(finite(self.wind_speed_mps).unwrap_or(DEFAULT_WIND_SPEED_MPS));
        let wind = match finite(self.wind_height_m) {
            Some(height) => wind_speed_at_2m(wind, height),
            None => wind,
        };

        WeatherObservation {
            date: self.date,
            temperature_min_c: temps[0],
            temperature_mean_c: temps[1],
            temperature_max_c: temps[2],
            humidity_percent: clamp_percent(
                finite(self.humidity_percent).unwrap_or(DEFAULT_HUMIDITY_PERCENT),
            ),
            wind_speed_mps: wind,
            latitude: clamp_latitude(finite(self.latitude).unwrap_or(0.0)),
            elevation_m: finite(self.elevation_m).unwrap_or(0.0),
            solar_radiation_mj: finite(self.solar_radiation_mj).map(non_negative),
        }
    }
}

/// Convert wind measured at `height_m` to the 2 m reference height (FAO-56 eq. 47)
pub fn wind_speed_at_2m(wind_mps: f64, height_m: f64) -> f64 {
    // The log profile is undefined near the ground; treat low sensors as 2 m
    if height_m <= 2.0 {
        return non_negative(wind_mps);
    }
    non_negative(wind_mps * 4.87 / (67.8 * height_m - 5.42).ln())
}
