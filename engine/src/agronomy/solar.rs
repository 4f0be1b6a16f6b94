//! Solar geometry for daily-step evapotranspiration (FAO-56 eqs. 21-25, 34, 37)

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::f64::consts::PI;

/// Solar constant (MJ m⁻² min⁻¹)
pub const SOLAR_CONSTANT: f64 = 0.0820;

/// Day-of-year solar quantities for one location
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct SolarGeometry {
    pub day_of_year: u32,
    /// Solar declination (rad)
    pub declination: f64,
    /// Sunset hour angle (rad)
    pub sunset_hour_angle: f64,
    /// Inverse relative Earth-Sun distance
    pub inverse_distance: f64,
    /// Extraterrestrial radiation (MJ/m²/day)
    pub extraterrestrial_radiation: f64,
    /// Clear-sky radiation (MJ/m²/day)
    pub clear_sky_radiation: f64,
    /// Maximum possible sunshine duration (hours)
    pub daylight_hours: f64,
}

impl SolarGeometry {
    /// Compute solar geometry for `latitude_deg` at `elevation_m` on `date`
    pub fn compute(latitude_deg: f64, elevation_m: f64, date: NaiveDate) -> Self {
        let day_of_year = date.ordinal();
        let j = day_of_year as f64;
        let phi = latitude_deg.clamp(-90.0, 90.0).to_radians();

        let inverse_distance = 1.0 + 0.033 * (2.0 * PI * j / 365.0).cos();
        let declination = 0.409 * (2.0 * PI * j / 365.0 - 1.39).sin();

        // Clamped so polar day (ws = pi) and polar night (ws = 0) stay defined
        let cos_ws = (-phi.tan() * declination.tan()).clamp(-1.0, 1.0);
        let sunset_hour_angle = cos_ws.acos();

        let ra = (24.0 * 60.0 / PI)
            * SOLAR_CONSTANT
            * inverse_distance
            * (sunset_hour_angle * phi.sin() * declination.sin()
                + phi.cos() * declination.cos() * sunset_hour_angle.sin());
        let extraterrestrial_radiation = ra.max(0.0);

        let clear_sky_radiation = (0.75 + 2e-5 * elevation_m) * extraterrestrial_radiation;

        Self {
            day_of_year,
            declination,
            sunset_hour_angle,
            inverse_distance,
            extraterrestrial_radiation,
            clear_sky_radiation: clear_sky_radiation.max(0.0),
            daylight_hours: 24.0 * sunset_hour_angle / PI,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_fao56_example_8() {
        // 3 September at 20°S: dr 0.985, δ 0.120 rad, ωs 1.527 rad, Ra 32.2
        let date = NaiveDate::from_ymd_opt(2015, 9, 3).unwrap();
        let geo = SolarGeometry::compute(-20.0, 0.0, date);
        assert_eq!(geo.day_of_year, 246);
        assert!(approx(geo.inverse_distance, 0.985, 0.001));
        assert!(approx(geo.declination, 0.120, 0.001));
        assert!(approx(geo.sunset_hour_angle, 1.527, 0.001));
        assert!(approx(geo.extraterrestrial_radiation, 32.2, 0.1));
    }

    #[test]
    fn test_daylight_hours_example_9() {
        let date = NaiveDate::from_ymd_opt(2015, 9, 3).unwrap();
        let geo = SolarGeometry::compute(-20.0, 0.0, date);
        assert!(approx(geo.daylight_hours, 11.7, 0.05));
    }

    #[test]
    fn test_clear_sky_scales_with_elevation() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let low = SolarGeometry::compute(30.0, 0.0, date);
        let high = SolarGeometry::compute(30.0, 2000.0, date);
        assert!(approx(low.clear_sky_radiation, 0.75 * low.extraterrestrial_radiation, 1e-9));
        assert!(high.clear_sky_radiation > low.clear_sky_radiation);
    }

    #[test]
    fn test_polar_night_has_no_radiation() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 21).unwrap();
        let geo = SolarGeometry::compute(85.0, 0.0, date);
        assert_eq!(geo.sunset_hour_angle, 0.0);
        assert_eq!(geo.extraterrestrial_radiation, 0.0);
        assert_eq!(geo.daylight_hours, 0.0);
    }

    #[test]
    fn test_polar_day_and_poles_are_finite() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        for lat in [-90.0, 90.0, 89.9] {
            let geo = SolarGeometry::compute(lat, 0.0, date);
            assert!(geo.extraterrestrial_radiation.is_finite());
            assert!(geo.extraterrestrial_radiation >= 0.0);
        }
        let geo = SolarGeometry::compute(85.0, 0.0, date);
        assert!(approx(geo.daylight_hours, 24.0, 1e-9));
    }
}
