//! Reference evapotranspiration, FAO-56 Penman-Monteith on a daily step

use serde::Serialize;

use super::solar::SolarGeometry;
use crate::models::WeatherObservation;

/// Stefan-Boltzmann constant (MJ K⁻⁴ m⁻² day⁻¹)
pub const STEFAN_BOLTZMANN: f64 = 4.903e-9;
/// Albedo of the grass reference surface
pub const REFERENCE_ALBEDO: f64 = 0.23;
/// Hargreaves radiation coefficient for interior locations
pub const HARGREAVES_KRS: f64 = 0.16;

/// Intermediate terms of the Penman-Monteith equation
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Et0Breakdown {
    /// Atmospheric pressure (kPa)
    pub pressure_kpa: f64,
    /// Psychrometric constant (kPa/°C)
    pub psychrometric_constant: f64,
    /// Mean saturation vapour pressure (kPa)
    pub saturation_vapour_pressure: f64,
    /// Actual vapour pressure (kPa)
    pub actual_vapour_pressure: f64,
    /// Slope of the saturation vapour pressure curve (kPa/°C)
    pub vapour_pressure_slope: f64,
    /// Incoming shortwave radiation used (MJ/m²/day)
    pub solar_radiation: f64,
    pub net_shortwave: f64,
    pub net_longwave: f64,
    pub net_radiation: f64,
    /// Reference evapotranspiration (mm/day)
    pub et0_mm: f64,
}

/// Atmospheric pressure from elevation (eq. 7)
pub fn atmospheric_pressure(elevation_m: f64) -> f64 {
    101.3 * ((293.0 - 0.0065 * elevation_m) / 293.0).powf(5.26)
}

/// Psychrometric constant from pressure (eq. 8)
pub fn psychrometric_constant(pressure_kpa: f64) -> f64 {
    0.000665 * pressure_kpa
}

/// Saturation vapour pressure at `temperature_c` (eq. 11)
pub fn saturation_vapour_pressure(temperature_c: f64) -> f64 {
    0.6108 * (17.27 * temperature_c / (temperature_c + 237.3)).exp()
}

/// Slope of the saturation vapour pressure curve (eq. 13)
pub fn vapour_pressure_slope(temperature_c: f64) -> f64 {
    4098.0 * saturation_vapour_pressure(temperature_c) / (temperature_c + 237.3).powi(2)
}

/// Compute ET0 for a single observation
pub fn reference_et0(weather: &WeatherObservation) -> f64 {
    et0_breakdown(weather).et0_mm
}

/// Compute ET0 and every intermediate term
pub fn et0_breakdown(weather: &WeatherObservation) -> Et0Breakdown {
    let t_mean = weather.temperature_mean_c;
    let t_min = weather.temperature_min_c;
    let t_max = weather.temperature_max_c;
    let u2 = weather.wind_speed_mps.max(0.0);

    let pressure_kpa = atmospheric_pressure(weather.elevation_m);
    let gamma = psychrometric_constant(pressure_kpa);

    let es = (saturation_vapour_pressure(t_max) + saturation_vapour_pressure(t_min)) / 2.0;
    let ea = es * weather.humidity_percent.clamp(0.0, 100.0) / 100.0;
    let delta = vapour_pressure_slope(t_mean);

    let geometry = SolarGeometry::compute(weather.latitude, weather.elevation_m, weather.date);
    let ra = geometry.extraterrestrial_radiation;
    let rso = geometry.clear_sky_radiation;

    let rs = weather
        .solar_radiation_mj
        .unwrap_or_else(|| HARGREAVES_KRS * (t_max - t_min).max(0.0).sqrt() * ra)
        .clamp(0.0, rso.max(0.0));

    let net_shortwave = (1.0 - REFERENCE_ALBEDO) * rs;

    let relative_shortwave = if rso > 0.0 {
        (rs / rso).clamp(0.25, 1.0)
    } else {
        0.5
    };
    let t_max_k4 = (t_max + 273.16).powi(4);
    let t_min_k4 = (t_min + 273.16).powi(4);
    let net_longwave = STEFAN_BOLTZMANN
        * ((t_max_k4 + t_min_k4) / 2.0)
        * (0.34 - 0.14 * ea.sqrt())
        * (1.35 * relative_shortwave - 0.35);

    let net_radiation = net_shortwave - net_longwave;
    // Soil heat flux is negligible for daily steps
    let soil_heat_flux = 0.0;

    let numerator = 0.408 * delta * (net_radiation - soil_heat_flux)
        + gamma * (900.0 / (t_mean + 273.0)) * u2 * (es - ea);
    let denominator = delta + gamma * (1.0 + 0.34 * u2);
    let et0 = numerator / denominator;

    Et0Breakdown {
        pressure_kpa,
        psychrometric_constant: gamma,
        saturation_vapour_pressure: es,
        actual_vapour_pressure: ea,
        vapour_pressure_slope: delta,
        solar_radiation: rs,
        net_shortwave,
        net_longwave,
        net_radiation,
        et0_mm: if et0.is_finite() { et0.max(0.0) } else { 0.0 },
    }
}
