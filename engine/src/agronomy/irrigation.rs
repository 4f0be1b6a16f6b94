//! Crop water use and daily irrigation need

use serde::Serialize;

use crate::validation::non_negative;

/// Monthly rainfall above which the SCS curve turns linear (mm)
pub const SCS_BREAKPOINT_MM: f64 = 250.0;

/// Daily water balance of a field
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct IrrigationNeed {
    pub etc_mm: f64,
    /// Effective rainfall credited per day (mm/day)
    pub effective_rainfall_mm: f64,
    pub net_mm: f64,
    /// Need after application losses (mm/day)
    pub gross_mm: f64,
}

/// Crop evapotranspiration, ETc = ET0 x Kc
pub fn crop_et(et0_mm: f64, kc: f64) -> f64 {
    non_negative(et0_mm * kc)
}

/// USDA-SCS effective rainfall for a monthly-scale total
pub fn effective_rainfall(rainfall_mm: f64) -> f64 {
    let p = non_negative(rainfall_mm);
    if p < SCS_BREAKPOINT_MM {
        p * (125.0 - 0.2 * p) / 125.0
    } else {
        125.0 + 0.1 * p
    }
}

/// Daily irrigation need
///
/// `recent_rainfall_mm` is the total over `window_days`; its effective part
/// is spread evenly over the window. `deficit_mm` is an extra daily amount
/// needed to refill the root zone.
pub fn irrigation_need(
    etc_mm: f64,
    recent_rainfall_mm: f64,
    window_days: u32,
    deficit_mm: f64,
    efficiency: f64,
) -> IrrigationNeed {
    let etc_mm = non_negative(etc_mm);
    let effective_rainfall_mm = effective_rainfall(recent_rainfall_mm) / window_days.max(1) as f64;
    let net_mm = non_negative(etc_mm - effective_rainfall_mm + non_negative(deficit_mm));
    let gross_mm = if efficiency > 0.0 {
        non_negative(net_mm / efficiency.min(1.0))
    } else {
        net_mm
    };

    IrrigationNeed {
        etc_mm,
        effective_rainfall_mm,
        net_mm,
        gross_mm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_crop_et() {
        assert!(approx(crop_et(5.0, 1.2), 6.0));
        assert_eq!(crop_et(-1.0, 1.0), 0.0);
    }

    #[test]
    fn test_effective_rainfall_branches() {
        assert_eq!(effective_rainfall(0.0), 0.0);
        assert!(approx(effective_rainfall(100.0), 84.0));
        assert!(approx(effective_rainfall(300.0), 155.0));
        assert_eq!(effective_rainfall(-20.0), 0.0);
    }

    #[test]
    fn test_effective_rainfall_continuous_at_breakpoint() {
        let below = effective_rainfall(SCS_BREAKPOINT_MM - 1e-9);
        let at = effective_rainfall(SCS_BREAKPOINT_MM);
        assert!((below - at).abs() < 1e-6);
        assert!(approx(at, 150.0));
    }

    #[test]
    fn test_need_without_rain() {
        let need = irrigation_need(5.0, 0.0, 30, 0.0, 0.85);
        assert!(approx(need.net_mm, 5.0));
        assert!(approx(need.gross_mm, 5.0 / 0.85));
    }

    #[test]
    fn test_rain_is_spread_over_window() {
        // 100 mm -> 84 mm effective over 30 days -> 2.8 mm/day
        let need = irrigation_need(5.0, 100.0, 30, 0.0, 1.0);
        assert!(approx(need.effective_rainfall_mm, 2.8));
        assert!(approx(need.net_mm, 2.2));
    }

    #[test]
    fn test_deficit_adds_to_need() {
        let need = irrigation_need(4.0, 0.0, 30, 1.5, 1.0);
        assert!(approx(need.net_mm, 5.5));
    }

    #[test]
    fn test_heavy_rain_floors_need_at_zero() {
        let need = irrigation_need(3.0, 600.0, 7, 0.0, 0.7);
        assert_eq!(need.net_mm, 0.0);
        assert_eq!(need.gross_mm, 0.0);
    }
}
