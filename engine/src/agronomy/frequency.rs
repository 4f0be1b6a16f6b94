//! Irrigation interval and per-event amount from root-zone storage

use serde::Serialize;

use crate::models::IrrigationFrequency;
use crate::policy::IrrigationPolicy;
use crate::validation::non_negative;

/// Watering schedule derived from a daily need
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct FrequencyPlan {
    /// Readily available water in the root zone (mm)
    pub readily_available_mm: f64,
    pub interval_days: u32,
    pub frequency: IrrigationFrequency,
    pub amount_per_irrigation_mm: f64,
    pub applications_per_week: f64,
    pub weekly_total_mm: f64,
}

/// Schedule a daily need against the soil's storage
///
/// `whc_mm_per_cm` is the soil water-holding capacity; a missing root depth
/// uses the policy default.
pub fn plan_frequency(
    need_mm_per_day: f64,
    whc_mm_per_cm: f64,
    root_depth_cm: Option<f64>,
    policy: &IrrigationPolicy,
) -> FrequencyPlan {
    let need = non_negative(need_mm_per_day);
    let root_depth = non_negative(root_depth_cm.unwrap_or(policy.default_root_depth_cm));
    let readily_available_mm = non_negative(whc_mm_per_cm) * root_depth * policy.depletion_fraction;

    let min = policy.min_interval_days.max(1);
    let max = policy.max_interval_days.max(min);

    let interval_days = if need > 0.0 {
        (readily_available_mm / need)
            .floor()
            .clamp(min as f64, max as f64) as u32
    } else {
        max
    };

    let frequency = if need <= 0.0 {
        IrrigationFrequency::NotRequired
    } else if interval_days == 1 {
        IrrigationFrequency::Daily
    } else {
        IrrigationFrequency::EveryNDays(interval_days)
    };

    FrequencyPlan {
        readily_available_mm,
        interval_days,
        frequency,
        amount_per_irrigation_mm: need * interval_days as f64,
        applications_per_week: 7.0 / interval_days as f64,
        weekly_total_mm: need * 7.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_loamy_five_mm_every_four_days() {
        let plan = plan_frequency(5.0, 1.5, Some(30.0), &IrrigationPolicy::default());
        assert!(approx(plan.readily_available_mm, 22.5));
        assert_eq!(plan.interval_days, 4);
        assert!(approx(plan.amount_per_irrigation_mm, 20.0));
        assert_eq!(plan.frequency, IrrigationFrequency::EveryNDays(4));
        assert_eq!(plan.frequency.to_string(), "Every 4 days");
    }

    #[test]
    fn test_default_root_depth() {
        let policy = IrrigationPolicy::default();
        assert_eq!(
            plan_frequency(5.0, 1.5, None, &policy),
            plan_frequency(5.0, 1.5, Some(30.0), &policy)
        );
    }

    #[test]
    fn test_high_need_on_sand_is_daily() {
        let plan = plan_frequency(12.0, 0.7, Some(30.0), &IrrigationPolicy::default());
        assert_eq!(plan.interval_days, 1);
        assert_eq!(plan.frequency, IrrigationFrequency::Daily);
        assert_eq!(plan.frequency.to_string(), "Daily");
    }

    #[test]
    fn test_interval_capped_at_a_week() {
        let plan = plan_frequency(0.5, 2.0, Some(60.0), &IrrigationPolicy::default());
        assert_eq!(plan.interval_days, 7);
        assert!(approx(plan.applications_per_week, 1.0));
    }

    #[test]
    fn test_zero_need_is_not_required() {
        let plan = plan_frequency(0.0, 1.5, None, &IrrigationPolicy::default());
        assert_eq!(plan.interval_days, 7);
        assert_eq!(plan.frequency, IrrigationFrequency::NotRequired);
        assert_eq!(plan.amount_per_irrigation_mm, 0.0);
        assert_eq!(plan.weekly_total_mm, 0.0);
    }

    #[test]
    fn test_weekly_total_is_consistent() {
        let policy = IrrigationPolicy::default();
        for need in [0.3, 1.0, 2.7, 5.0, 8.4, 15.0] {
            let plan = plan_frequency(need, 1.8, Some(45.0), &policy);
            let weekly = plan.amount_per_irrigation_mm * plan.applications_per_week;
            assert!((weekly - plan.weekly_total_mm).abs() < 1e-9);
        }
    }
}
