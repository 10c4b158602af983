//! Country-profile-adjusted consumption and time-use metrics.
//!
//! All figures scale a profile rate constant by elapsed time. Coffee and
//! driving subtract their minimum ages from fractional years alive and
//! clamp at zero before multiplying.

use crate::elapsed::DAYS_PER_YEAR;
use crate::types::{ConsumptionStats, CountryProfile, Elapsed, FoodStat};

const COFFEE_MINIMUM_AGE_YEARS: f64 = 18.0;
const DRIVING_MINIMUM_AGE_YEARS: f64 = 16.0;

/// Round to the given number of decimal places
fn round_to(value: f64, precision: u8) -> f64 {
    let factor = 10f64.powi(i32::from(precision));
    (value * factor).round() / factor
}

/// Compute all consumption metrics against the given country profile
pub fn consumption_stats(elapsed: &Elapsed, profile: &CountryProfile) -> ConsumptionStats {
    let days = elapsed.days as f64;
    let coffee_years = (elapsed.years - COFFEE_MINIMUM_AGE_YEARS).max(0.0);
    let driving_years = (elapsed.years - DRIVING_MINIMUM_AGE_YEARS).max(0.0);

    let food = profile
        .food
        .iter()
        .map(|item| {
            let raw = elapsed.years * item.per_year;
            let amount = match item.precision {
                Some(precision) => round_to(raw, precision),
                None => raw.floor(),
            };
            FoodStat {
                icon: item.icon.clone(),
                label: item.label.clone(),
                amount,
                precision: item.precision.unwrap_or(0),
            }
        })
        .collect();

    ConsumptionStats {
        steps_walked: (days * profile.steps_per_day).floor() as i64,
        commute_hours: (days * profile.commute_minutes_per_day / 60.0).floor() as i64,
        screen_time_days: (days * profile.screen_hours_per_day / 24.0).floor() as i64,
        baths_taken: (elapsed.weeks as f64 * profile.baths_per_week).floor() as i64,
        cups_of_coffee: (coffee_years * DAYS_PER_YEAR * profile.coffee_cups_per_day).floor()
            as i64,
        miles_driven: (driving_years * profile.miles_driven_per_year).floor() as i64,
        food,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_default_profiles;
    use crate::elapsed::elapsed_between;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn elapsed_for(birth: (i32, u32, u32), reference: (i32, u32, u32)) -> Elapsed {
        let birth = NaiveDate::from_ymd_opt(birth.0, birth.1, birth.2).unwrap();
        let reference = Utc
            .with_ymd_and_hms(reference.0, reference.1, reference.2, 0, 0, 0)
            .unwrap();
        elapsed_between(birth, reference)
    }

    #[test]
    fn test_profiles_with_different_rates_differ() {
        let catalog = build_default_profiles();
        let elapsed = elapsed_for((1980, 3, 1), (2020, 3, 1));

        let us = consumption_stats(&elapsed, &catalog.profiles["us"]);
        let jp = consumption_stats(&elapsed, &catalog.profiles["jp"]);

        assert_ne!(us.steps_walked, jp.steps_walked);
        assert_ne!(us.cups_of_coffee, jp.cups_of_coffee);
    }

    #[test]
    fn test_equal_rates_produce_equal_values() {
        let catalog = build_default_profiles();
        let elapsed = elapsed_for((1980, 3, 1), (2020, 3, 1));

        // us and ca share the same step rate
        let us = consumption_stats(&elapsed, &catalog.profiles["us"]);
        let ca = consumption_stats(&elapsed, &catalog.profiles["ca"]);
        assert_eq!(us.steps_walked, ca.steps_walked);
    }

    #[test]
    fn test_coffee_clamped_before_age_18() {
        let catalog = build_default_profiles();
        let elapsed = elapsed_for((2010, 1, 1), (2024, 1, 1));

        let stats = consumption_stats(&elapsed, &catalog.profiles["us"]);
        assert_eq!(stats.cups_of_coffee, 0);
    }

    #[test]
    fn test_driving_gated_at_16() {
        let catalog = build_default_profiles();
        let profile = &catalog.profiles["us"];

        let fifteen = consumption_stats(&elapsed_for((2009, 1, 1), (2024, 1, 1)), profile);
        assert_eq!(fifteen.miles_driven, 0);

        let twenty = consumption_stats(&elapsed_for((2004, 1, 1), (2024, 1, 1)), profile);
        let expected = ((elapsed_for((2004, 1, 1), (2024, 1, 1)).years - 16.0)
            * profile.miles_driven_per_year)
            .floor() as i64;
        assert_eq!(twenty.miles_driven, expected);
        assert!(twenty.miles_driven > 0);
    }

    #[test]
    fn test_coffee_counts_only_adult_years() {
        let catalog = build_default_profiles();
        let profile = &catalog.profiles["us"];
        let elapsed = elapsed_for((1990, 1, 1), (2020, 1, 1));

        let stats = consumption_stats(&elapsed, profile);
        let expected =
            ((elapsed.years - 18.0) * DAYS_PER_YEAR * profile.coffee_cups_per_day).floor() as i64;
        assert_eq!(stats.cups_of_coffee, expected);
    }

    #[test]
    fn test_food_precision_handling() {
        let catalog = build_default_profiles();
        let elapsed = elapsed_for((1990, 1, 1), (2020, 1, 1));

        let ca = consumption_stats(&elapsed, &catalog.profiles["ca"]);
        let syrup = ca.food.iter().find(|f| f.label.contains("maple")).unwrap();
        assert_eq!(syrup.precision, 1);
        // One-decimal rounding leaves at most one decimal of residue
        assert_eq!(syrup.amount, (syrup.amount * 10.0).round() / 10.0);

        let doughnuts = ca.food.iter().find(|f| f.label == "doughnuts").unwrap();
        assert_eq!(doughnuts.precision, 0);
        assert_eq!(doughnuts.amount.fract(), 0.0);
    }

    #[test]
    fn test_baths_scale_with_weeks() {
        let catalog = build_default_profiles();
        let elapsed = elapsed_for((2000, 1, 1), (2000, 3, 25));
        // 12 full weeks at the us rate of 1.0 per week
        assert_eq!(elapsed.weeks, 12);
        let stats = consumption_stats(&elapsed, &catalog.profiles["us"]);
        assert_eq!(stats.baths_taken, 12);
    }
}
