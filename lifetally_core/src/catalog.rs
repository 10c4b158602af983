//! Default catalog of country profiles.
//!
//! This module provides the built-in per-country behavioral rate tables
//! used by the consumption overlay.

use crate::types::{CountryProfile, FoodItem, ProfileCatalog};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Profile used when no country is selected or the code is unknown
pub const BASELINE_COUNTRY: &str = "us";

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<ProfileCatalog> = Lazy::new(build_default_profiles_internal);

/// Get a reference to the cached default profile catalog
pub fn get_default_profiles() -> &'static ProfileCatalog {
    &DEFAULT_CATALOG
}

/// Builds the default catalog of country profiles
///
/// **Note**: For production use, prefer `get_default_profiles()` which
/// returns a cached reference. This function is retained for testing and
/// custom catalog creation.
pub fn build_default_profiles() -> ProfileCatalog {
    build_default_profiles_internal()
}

fn food(icon: &str, label: &str, per_year: f64, precision: Option<u8>) -> FoodItem {
    FoodItem {
        icon: icon.into(),
        label: label.into(),
        per_year,
        precision,
    }
}

/// Internal function that actually builds the catalog
fn build_default_profiles_internal() -> ProfileCatalog {
    let mut profiles = HashMap::new();

    profiles.insert(
        "us".into(),
        CountryProfile {
            code: "us".into(),
            name: "United States".into(),
            southern_hemisphere: false,
            steps_per_day: 4800.0,
            commute_minutes_per_day: 54.0,
            coffee_cups_per_day: 2.0,
            baths_per_week: 1.0,
            screen_hours_per_day: 7.0,
            miles_driven_per_year: 13_500.0,
            food: vec![
                food("🍕", "slices of pizza", 46.0, None),
                food("🍔", "burgers", 150.0, None),
                food("🥚", "eggs", 279.0, None),
                food("🍦", "gallons of ice cream", 4.0, Some(1)),
            ],
        },
    );

    profiles.insert(
        "uk".into(),
        CountryProfile {
            code: "uk".into(),
            name: "United Kingdom".into(),
            southern_hemisphere: false,
            steps_per_day: 5400.0,
            commute_minutes_per_day: 59.0,
            coffee_cups_per_day: 1.7,
            baths_per_week: 1.5,
            screen_hours_per_day: 6.1,
            miles_driven_per_year: 7_400.0,
            food: vec![
                food("🍵", "cups of tea", 876.0, None),
                food("🥪", "sandwiches", 200.0, None),
                food("🍟", "portions of fish and chips", 30.0, None),
                food("🥚", "eggs", 182.0, None),
            ],
        },
    );

    profiles.insert(
        "ca".into(),
        CountryProfile {
            code: "ca".into(),
            name: "Canada".into(),
            southern_hemisphere: false,
            steps_per_day: 4800.0,
            commute_minutes_per_day: 52.0,
            coffee_cups_per_day: 2.7,
            baths_per_week: 1.0,
            screen_hours_per_day: 6.5,
            miles_driven_per_year: 9_500.0,
            food: vec![
                food("🍁", "litres of maple syrup", 1.6, Some(1)),
                food("🍩", "doughnuts", 100.0, None),
                food("🥚", "eggs", 242.0, None),
                food("🧀", "kg of cheese", 14.0, Some(1)),
            ],
        },
    );

    // TODO: flip au to southern_hemisphere = true once the season card
    // renders hemisphere-aware copy.
    profiles.insert(
        "au".into(),
        CountryProfile {
            code: "au".into(),
            name: "Australia".into(),
            southern_hemisphere: false,
            steps_per_day: 5000.0,
            commute_minutes_per_day: 58.0,
            coffee_cups_per_day: 1.9,
            baths_per_week: 1.0,
            screen_hours_per_day: 6.2,
            miles_driven_per_year: 8_500.0,
            food: vec![
                food("🥧", "meat pies", 12.0, None),
                food("🥑", "kg of avocado", 4.0, Some(1)),
                food("🥚", "eggs", 250.0, None),
                food("🦐", "kg of prawns", 5.0, Some(1)),
            ],
        },
    );

    profiles.insert(
        "de".into(),
        CountryProfile {
            code: "de".into(),
            name: "Germany".into(),
            southern_hemisphere: false,
            steps_per_day: 5200.0,
            commute_minutes_per_day: 56.0,
            coffee_cups_per_day: 2.9,
            baths_per_week: 1.0,
            screen_hours_per_day: 5.5,
            miles_driven_per_year: 8_700.0,
            food: vec![
                food("🍺", "litres of beer", 92.0, None),
                food("🌭", "sausages", 84.0, None),
                food("🥖", "kg of bread", 56.0, None),
                food("🥚", "eggs", 236.0, None),
            ],
        },
    );

    profiles.insert(
        "fr".into(),
        CountryProfile {
            code: "fr".into(),
            name: "France".into(),
            southern_hemisphere: false,
            steps_per_day: 5100.0,
            commute_minutes_per_day: 50.0,
            coffee_cups_per_day: 2.3,
            baths_per_week: 1.2,
            screen_hours_per_day: 5.4,
            miles_driven_per_year: 7_600.0,
            food: vec![
                food("🥖", "baguettes", 105.0, None),
                food("🧀", "kg of cheese", 26.0, None),
                food("🍷", "bottles of wine", 50.0, None),
                food("🥐", "croissants", 156.0, None),
            ],
        },
    );

    profiles.insert(
        "jp".into(),
        CountryProfile {
            code: "jp".into(),
            name: "Japan".into(),
            southern_hemisphere: false,
            steps_per_day: 6000.0,
            commute_minutes_per_day: 79.0,
            coffee_cups_per_day: 1.5,
            baths_per_week: 5.0,
            screen_hours_per_day: 4.5,
            miles_driven_per_year: 4_400.0,
            food: vec![
                food("🍚", "kg of rice", 54.0, None),
                food("🍜", "servings of instant noodles", 43.0, None),
                food("🍣", "servings of sushi", 50.0, None),
                food("🐟", "kg of fish", 45.0, None),
            ],
        },
    );

    profiles.insert(
        "in".into(),
        CountryProfile {
            code: "in".into(),
            name: "India".into(),
            southern_hemisphere: false,
            steps_per_day: 4300.0,
            commute_minutes_per_day: 70.0,
            coffee_cups_per_day: 0.6,
            baths_per_week: 6.0,
            screen_hours_per_day: 7.3,
            miles_driven_per_year: 3_200.0,
            food: vec![
                food("🫖", "cups of chai", 1095.0, None),
                food("🍚", "kg of rice", 74.0, None),
                food("🥭", "mangoes", 30.0, None),
                food("🫓", "rotis", 730.0, None),
            ],
        },
    );

    ProfileCatalog { profiles }
}

impl ProfileCatalog {
    /// Resolve a country code to a profile, falling back to the baseline
    /// profile for unknown or missing codes
    pub fn resolve(&self, code: Option<&str>) -> &CountryProfile {
        let requested = code.unwrap_or(BASELINE_COUNTRY).to_lowercase();
        match self.profiles.get(&requested) {
            Some(profile) => profile,
            None => {
                tracing::warn!(
                    "Unknown country code '{}', falling back to baseline '{}'",
                    requested,
                    BASELINE_COUNTRY
                );
                &self.profiles[BASELINE_COUNTRY]
            }
        }
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !self.profiles.contains_key(BASELINE_COUNTRY) {
            errors.push(format!(
                "Catalog is missing the baseline profile '{}'",
                BASELINE_COUNTRY
            ));
        }

        for (code, profile) in &self.profiles {
            if code.is_empty() || profile.code.is_empty() {
                errors.push("Profile has empty code".to_string());
            }
            if code != &profile.code {
                errors.push(format!(
                    "Profile key '{}' doesn't match profile.code '{}'",
                    code, profile.code
                ));
            }
            if profile.name.is_empty() {
                errors.push(format!("Profile '{}' has empty name", code));
            }

            let rates = [
                ("steps_per_day", profile.steps_per_day),
                ("commute_minutes_per_day", profile.commute_minutes_per_day),
                ("coffee_cups_per_day", profile.coffee_cups_per_day),
                ("baths_per_week", profile.baths_per_week),
                ("screen_hours_per_day", profile.screen_hours_per_day),
                ("miles_driven_per_year", profile.miles_driven_per_year),
            ];
            for (field, value) in rates {
                if !value.is_finite() || value < 0.0 {
                    errors.push(format!("Profile '{}': {} is {}", code, field, value));
                }
            }

            if profile.food.is_empty() {
                errors.push(format!("Profile '{}' has no food items", code));
            }
            for item in &profile.food {
                if item.label.is_empty() {
                    errors.push(format!("Profile '{}': food item has empty label", code));
                }
                if !item.per_year.is_finite() || item.per_year < 0.0 {
                    errors.push(format!(
                        "Profile '{}': food '{}' has rate {}",
                        code, item.label, item.per_year
                    ));
                }
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads() {
        let catalog = build_default_profiles();
        assert_eq!(catalog.profiles.len(), 8);
        assert!(catalog.profiles.contains_key(BASELINE_COUNTRY));
    }

    #[test]
    fn test_default_catalog_validates() {
        let catalog = build_default_profiles();
        let errors = catalog.validate();
        assert!(
            errors.is_empty(),
            "Default catalog has validation errors: {:?}",
            errors
        );
    }

    #[test]
    fn test_resolve_known_code() {
        let catalog = build_default_profiles();
        assert_eq!(catalog.resolve(Some("jp")).name, "Japan");
        // Case-insensitive
        assert_eq!(catalog.resolve(Some("JP")).name, "Japan");
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_baseline() {
        let catalog = build_default_profiles();
        assert_eq!(catalog.resolve(Some("zz")).code, BASELINE_COUNTRY);
        assert_eq!(catalog.resolve(None).code, BASELINE_COUNTRY);
    }

    #[test]
    fn test_profiles_carry_distinct_rates() {
        let catalog = build_default_profiles();
        let us = &catalog.profiles["us"];
        let jp = &catalog.profiles["jp"];
        assert_ne!(us.steps_per_day, jp.steps_per_day);
        assert_ne!(us.coffee_cups_per_day, jp.coffee_cups_per_day);
    }
}
