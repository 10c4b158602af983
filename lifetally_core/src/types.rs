//! Core domain types for the Lifetally system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Caller inputs (gender tag, country profiles)
//! - The LifeStats output aggregate and its sub-records
//! - Submission records for the input audit log

use crate::tables::{Birthstone, ChineseZodiac, Generation, TechMilestone, ZodiacSign};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

// ============================================================================
// Input Types
// ============================================================================

/// Optional biological-sex tag selecting the gender overlay
///
/// Modeled as a closed sum type so "not provided" is distinct from any
/// provided value.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unspecified,
}

impl Gender {
    /// Parse a user-supplied gender string (returns None for unknown values)
    pub fn parse(s: &str) -> Option<Gender> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            _ => None,
        }
    }

    /// Stable lowercase tag, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unspecified => "unspecified",
        }
    }
}

/// A single food item tracked by a country profile
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FoodItem {
    pub icon: String,
    pub label: String,
    pub per_year: f64,
    /// Decimal places for display; None renders as a whole number
    pub precision: Option<u8>,
}

/// Region-specific daily/weekly behavioral rate constants
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CountryProfile {
    pub code: String,
    pub name: String,
    pub southern_hemisphere: bool,
    pub steps_per_day: f64,
    pub commute_minutes_per_day: f64,
    pub coffee_cups_per_day: f64,
    pub baths_per_week: f64,
    pub screen_hours_per_day: f64,
    pub miles_driven_per_year: f64,
    pub food: Vec<FoodItem>,
}

/// The complete catalog of country profiles
#[derive(Clone, Debug)]
pub struct ProfileCatalog {
    pub profiles: HashMap<String, CountryProfile>,
}

// ============================================================================
// Elapsed-Duration Types
// ============================================================================

/// Elapsed time between birth date and reference time, in every unit the
/// downstream calculations consume
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Elapsed {
    pub milliseconds: i64,
    pub seconds: i64,
    pub minutes: i64,
    pub hours: i64,
    pub days: i64,
    pub weeks: i64,
    /// Fractional years over a 365.25-day average year
    pub years: f64,
    pub full_moons: i64,
    /// Counted identically to full moons (lunar-cycle completions)
    pub new_moons: i64,
    pub leap_years: u32,
}

// ============================================================================
// Output Sub-Record Types
// ============================================================================

/// Categorical facts about the birth date itself
#[derive(Clone, Debug, Serialize)]
pub struct BirthInfo {
    pub day_of_week: &'static str,
    pub season: &'static str,
    pub moon_phase: &'static str,
    pub western_zodiac: ZodiacSign,
    pub chinese_zodiac: ChineseZodiac,
    pub birthstone: Birthstone,
    pub generation: Generation,
    pub famous_birthdays: Vec<&'static str>,
    pub year_context: Option<&'static str>,
    pub world_population_then: u64,
    pub us_presidents_since: u32,
    pub tech_in_lifetime: Vec<TechMilestone>,
}

/// Body-metric extrapolations (rate constant x elapsed time)
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct BodyStats {
    pub heartbeats: i64,
    pub breaths: i64,
    pub blinks: i64,
    pub sleep_years: f64,
    pub dreams: i64,
    pub hair_grown_cm: f64,
    pub nails_grown_cm: f64,
    pub words_spoken: i64,
    pub laughs: i64,
    pub meals_eaten: i64,
    /// Female overlay only, gated by menarche age
    pub menstrual_cycles: Option<i64>,
    /// Male overlay only, gated by puberty age
    pub facial_hair_cm: Option<f64>,
}

/// Age expressed in another planet's years
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct PlanetaryAge {
    pub planet: &'static str,
    pub symbol: &'static str,
    pub years: i64,
    pub days_until_birthday: i64,
}

/// Cosmic-scale extrapolations
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct CosmicStats {
    pub distance_traveled_miles: i64,
    pub solar_eclipses: i64,
    pub lunar_eclipses: i64,
    pub planetary_ages: Vec<PlanetaryAge>,
}

/// A computed per-country food consumption figure
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct FoodStat {
    pub icon: String,
    pub label: String,
    pub amount: f64,
    pub precision: u8,
}

/// Country-profile-adjusted consumption and time-use metrics
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ConsumptionStats {
    pub steps_walked: i64,
    pub commute_hours: i64,
    pub screen_time_days: i64,
    pub baths_taken: i64,
    /// Counted only past age 18
    pub cups_of_coffee: i64,
    /// Counted only past age 16
    pub miles_driven: i64,
    pub food: Vec<FoodStat>,
}

/// Life visualized against a 90-year reference lifespan
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct LifeInWeeks {
    pub weeks_lived: i64,
    pub weeks_total: i64,
    pub percent_lived: f64,
}

// ============================================================================
// Milestone Types
// ============================================================================

/// Club membership flags with their countdown duality: once a club is
/// joined, the corresponding countdown becomes None and stays None
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct ClubStatus {
    pub billion_seconds: bool,
    pub days_until_billion_seconds: Option<i64>,
    pub ten_thousand_days: bool,
    pub days_until_ten_thousand_days: Option<i64>,
}

/// An upcoming milestone, sorted ascending by days_until
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct FutureMilestone {
    pub label: String,
    pub on: NaiveDate,
    pub days_until: i64,
}

/// A checklist entry compared against a fixed threshold
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct Achievement {
    pub label: &'static str,
    pub earned: bool,
}

// ============================================================================
// Aggregate Output Type
// ============================================================================

/// The full output aggregate, produced fresh on every call and never
/// mutated after construction
#[derive(Clone, Debug, Serialize)]
pub struct LifeStats {
    pub birth_date: NaiveDate,
    pub reference_time: DateTime<Utc>,
    /// Resolved profile code (after unknown-code fallback)
    pub country: String,
    pub gender: Gender,
    pub elapsed: Elapsed,
    pub birth_info: BirthInfo,
    pub body: BodyStats,
    pub cosmic: CosmicStats,
    pub consumption: ConsumptionStats,
    pub life_in_weeks: LifeInWeeks,
    pub clubs: ClubStatus,
    pub milestones: Vec<FutureMilestone>,
    pub achievements: Vec<Achievement>,
}

// ============================================================================
// Submission Log Types
// ============================================================================

/// Raw user-submitted inputs, persisted independently of the engine
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub birth_date: NaiveDate,
    pub country: String,
    pub gender: Gender,
}
