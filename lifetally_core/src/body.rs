//! Body-metric extrapolation.
//!
//! Every figure here is a per-day or per-year rate constant multiplied by
//! elapsed time and floored, except the growth figures which carry one
//! decimal place. The gender overlay swaps the heartbeat rate and adds
//! the sex-specific cyclical counts behind their age gates.

use crate::types::{BodyStats, Elapsed, Gender};

// Daily rates (whole events per day)
const HEARTBEATS_PER_DAY_DEFAULT: i64 = 103_680; // 72 bpm
const HEARTBEATS_PER_DAY_MALE: i64 = 100_800; // 70 bpm
const HEARTBEATS_PER_DAY_FEMALE: i64 = 109_440; // 76 bpm
const BREATHS_PER_DAY: i64 = 23_040; // 16 per minute
const BLINKS_PER_DAY: i64 = 19_200; // 20 per waking minute, 16h awake
const DREAMS_PER_NIGHT: i64 = 4;
const WORDS_PER_DAY: i64 = 16_000;
const LAUGHS_PER_DAY: i64 = 17;
const MEALS_PER_DAY: i64 = 3;

// Growth rates (one-decimal display precision)
const HAIR_CM_PER_DAY: f64 = 0.041;
const NAIL_CM_PER_DAY: f64 = 0.0115;

// Gender-overlay gates
const MENARCHE_AGE_YEARS: f64 = 12.5;
const CYCLES_PER_YEAR: f64 = 13.0;
const PUBERTY_AGE_YEARS: f64 = 13.0;
const FACIAL_HAIR_CM_PER_YEAR: f64 = 14.0;

/// Sleep claims a third of life
const SLEEP_FRACTION: f64 = 1.0 / 3.0;

/// Heartbeat rate constant, overridden by the gender overlay
pub fn heartbeats_per_day(gender: Gender) -> i64 {
    match gender {
        Gender::Male => HEARTBEATS_PER_DAY_MALE,
        Gender::Female => HEARTBEATS_PER_DAY_FEMALE,
        Gender::Unspecified => HEARTBEATS_PER_DAY_DEFAULT,
    }
}

/// Round to one decimal place
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Compute all body metrics for the elapsed span
pub fn body_stats(elapsed: &Elapsed, gender: Gender) -> BodyStats {
    let days = elapsed.days;
    let years = elapsed.years;

    // Cyclical counts clamp negative elapsed time to zero instead of
    // going negative before the gate age.
    let menstrual_cycles = match gender {
        Gender::Female => {
            Some((((years - MENARCHE_AGE_YEARS).max(0.0)) * CYCLES_PER_YEAR).floor() as i64)
        }
        _ => None,
    };
    let facial_hair_cm = match gender {
        Gender::Male => {
            Some(round1(((years - PUBERTY_AGE_YEARS).max(0.0)) * FACIAL_HAIR_CM_PER_YEAR))
        }
        _ => None,
    };

    BodyStats {
        heartbeats: days * heartbeats_per_day(gender),
        breaths: days * BREATHS_PER_DAY,
        blinks: days * BLINKS_PER_DAY,
        sleep_years: round1(years * SLEEP_FRACTION),
        dreams: days * DREAMS_PER_NIGHT,
        hair_grown_cm: round1(days as f64 * HAIR_CM_PER_DAY),
        nails_grown_cm: round1(days as f64 * NAIL_CM_PER_DAY),
        words_spoken: days * WORDS_PER_DAY,
        laughs: days * LAUGHS_PER_DAY,
        meals_eaten: days * MEALS_PER_DAY,
        menstrual_cycles,
        facial_hair_cm,
    }
}
