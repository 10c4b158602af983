//! Elapsed-duration engine.
//!
//! Converts the span between a birth date (taken at 00:00:00 UTC) and a
//! reference instant into every unit the downstream metrics consume.
//! Integer units are derived by successive truncating division so that
//! `days == hours / 24 == seconds / 86_400` always agrees.

use crate::types::Elapsed;
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};

/// Average Gregorian year length used for fractional-year math
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Synodic lunar period: days between successive full (or new) moons
pub const SYNODIC_MONTH_DAYS: f64 = 29.53059;

const MS_PER_DAY: f64 = 86_400_000.0;

/// A birth date has no time-of-day component; it is anchored at UTC midnight
pub fn birth_instant(birth_date: NaiveDate) -> DateTime<Utc> {
    birth_date.and_time(NaiveTime::MIN).and_utc()
}

/// Compute elapsed time between a birth date and a reference instant.
///
/// Behavior for `reference_time` before the birth date is unspecified;
/// callers validate their inputs before invoking (see the CLI).
pub fn elapsed_between(birth_date: NaiveDate, reference_time: DateTime<Utc>) -> Elapsed {
    let birth = birth_instant(birth_date);
    let milliseconds = reference_time
        .signed_duration_since(birth)
        .num_milliseconds();

    let seconds = milliseconds / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;
    let weeks = days / 7;
    let years = milliseconds as f64 / (DAYS_PER_YEAR * MS_PER_DAY);

    let full_moons = full_moon_count(days);

    Elapsed {
        milliseconds,
        seconds,
        minutes,
        hours,
        days,
        weeks,
        years,
        full_moons,
        // Counted as lunar-cycle completions, so numerically identical to
        // full moons. Kept that way on purpose.
        new_moons: full_moons,
        leap_years: leap_years_between(birth_date.year(), reference_time.year()),
    }
}

/// Whole lunar cycles completed in the given number of days
pub fn full_moon_count(days: i64) -> i64 {
    (days as f64 / SYNODIC_MONTH_DAYS).floor() as i64
}

/// Gregorian leap-year rule: divisible by 4, not by 100 unless also by 400
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Count leap years in the inclusive range `from..=to`
pub fn leap_years_between(from: i32, to: i32) -> u32 {
    (from..=to).filter(|&y| is_leap_year(y)).count() as u32
}
