//! Life-statistics engine.
//!
//! `compute_life_stats` is the single entry point: it composes the pure
//! sub-calculations (elapsed durations, lookups, body/cosmic/consumption
//! metrics, milestones) into one `LifeStats` aggregate. It is stateless
//! and re-run in full on every invocation.

use crate::body::body_stats;
use crate::consumption::consumption_stats;
use crate::cosmic::cosmic_stats;
use crate::elapsed::{elapsed_between, DAYS_PER_YEAR};
use crate::lookup;
use crate::milestones::{achievements, club_status, future_milestones};
use crate::types::{BirthInfo, CountryProfile, Elapsed, Gender, LifeInWeeks, LifeStats};
use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Lifespan the life-in-weeks grid is drawn against
pub const REFERENCE_LIFESPAN_YEARS: f64 = 90.0;

/// Compute the full set of life statistics.
///
/// Behavior for `reference_time` before the birth date is unspecified;
/// callers are expected to validate their inputs first.
pub fn compute_life_stats(
    birth_date: NaiveDate,
    reference_time: DateTime<Utc>,
    profile: &CountryProfile,
    gender: Gender,
) -> LifeStats {
    tracing::debug!(
        "Computing life stats for {} against {} (country {}, gender {:?})",
        birth_date,
        reference_time,
        profile.code,
        gender
    );

    let elapsed = elapsed_between(birth_date, reference_time);

    LifeStats {
        birth_date,
        reference_time,
        country: profile.code.clone(),
        gender,
        elapsed,
        birth_info: birth_info(birth_date, reference_time, profile),
        body: body_stats(&elapsed, gender),
        cosmic: cosmic_stats(&elapsed),
        consumption: consumption_stats(&elapsed, profile),
        life_in_weeks: life_in_weeks(&elapsed),
        clubs: club_status(&elapsed),
        milestones: future_milestones(&elapsed, gender, reference_time),
        achievements: achievements(&elapsed, gender),
    }
}

/// Resolve every categorical fact about the birth date itself
fn birth_info(
    birth_date: NaiveDate,
    reference_time: DateTime<Utc>,
    profile: &CountryProfile,
) -> BirthInfo {
    let year = birth_date.year();
    let month = birth_date.month();
    let day = birth_date.day();

    BirthInfo {
        day_of_week: lookup::day_of_week(birth_date),
        season: lookup::season_for(month, profile.southern_hemisphere),
        moon_phase: lookup::moon_phase_on(birth_date),
        western_zodiac: lookup::western_zodiac(month, day),
        chinese_zodiac: lookup::chinese_zodiac(year),
        birthstone: lookup::birthstone(month),
        generation: lookup::generation(year),
        famous_birthdays: lookup::famous_birthdays(month, day),
        year_context: lookup::year_context(year),
        world_population_then: lookup::world_population_at(year),
        us_presidents_since: lookup::us_presidents_during(year, reference_time.year()),
        tech_in_lifetime: lookup::tech_in_lifetime(year),
    }
}

/// Weeks lived against the reference-lifespan grid
fn life_in_weeks(elapsed: &Elapsed) -> LifeInWeeks {
    let weeks_total = (REFERENCE_LIFESPAN_YEARS * DAYS_PER_YEAR / 7.0).floor() as i64;
    let percent = elapsed.weeks as f64 / weeks_total as f64 * 100.0;

    LifeInWeeks {
        weeks_lived: elapsed.weeks,
        weeks_total,
        percent_lived: (percent * 10.0).round() / 10.0,
    }
}
