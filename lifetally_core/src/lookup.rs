//! Categorical lookup resolvers.
//!
//! Each resolver maps a date component to exactly one table entry. All of
//! them are total: out-of-table input resolves to a defined fallback
//! rather than an error.

use crate::elapsed::SYNODIC_MONTH_DAYS;
use crate::tables::{
    Birthstone, ChineseZodiac, Generation, TechMilestone, ZodiacSign, BIRTHSTONES, CHINESE_ZODIAC,
    FAMOUS_BIRTHDAYS, GENERATIONS, MOON_PHASE_CUTOFFS, TECH_MILESTONES, US_PRESIDENTS,
    WESTERN_ZODIAC, WORLD_POPULATION, YEAR_CONTEXT,
};
use chrono::{Datelike, NaiveDate, Weekday};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Reference new moon used to anchor moon-phase calculations
static NEW_MOON_EPOCH: Lazy<NaiveDate> =
    Lazy::new(|| NaiveDate::from_ymd_opt(2000, 1, 6).expect("valid epoch date"));

impl ZodiacSign {
    /// Whether this sign's range contains the given month/day. Each sign
    /// spans two calendar months, so membership is an OR across them;
    /// this also covers Capricorn's December/January wrap, where a naive
    /// `(start..=end)` compare would match nothing.
    fn contains(&self, month: u32, day: u32) -> bool {
        (month == self.start_month && day >= self.start_day)
            || (month == self.end_month && day <= self.end_day)
    }
}

/// Resolve the western zodiac sign for a birth month/day
pub fn western_zodiac(month: u32, day: u32) -> ZodiacSign {
    WESTERN_ZODIAC
        .iter()
        .find(|sign| sign.contains(month, day))
        .copied()
        // Unreachable for valid dates; first entry is the defensive fallback
        .unwrap_or(WESTERN_ZODIAC[0])
}

/// Resolve the Chinese zodiac animal for a birth year
pub fn chinese_zodiac(year: i32) -> ChineseZodiac {
    let mut index = (year - 1924) % 12;
    if index < 0 {
        index += 12;
    }
    CHINESE_ZODIAC[index as usize]
}

/// Resolve the birthstone for a birth month (1-12)
pub fn birthstone(month: u32) -> Birthstone {
    BIRTHSTONES
        .get((month as usize).wrapping_sub(1))
        .copied()
        .unwrap_or(BIRTHSTONES[0])
}

/// Resolve the generation containing a birth year. Years matching no
/// range land in the newest bucket, so open-ended future years are
/// absorbed rather than rejected.
pub fn generation(year: i32) -> Generation {
    GENERATIONS
        .iter()
        .find(|g| g.start <= year && year <= g.end)
        .copied()
        .unwrap_or(GENERATIONS[GENERATIONS.len() - 1])
}

/// English weekday name for a date
pub fn day_of_week(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Named moon phase on a given date, bucketed from the fraction of the
/// synodic cycle elapsed since the reference new moon
pub fn moon_phase_on(date: NaiveDate) -> &'static str {
    let days = date.signed_duration_since(*NEW_MOON_EPOCH).num_days() as f64;
    let fraction = days.rem_euclid(SYNODIC_MONTH_DAYS) / SYNODIC_MONTH_DAYS;

    for (cutoff, name) in MOON_PHASE_CUTOFFS {
        if fraction <= cutoff {
            return name;
        }
    }
    // Above the last cutoff the cycle wraps back around
    "New Moon"
}

/// Season for a birth month. The hemisphere flag shifts the mapping by
/// six months for southern-hemisphere callers.
pub fn season_for(month: u32, southern_hemisphere: bool) -> &'static str {
    let month = if southern_hemisphere {
        (month + 5) % 12 + 1
    } else {
        month
    };
    match month {
        3..=5 => "Spring",
        6..=8 => "Summer",
        9..=11 => "Autumn",
        _ => "Winter",
    }
}

/// Famous people sharing a birthday; empty for dates with no entry
pub fn famous_birthdays(month: u32, day: u32) -> Vec<&'static str> {
    FAMOUS_BIRTHDAYS
        .get(&(month, day))
        .cloned()
        .unwrap_or_default()
}

/// Historical context for a birth year, if the index has one
pub fn year_context(year: i32) -> Option<&'static str> {
    YEAR_CONTEXT.get(&year).copied()
}

/// World population at the given year: largest sample year at or before
/// it, clamped to the earliest sample for older years
pub fn world_population_at(year: i32) -> u64 {
    WORLD_POPULATION
        .iter()
        .rev()
        .find(|p| p.year <= year)
        .unwrap_or(&WORLD_POPULATION[0])
        .population
}

/// Number of distinct US presidents whose terms overlap the inclusive
/// `[birth_year, reference_year]` span
pub fn us_presidents_during(birth_year: i32, reference_year: i32) -> u32 {
    let names: HashSet<&str> = US_PRESIDENTS
        .iter()
        .filter(|term| term.start <= reference_year && term.end >= birth_year)
        .map(|term| term.name)
        .collect();
    names.len() as u32
}

/// Technologies invented in or after the birth year, oldest first
pub fn tech_in_lifetime(birth_year: i32) -> Vec<TechMilestone> {
    TECH_MILESTONES
        .iter()
        .copied()
        .filter(|t| t.year >= birth_year)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_capricorn_spans_year_boundary() {
        assert_eq!(western_zodiac(12, 25).name, "Capricorn");
        assert_eq!(western_zodiac(1, 15).name, "Capricorn");
        assert_eq!(western_zodiac(12, 22).name, "Capricorn");
        assert_eq!(western_zodiac(1, 19).name, "Capricorn");
    }

    #[test]
    fn test_zodiac_interior_dates() {
        assert_eq!(western_zodiac(6, 15).name, "Gemini");
        assert_eq!(western_zodiac(1, 20).name, "Aquarius");
        assert_eq!(western_zodiac(8, 23).name, "Virgo");
        assert_eq!(western_zodiac(11, 21).name, "Scorpio");
    }

    #[test]
    fn test_every_day_of_year_resolves() {
        // Leap year covers Feb 29 too
        let mut day = date(2020, 1, 1);
        while day.year() == 2020 {
            let sign = western_zodiac(day.month(), day.day());
            assert!(!sign.name.is_empty());
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_chinese_zodiac_cycle() {
        assert_eq!(chinese_zodiac(1984).animal, "Rat");
        assert_eq!(chinese_zodiac(1996).animal, chinese_zodiac(1984).animal);
        assert_eq!(chinese_zodiac(2000).animal, "Dragon");
    }

    #[test]
    fn test_chinese_zodiac_before_anchor_year() {
        // Negative modulo correction: 1913 was an Ox year
        assert_eq!(chinese_zodiac(1913).animal, "Ox");
        assert_eq!(chinese_zodiac(1900).animal, "Rat");
    }

    #[test]
    fn test_birthstone_by_month() {
        assert_eq!(birthstone(12).name, "Turquoise");
        assert_eq!(birthstone(1).name, "Garnet");
        // Out-of-range months fall back to the first entry
        assert_eq!(birthstone(0).name, "Garnet");
        assert_eq!(birthstone(13).name, "Garnet");
    }

    #[test]
    fn test_generation_boundary() {
        assert_eq!(generation(1964).name, "Baby Boomer");
        assert_eq!(generation(1965).name, "Generation X");
        assert_eq!(generation(1996).name, "Millennial");
        assert_eq!(generation(1997).name, "Generation Z");
    }

    #[test]
    fn test_future_years_absorbed_by_newest_generation() {
        let newest = GENERATIONS[GENERATIONS.len() - 1];
        assert_eq!(generation(2150).name, newest.name);
    }

    #[test]
    fn test_day_of_week() {
        // 2000-01-01 was a Saturday
        assert_eq!(day_of_week(date(2000, 1, 1)), "Saturday");
        assert_eq!(day_of_week(date(1972, 12, 25)), "Monday");
    }

    #[test]
    fn test_moon_phase_at_epoch_is_new() {
        assert_eq!(moon_phase_on(date(2000, 1, 6)), "New Moon");
    }

    #[test]
    fn test_moon_phase_mid_cycle_is_full() {
        // Half a synodic month past the epoch
        assert_eq!(moon_phase_on(date(2000, 1, 21)), "Full Moon");
    }

    #[test]
    fn test_moon_phase_before_epoch() {
        // Dates before 2000 rely on the euclidean remainder; a full cycle
        // earlier must land on the same phase
        assert_eq!(moon_phase_on(date(1999, 12, 7)), moon_phase_on(date(2000, 1, 6)));
    }

    #[test]
    fn test_season_northern() {
        assert_eq!(season_for(1, false), "Winter");
        assert_eq!(season_for(4, false), "Spring");
        assert_eq!(season_for(7, false), "Summer");
        assert_eq!(season_for(10, false), "Autumn");
        assert_eq!(season_for(12, false), "Winter");
    }

    #[test]
    fn test_season_southern_swaps_by_six_months() {
        assert_eq!(season_for(1, true), "Summer");
        assert_eq!(season_for(7, true), "Winter");
        assert_eq!(season_for(10, true), "Spring");
    }

    #[test]
    fn test_famous_birthdays_sparse() {
        let hits = famous_birthdays(12, 25);
        assert!(hits.contains(&"Isaac Newton"));
        assert!(famous_birthdays(3, 2).is_empty());
    }

    #[test]
    fn test_year_context_sparse() {
        assert_eq!(year_context(1969), Some("Apollo 11 landed on the Moon"));
        assert_eq!(year_context(1851), None);
    }

    #[test]
    fn test_world_population_step_lookup() {
        assert_eq!(world_population_at(1972), 3_700_000_000);
        assert_eq!(world_population_at(1970), 3_700_000_000);
        // Before the first sample, clamp to it
        assert_eq!(world_population_at(1850), 1_650_000_000);
    }

    #[test]
    fn test_presidents_counted_once_across_split_terms() {
        // 1972..2026 spans Nixon through the second Trump term; the two
        // Trump terms count as one president
        assert_eq!(us_presidents_during(1972, 2026), 10);
    }

    #[test]
    fn test_tech_in_lifetime_filters_by_birth_year() {
        let tech = tech_in_lifetime(2000);
        assert!(tech.iter().all(|t| t.year >= 2000));
        assert!(tech.iter().any(|t| t.label == "The iPhone"));
        assert!(tech_in_lifetime(1950).len() > tech.len());
    }
}
