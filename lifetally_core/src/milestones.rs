//! Milestone and achievement derivation.
//!
//! Two independent passes over the same elapsed-time values: a sorted
//! list of upcoming milestones (nearest six), and a fixed checklist of
//! achievements that are each evaluated on their own.

use crate::body::heartbeats_per_day;
use crate::elapsed::{DAYS_PER_YEAR, SYNODIC_MONTH_DAYS};
use crate::types::{Achievement, ClubStatus, Elapsed, FutureMilestone, Gender};
use chrono::{DateTime, Duration, Utc};

const BILLION_SECONDS: i64 = 1_000_000_000;
const BILLION_HEARTBEATS: i64 = 1_000_000_000;
const TEN_THOUSAND_DAYS: i64 = 10_000;
const TWENTY_THOUSAND_DAYS: i64 = 20_000;
const FIVE_HUNDRED_MOONS: f64 = 500.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// How many upcoming milestones the list is truncated to
const UPCOMING_LIMIT: usize = 6;

/// Club membership flags. Once a club is joined its countdown is None;
/// the rendering layer must handle both shapes.
pub fn club_status(elapsed: &Elapsed) -> ClubStatus {
    let billion_seconds = elapsed.seconds >= BILLION_SECONDS;
    let ten_thousand_days = elapsed.days >= TEN_THOUSAND_DAYS;

    ClubStatus {
        billion_seconds,
        days_until_billion_seconds: if billion_seconds {
            None
        } else {
            Some(days_until_seconds(elapsed, BILLION_SECONDS))
        },
        ten_thousand_days,
        days_until_ten_thousand_days: if ten_thousand_days {
            None
        } else {
            Some(TEN_THOUSAND_DAYS - elapsed.days)
        },
    }
}

fn days_until_seconds(elapsed: &Elapsed, target_seconds: i64) -> i64 {
    (((target_seconds - elapsed.seconds) as f64) / SECONDS_PER_DAY).ceil() as i64
}

/// Exact (fractional) days alive, for candidates defined in fractional
/// units like decade birthdays and moon counts
fn exact_days(elapsed: &Elapsed) -> f64 {
    elapsed.milliseconds as f64 / 86_400_000.0
}

/// Derive the upcoming-milestone list: every not-yet-reached candidate,
/// sorted ascending by days until, truncated to the nearest six. Ties
/// keep candidate insertion order (stable sort).
pub fn future_milestones(
    elapsed: &Elapsed,
    gender: Gender,
    reference_time: DateTime<Utc>,
) -> Vec<FutureMilestone> {
    let days_alive = exact_days(elapsed);
    let mut candidates: Vec<(String, i64)> = Vec::new();

    for decade in (30..=100).step_by(10) {
        let days_until = (decade as f64 * DAYS_PER_YEAR - days_alive).ceil() as i64;
        if days_until > 0 {
            candidates.push((format!("{}th birthday", decade), days_until));
        }
    }

    for (label, target) in [
        ("10,000 days alive", TEN_THOUSAND_DAYS),
        ("20,000 days alive", TWENTY_THOUSAND_DAYS),
    ] {
        let days_until = target - elapsed.days;
        if days_until > 0 {
            candidates.push((label.to_string(), days_until));
        }
    }

    if elapsed.seconds < BILLION_SECONDS {
        candidates.push((
            "1 billion seconds alive".to_string(),
            days_until_seconds(elapsed, BILLION_SECONDS),
        ));
    }

    let moon_target_days = FIVE_HUNDRED_MOONS * SYNODIC_MONTH_DAYS;
    let days_until_moons = (moon_target_days - days_alive).ceil() as i64;
    if days_until_moons > 0 {
        candidates.push(("500th full moon".to_string(), days_until_moons));
    }

    let rate = heartbeats_per_day(gender);
    let heartbeats = elapsed.days * rate;
    if heartbeats < BILLION_HEARTBEATS {
        let days_until =
            (((BILLION_HEARTBEATS - heartbeats) as f64) / rate as f64).ceil() as i64;
        candidates.push(("1 billion heartbeats".to_string(), days_until));
    }

    let mut milestones: Vec<FutureMilestone> = candidates
        .into_iter()
        .map(|(label, days_until)| FutureMilestone {
            label,
            on: reference_time.date_naive() + Duration::days(days_until),
            days_until,
        })
        .collect();

    milestones.sort_by_key(|m| m.days_until);
    milestones.truncate(UPCOMING_LIMIT);
    milestones
}

/// Evaluate the fixed achievement checklist. Entries are independent:
/// not mutually exclusive and never sorted.
pub fn achievements(elapsed: &Elapsed, gender: Gender) -> Vec<Achievement> {
    let heartbeats = elapsed.days * heartbeats_per_day(gender);

    vec![
        Achievement {
            label: "Lived 10,000 days",
            earned: elapsed.days >= TEN_THOUSAND_DAYS,
        },
        Achievement {
            label: "Joined the billion-seconds club",
            earned: elapsed.seconds >= BILLION_SECONDS,
        },
        Achievement {
            label: "Witnessed 500 full moons",
            earned: elapsed.full_moons >= 500,
        },
        Achievement {
            label: "A billion heartbeats",
            earned: heartbeats >= BILLION_HEARTBEATS,
        },
        Achievement {
            label: "Reached adulthood",
            earned: elapsed.years >= 18.0,
        },
        Achievement {
            label: "Half a century",
            earned: elapsed.years >= 50.0,
        },
        Achievement {
            label: "1,000 weeks alive",
            earned: elapsed.weeks >= 1_000,
        },
    ]
}
