//! Shareable plain-text digest.
//!
//! A pure formatting pass over an already-computed `LifeStats`; no
//! calculation happens here.

use crate::types::LifeStats;

/// Format an integer with thousands separators (e.g. 19,402)
pub fn group_digits(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Produce the shareable digest for a computed set of stats
pub fn share_summary(stats: &LifeStats) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "I've been alive for {} days — that's {:.1} years!",
        group_digits(stats.elapsed.days),
        stats.elapsed.years
    ));
    lines.push(format!(
        "{} seconds, {} full moons, {} heartbeats.",
        group_digits(stats.elapsed.seconds),
        group_digits(stats.elapsed.full_moons),
        group_digits(stats.body.heartbeats)
    ));
    lines.push(format!(
        "Born on a {} in {}, under a {} — {} {}, year of the {}.",
        stats.birth_info.day_of_week,
        stats.birth_info.season,
        stats.birth_info.moon_phase,
        stats.birth_info.western_zodiac.symbol,
        stats.birth_info.western_zodiac.name,
        stats.birth_info.chinese_zodiac.animal
    ));

    if let Some(first) = stats.birth_info.famous_birthdays.first() {
        lines.push(format!(
            "A {} sharing a birthday with {}.",
            stats.birth_info.generation.name, first
        ));
    } else {
        lines.push(format!("A proud {}.", stats.birth_info.generation.name));
    }

    lines.push(format!(
        "I've traveled {} miles through space so far.",
        group_digits(stats.cosmic.distance_traveled_miles)
    ));

    if let Some(next) = stats.milestones.first() {
        lines.push(format!(
            "Next up: {} in {} days.",
            next.label,
            group_digits(next.days_until)
        ));
    }

    lines.join("\n")
}
