//! Cosmic and planetary projections.
//!
//! Planet ages divide elapsed days by each orbital period; the distance
//! figure multiplies days by a fixed average daily mileage derived from
//! Earth's orbital speed (no eccentricity correction, deliberately).

use crate::tables::PLANETS;
use crate::types::{CosmicStats, Elapsed, PlanetaryAge};

/// Earth's orbit covers roughly this many miles per day
const SPACE_MILES_PER_DAY: f64 = 1_600_000.0;

// Long-run global eclipse frequencies
const SOLAR_ECLIPSES_PER_YEAR: f64 = 2.38;
const LUNAR_ECLIPSES_PER_YEAR: f64 = 2.29;

/// Age on each of the eight planets, with days until the next planetary
/// birthday
pub fn planetary_ages(days: i64) -> Vec<PlanetaryAge> {
    PLANETS
        .iter()
        .map(|planet| {
            let orbits = days as f64 / planet.orbital_days;
            let years = orbits.floor() as i64;
            let fraction = orbits - orbits.floor();
            PlanetaryAge {
                planet: planet.name,
                symbol: planet.symbol,
                years,
                days_until_birthday: ((1.0 - fraction) * planet.orbital_days).ceil() as i64,
            }
        })
        .collect()
}

/// Compute all cosmic metrics for the elapsed span
pub fn cosmic_stats(elapsed: &Elapsed) -> CosmicStats {
    CosmicStats {
        distance_traveled_miles: (elapsed.days as f64 * SPACE_MILES_PER_DAY).floor() as i64,
        solar_eclipses: (elapsed.years * SOLAR_ECLIPSES_PER_YEAR).floor() as i64,
        lunar_eclipses: (elapsed.years * LUNAR_ECLIPSES_PER_YEAR).floor() as i64,
        planetary_ages: planetary_ages(elapsed.days),
    }
}
