//! Static reference tables keyed by date components or year ranges.
//!
//! Every table is total over its domain: a fallback entry exists for
//! out-of-range input, so the resolvers in `lookup` never fail.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

// ============================================================================
// Western Zodiac
// ============================================================================

/// A western zodiac sign with its inclusive month/day range
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct ZodiacSign {
    pub name: &'static str,
    pub symbol: &'static str,
    pub start_month: u32,
    pub start_day: u32,
    pub end_month: u32,
    pub end_day: u32,
}

/// Capricorn is listed first: it is the one sign whose range spans the
/// year boundary and it doubles as the defensive fallback entry.
pub const WESTERN_ZODIAC: [ZodiacSign; 12] = [
    ZodiacSign { name: "Capricorn", symbol: "♑", start_month: 12, start_day: 22, end_month: 1, end_day: 19 },
    ZodiacSign { name: "Aquarius", symbol: "♒", start_month: 1, start_day: 20, end_month: 2, end_day: 18 },
    ZodiacSign { name: "Pisces", symbol: "♓", start_month: 2, start_day: 19, end_month: 3, end_day: 20 },
    ZodiacSign { name: "Aries", symbol: "♈", start_month: 3, start_day: 21, end_month: 4, end_day: 19 },
    ZodiacSign { name: "Taurus", symbol: "♉", start_month: 4, start_day: 20, end_month: 5, end_day: 20 },
    ZodiacSign { name: "Gemini", symbol: "♊", start_month: 5, start_day: 21, end_month: 6, end_day: 20 },
    ZodiacSign { name: "Cancer", symbol: "♋", start_month: 6, start_day: 21, end_month: 7, end_day: 22 },
    ZodiacSign { name: "Leo", symbol: "♌", start_month: 7, start_day: 23, end_month: 8, end_day: 22 },
    ZodiacSign { name: "Virgo", symbol: "♍", start_month: 8, start_day: 23, end_month: 9, end_day: 22 },
    ZodiacSign { name: "Libra", symbol: "♎", start_month: 9, start_day: 23, end_month: 10, end_day: 22 },
    ZodiacSign { name: "Scorpio", symbol: "♏", start_month: 10, start_day: 23, end_month: 11, end_day: 21 },
    ZodiacSign { name: "Sagittarius", symbol: "♐", start_month: 11, start_day: 22, end_month: 12, end_day: 21 },
];

// ============================================================================
// Chinese Zodiac
// ============================================================================

/// One animal of the 12-year Chinese zodiac cycle
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct ChineseZodiac {
    pub animal: &'static str,
    pub symbol: &'static str,
}

/// Cycle anchored at 1924 (a Rat year); indexed by `(year - 1924) mod 12`
pub const CHINESE_ZODIAC: [ChineseZodiac; 12] = [
    ChineseZodiac { animal: "Rat", symbol: "🐀" },
    ChineseZodiac { animal: "Ox", symbol: "🐂" },
    ChineseZodiac { animal: "Tiger", symbol: "🐅" },
    ChineseZodiac { animal: "Rabbit", symbol: "🐇" },
    ChineseZodiac { animal: "Dragon", symbol: "🐉" },
    ChineseZodiac { animal: "Snake", symbol: "🐍" },
    ChineseZodiac { animal: "Horse", symbol: "🐎" },
    ChineseZodiac { animal: "Goat", symbol: "🐐" },
    ChineseZodiac { animal: "Monkey", symbol: "🐒" },
    ChineseZodiac { animal: "Rooster", symbol: "🐓" },
    ChineseZodiac { animal: "Dog", symbol: "🐕" },
    ChineseZodiac { animal: "Pig", symbol: "🐖" },
];

// ============================================================================
// Birthstones
// ============================================================================

/// Birthstone for a calendar month (direct `month - 1` index)
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct Birthstone {
    pub name: &'static str,
    pub color: &'static str,
}

pub const BIRTHSTONES: [Birthstone; 12] = [
    Birthstone { name: "Garnet", color: "deep red" },
    Birthstone { name: "Amethyst", color: "purple" },
    Birthstone { name: "Aquamarine", color: "pale blue" },
    Birthstone { name: "Diamond", color: "clear" },
    Birthstone { name: "Emerald", color: "green" },
    Birthstone { name: "Pearl", color: "white" },
    Birthstone { name: "Ruby", color: "red" },
    Birthstone { name: "Peridot", color: "lime green" },
    Birthstone { name: "Sapphire", color: "deep blue" },
    Birthstone { name: "Opal", color: "iridescent" },
    Birthstone { name: "Topaz", color: "amber" },
    Birthstone { name: "Turquoise", color: "blue-green" },
];

// ============================================================================
// Generations
// ============================================================================

/// A named generation with its inclusive birth-year range
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct Generation {
    pub name: &'static str,
    pub start: i32,
    pub end: i32,
}

/// Ordered oldest to newest; the last entry absorbs any later birth year
pub const GENERATIONS: [Generation; 9] = [
    Generation { name: "Lost Generation", start: 1883, end: 1900 },
    Generation { name: "Greatest Generation", start: 1901, end: 1927 },
    Generation { name: "Silent Generation", start: 1928, end: 1945 },
    Generation { name: "Baby Boomer", start: 1946, end: 1964 },
    Generation { name: "Generation X", start: 1965, end: 1980 },
    Generation { name: "Millennial", start: 1981, end: 1996 },
    Generation { name: "Generation Z", start: 1997, end: 2012 },
    Generation { name: "Generation Alpha", start: 2013, end: 2024 },
    Generation { name: "Generation Beta", start: 2025, end: 2039 },
];

// ============================================================================
// Moon Phases
// ============================================================================

/// Phase-fraction cutoffs for the eight named phases. The boundaries are
/// inclusive and intentionally kept at these exact fractions; a fraction
/// above the last cutoff wraps back to "New Moon".
pub const MOON_PHASE_CUTOFFS: [(f64, &str); 8] = [
    (0.0625, "New Moon"),
    (0.1875, "Waxing Crescent"),
    (0.3125, "First Quarter"),
    (0.4375, "Waxing Gibbous"),
    (0.5625, "Full Moon"),
    (0.6875, "Waning Gibbous"),
    (0.8125, "Last Quarter"),
    (0.9375, "Waning Crescent"),
];

// ============================================================================
// Planets
// ============================================================================

/// A planet with its orbital period in Earth days
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct Planet {
    pub name: &'static str,
    pub symbol: &'static str,
    pub orbital_days: f64,
}

pub const PLANETS: [Planet; 8] = [
    Planet { name: "Mercury", symbol: "☿", orbital_days: 87.97 },
    Planet { name: "Venus", symbol: "♀", orbital_days: 224.7 },
    Planet { name: "Earth", symbol: "♁", orbital_days: 365.26 },
    Planet { name: "Mars", symbol: "♂", orbital_days: 686.98 },
    Planet { name: "Jupiter", symbol: "♃", orbital_days: 4332.59 },
    Planet { name: "Saturn", symbol: "♄", orbital_days: 10759.22 },
    Planet { name: "Uranus", symbol: "⛢", orbital_days: 30688.5 },
    Planet { name: "Neptune", symbol: "♆", orbital_days: 60182.0 },
];

// ============================================================================
// Tech Milestones
// ============================================================================

/// A technology the person has outlived the invention of
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct TechMilestone {
    pub year: i32,
    pub label: &'static str,
}

pub const TECH_MILESTONES: [TechMilestone; 14] = [
    TechMilestone { year: 1971, label: "E-mail" },
    TechMilestone { year: 1973, label: "The mobile phone call" },
    TechMilestone { year: 1975, label: "The digital camera" },
    TechMilestone { year: 1981, label: "The personal computer (IBM PC)" },
    TechMilestone { year: 1989, label: "The World Wide Web" },
    TechMilestone { year: 1994, label: "Online shopping" },
    TechMilestone { year: 1998, label: "Google Search" },
    TechMilestone { year: 2001, label: "Wikipedia" },
    TechMilestone { year: 2004, label: "Facebook" },
    TechMilestone { year: 2007, label: "The iPhone" },
    TechMilestone { year: 2008, label: "The App Store" },
    TechMilestone { year: 2010, label: "Instagram" },
    TechMilestone { year: 2015, label: "Consumer smartwatches" },
    TechMilestone { year: 2022, label: "ChatGPT" },
];

// ============================================================================
// US Presidents
// ============================================================================

/// A presidential term as an inclusive range of calendar years in office
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct PresidentTerm {
    pub name: &'static str,
    pub start: i32,
    pub end: i32,
}

/// The sitting president's term is held open with a far-future end year
pub const US_PRESIDENTS: [PresidentTerm; 23] = [
    PresidentTerm { name: "William McKinley", start: 1897, end: 1901 },
    PresidentTerm { name: "Theodore Roosevelt", start: 1901, end: 1909 },
    PresidentTerm { name: "William Howard Taft", start: 1909, end: 1913 },
    PresidentTerm { name: "Woodrow Wilson", start: 1913, end: 1921 },
    PresidentTerm { name: "Warren G. Harding", start: 1921, end: 1923 },
    PresidentTerm { name: "Calvin Coolidge", start: 1923, end: 1929 },
    PresidentTerm { name: "Herbert Hoover", start: 1929, end: 1933 },
    PresidentTerm { name: "Franklin D. Roosevelt", start: 1933, end: 1945 },
    PresidentTerm { name: "Harry S. Truman", start: 1945, end: 1953 },
    PresidentTerm { name: "Dwight D. Eisenhower", start: 1953, end: 1961 },
    PresidentTerm { name: "John F. Kennedy", start: 1961, end: 1963 },
    PresidentTerm { name: "Lyndon B. Johnson", start: 1963, end: 1969 },
    PresidentTerm { name: "Richard Nixon", start: 1969, end: 1974 },
    PresidentTerm { name: "Gerald Ford", start: 1974, end: 1977 },
    PresidentTerm { name: "Jimmy Carter", start: 1977, end: 1981 },
    PresidentTerm { name: "Ronald Reagan", start: 1981, end: 1989 },
    PresidentTerm { name: "George H. W. Bush", start: 1989, end: 1993 },
    PresidentTerm { name: "Bill Clinton", start: 1993, end: 2001 },
    PresidentTerm { name: "George W. Bush", start: 2001, end: 2009 },
    PresidentTerm { name: "Barack Obama", start: 2009, end: 2017 },
    PresidentTerm { name: "Donald Trump", start: 2017, end: 2021 },
    PresidentTerm { name: "Joe Biden", start: 2021, end: 2025 },
    PresidentTerm { name: "Donald Trump", start: 2025, end: 9999 },
];

// ============================================================================
// World Population Series
// ============================================================================

/// World population at the start of a sample year
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct PopulationPoint {
    pub year: i32,
    pub population: u64,
}

/// Sparse series; lookups use the largest sample year at or before the
/// target and clamp to the first entry for earlier years
pub const WORLD_POPULATION: [PopulationPoint; 14] = [
    PopulationPoint { year: 1900, population: 1_650_000_000 },
    PopulationPoint { year: 1910, population: 1_750_000_000 },
    PopulationPoint { year: 1920, population: 1_860_000_000 },
    PopulationPoint { year: 1930, population: 2_070_000_000 },
    PopulationPoint { year: 1940, population: 2_300_000_000 },
    PopulationPoint { year: 1950, population: 2_540_000_000 },
    PopulationPoint { year: 1960, population: 3_030_000_000 },
    PopulationPoint { year: 1970, population: 3_700_000_000 },
    PopulationPoint { year: 1980, population: 4_460_000_000 },
    PopulationPoint { year: 1990, population: 5_330_000_000 },
    PopulationPoint { year: 2000, population: 6_140_000_000 },
    PopulationPoint { year: 2010, population: 6_960_000_000 },
    PopulationPoint { year: 2020, population: 7_840_000_000 },
    PopulationPoint { year: 2025, population: 8_200_000_000 },
];

// ============================================================================
// Sparse Indexes
// ============================================================================

/// Famous people by birthday, keyed by (month, day). Sparse: an absent
/// key means no coincidences, not an error.
pub static FAMOUS_BIRTHDAYS: Lazy<HashMap<(u32, u32), Vec<&'static str>>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert((1, 8), vec!["Elvis Presley", "David Bowie", "Stephen Hawking"]);
    m.insert((1, 15), vec!["Martin Luther King Jr."]);
    m.insert((2, 11), vec!["Thomas Edison", "Jennifer Aniston"]);
    m.insert((3, 14), vec!["Albert Einstein"]);
    m.insert((4, 15), vec!["Leonardo da Vinci", "Emma Watson"]);
    m.insert((5, 14), vec!["Mark Zuckerberg", "George Lucas"]);
    m.insert((6, 15), vec!["Ice Cube", "Neil Patrick Harris"]);
    m.insert((6, 28), vec!["Elon Musk"]);
    m.insert((7, 18), vec!["Nelson Mandela"]);
    m.insert((8, 4), vec!["Barack Obama", "Louis Armstrong"]);
    m.insert((9, 4), vec!["Beyoncé"]);
    m.insert((10, 28), vec!["Bill Gates", "Julia Roberts"]);
    m.insert((11, 30), vec!["Winston Churchill", "Mark Twain"]);
    m.insert((12, 25), vec!["Isaac Newton", "Humphrey Bogart", "Annie Lennox"]);
    m
});

/// What the world looked like in a birth year. Sparse: absent years
/// simply have no context entry.
pub static YEAR_CONTEXT: Lazy<HashMap<i32, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(1945, "World War II ended");
    m.insert(1953, "Mount Everest was first summited");
    m.insert(1955, "Disneyland opened its gates");
    m.insert(1961, "Yuri Gagarin became the first human in space");
    m.insert(1963, "Martin Luther King Jr. gave his 'I Have a Dream' speech");
    m.insert(1969, "Apollo 11 landed on the Moon");
    m.insert(1972, "The first video game console went on sale");
    m.insert(1977, "Star Wars premiered in theaters");
    m.insert(1984, "The first Macintosh computer was released");
    m.insert(1989, "The Berlin Wall fell");
    m.insert(1991, "The Soviet Union dissolved");
    m.insert(1994, "Nelson Mandela became president of South Africa");
    m.insert(1997, "Pathfinder landed on Mars");
    m.insert(2000, "The world celebrated the new millennium");
    m.insert(2001, "Wikipedia went online");
    m.insert(2004, "Facebook launched from a dorm room");
    m.insert(2008, "The global financial crisis unfolded");
    m.insert(2012, "Curiosity landed on Mars");
    m.insert(2016, "Gravitational waves were first detected");
    m.insert(2020, "A global pandemic changed daily life");
    m
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zodiac_table_shape() {
        assert_eq!(WESTERN_ZODIAC.len(), 12);
        for sign in &WESTERN_ZODIAC {
            assert!((1..=12).contains(&sign.start_month));
            assert!((1..=12).contains(&sign.end_month));
            assert!((1..=31).contains(&sign.start_day));
            assert!((1..=31).contains(&sign.end_day));
        }
        // Exactly one sign spans the year boundary
        let spanning = WESTERN_ZODIAC
            .iter()
            .filter(|s| s.start_month > s.end_month)
            .count();
        assert_eq!(spanning, 1);
    }

    #[test]
    fn test_generations_are_contiguous() {
        for pair in GENERATIONS.windows(2) {
            assert_eq!(
                pair[0].end + 1,
                pair[1].start,
                "gap between {} and {}",
                pair[0].name,
                pair[1].name
            );
        }
    }

    #[test]
    fn test_moon_phase_cutoffs_ascend() {
        for pair in MOON_PHASE_CUTOFFS.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
        assert!(MOON_PHASE_CUTOFFS.last().unwrap().0 < 1.0);
    }

    #[test]
    fn test_president_terms_ordered() {
        for pair in US_PRESIDENTS.windows(2) {
            assert!(pair[0].start <= pair[1].start);
            assert_eq!(pair[0].end, pair[1].start, "terms must hand over in the same year");
        }
    }

    #[test]
    fn test_population_series_monotonic() {
        for pair in WORLD_POPULATION.windows(2) {
            assert!(pair[0].year < pair[1].year);
            assert!(pair[0].population < pair[1].population);
        }
    }

    #[test]
    fn test_sparse_indexes_load() {
        assert!(FAMOUS_BIRTHDAYS.contains_key(&(12, 25)));
        assert!(YEAR_CONTEXT.contains_key(&1969));
        assert!(!FAMOUS_BIRTHDAYS.contains_key(&(2, 30)));
    }
}
