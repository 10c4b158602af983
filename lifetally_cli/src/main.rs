use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use lifetally_core::summary::group_digits;
use lifetally_core::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "lifetally")]
#[command(about = "Life statistics calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and render life statistics for a birth date
    Stats {
        /// Birth date (YYYY-MM-DD)
        birthdate: String,

        /// Country code for the consumption overlay (us, uk, ca, au, de, fr, jp, in)
        #[arg(long)]
        country: Option<String>,

        /// Gender overlay (male, female)
        #[arg(long)]
        gender: Option<String>,

        /// Reference time override (RFC 3339); defaults to now
        #[arg(long)]
        at: Option<String>,

        /// Emit the full aggregate as JSON instead of cards
        #[arg(long)]
        json: bool,

        /// Skip appending the inputs to the submission log
        #[arg(long)]
        no_log: bool,
    },

    /// Print a shareable plain-text digest
    Share {
        /// Birth date (YYYY-MM-DD)
        birthdate: String,

        /// Country code for the consumption overlay
        #[arg(long)]
        country: Option<String>,

        /// Gender overlay (male, female)
        #[arg(long)]
        gender: Option<String>,

        /// Reference time override (RFC 3339); defaults to now
        #[arg(long)]
        at: Option<String>,

        /// Skip appending the inputs to the submission log
        #[arg(long)]
        no_log: bool,
    },

    /// Roll up logged submissions to CSV
    Rollup {
        /// Clean up processed log files after rollup
        #[arg(long)]
        cleanup: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    lifetally_core::logging::init();

    let cli = Cli::parse();

    // Determine data directory
    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());

    // Refuse to run against a broken profile catalog
    let errors = get_default_profiles().validate();
    if !errors.is_empty() {
        eprintln!("Profile catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::ProfileValidation("Invalid profile catalog".into()));
    }

    match cli.command {
        Commands::Stats {
            birthdate,
            country,
            gender,
            at,
            json,
            no_log,
        } => cmd_stats(data_dir, birthdate, country, gender, at, json, no_log, &config),
        Commands::Share {
            birthdate,
            country,
            gender,
            at,
            no_log,
        } => cmd_share(data_dir, birthdate, country, gender, at, no_log, &config),
        Commands::Rollup { cleanup } => cmd_rollup(data_dir, cleanup),
    }
}

/// Parsed and validated inputs for a calculation
struct ResolvedInputs {
    birth_date: NaiveDate,
    reference_time: DateTime<Utc>,
    profile: &'static CountryProfile,
    gender: Gender,
}

fn resolve_inputs(
    birthdate: &str,
    country: Option<String>,
    gender: Option<String>,
    at: Option<String>,
    config: &Config,
) -> Result<ResolvedInputs> {
    let birth_date = NaiveDate::parse_from_str(birthdate, "%Y-%m-%d")
        .map_err(|e| Error::InvalidInput(format!("birth date '{}': {}", birthdate, e)))?;

    let reference_time = match at {
        Some(at) => DateTime::parse_from_rfc3339(&at)
            .map_err(|e| Error::InvalidInput(format!("reference time '{}': {}", at, e)))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };

    // The engine leaves a reference time before the birth date
    // unspecified, so the caller checks here.
    if reference_time < elapsed::birth_instant(birth_date) {
        return Err(Error::InvalidInput(format!(
            "birth date {} is after the reference time {}",
            birth_date, reference_time
        )));
    }

    let requested_country = country.unwrap_or_else(|| config.defaults.country.clone());
    let catalog = get_default_profiles();
    if !catalog
        .profiles
        .contains_key(&requested_country.to_lowercase())
    {
        eprintln!(
            "Unknown country: {}. Using baseline profile.",
            requested_country
        );
    }
    let profile = catalog.resolve(Some(requested_country.as_str()));

    let gender = match gender.or_else(|| config.defaults.gender.clone()) {
        Some(tag) => Gender::parse(&tag).unwrap_or_else(|| {
            eprintln!("Unknown gender: {}. Computing without the overlay.", tag);
            Gender::Unspecified
        }),
        None => Gender::Unspecified,
    };

    Ok(ResolvedInputs {
        birth_date,
        reference_time,
        profile,
        gender,
    })
}

fn cmd_stats(
    data_dir: PathBuf,
    birthdate: String,
    country: Option<String>,
    gender: Option<String>,
    at: Option<String>,
    json: bool,
    no_log: bool,
    config: &Config,
) -> Result<()> {
    let inputs = resolve_inputs(&birthdate, country, gender, at, config)?;

    let stats = compute_life_stats(
        inputs.birth_date,
        inputs.reference_time,
        inputs.profile,
        inputs.gender,
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        display_stats(&stats);
    }

    if !no_log {
        log_submission(&data_dir, &stats)?;
    }

    Ok(())
}

fn cmd_share(
    data_dir: PathBuf,
    birthdate: String,
    country: Option<String>,
    gender: Option<String>,
    at: Option<String>,
    no_log: bool,
    config: &Config,
) -> Result<()> {
    let inputs = resolve_inputs(&birthdate, country, gender, at, config)?;

    let stats = compute_life_stats(
        inputs.birth_date,
        inputs.reference_time,
        inputs.profile,
        inputs.gender,
    );

    println!("{}", share_summary(&stats));

    if !no_log {
        log_submission(&data_dir, &stats)?;
    }

    Ok(())
}

fn cmd_rollup(data_dir: PathBuf, cleanup: bool) -> Result<()> {
    let log_dir = data_dir.join("submissions");
    let log_path = log_dir.join("inputs.jsonl");
    let csv_path = data_dir.join("submissions.csv");

    if !log_path.exists() {
        println!("No submission log found - nothing to roll up.");
        return Ok(());
    }

    let count = lifetally_core::csv_rollup::log_to_csv_and_archive(&log_path, &csv_path)?;

    println!("✓ Rolled up {} submissions to CSV", count);
    println!("  CSV: {}", csv_path.display());

    if cleanup {
        let cleaned = lifetally_core::csv_rollup::cleanup_processed_logs(&log_dir)?;
        if cleaned > 0 {
            println!("✓ Cleaned up {} processed log files", cleaned);
        }
    }

    Ok(())
}

fn log_submission(data_dir: &Path, stats: &LifeStats) -> Result<()> {
    let log_path = data_dir.join("submissions").join("inputs.jsonl");

    let submission = Submission {
        id: uuid::Uuid::new_v4(),
        submitted_at: Utc::now(),
        birth_date: stats.birth_date,
        country: stats.country.clone(),
        gender: stats.gender,
    };

    let mut sink = JsonlSink::new(&log_path);
    sink.append(&submission)
}

fn format_amount(value: f64, precision: u8) -> String {
    format!("{:.*}", precision as usize, value)
}

fn display_stats(stats: &LifeStats) {
    let info = &stats.birth_info;

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  LIFE STATISTICS");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!(
        "  Born {} — a {} in {}, under a {} moon",
        stats.birth_date, info.day_of_week, info.season, info.moon_phase
    );
    println!(
        "  {} {} · Year of the {} {} · Birthstone: {}",
        info.western_zodiac.symbol,
        info.western_zodiac.name,
        info.chinese_zodiac.animal,
        info.chinese_zodiac.symbol,
        info.birthstone.name
    );
    println!("  {}", info.generation.name);
    if let Some(context) = info.year_context {
        println!("  That year, {}.", lowercase_first(context));
    }
    if !info.famous_birthdays.is_empty() {
        println!("  Birthday twins: {}", info.famous_birthdays.join(", "));
    }
    println!(
        "  World population back then: ~{}",
        group_digits(info.world_population_then as i64)
    );
    println!(
        "  US presidents in your lifetime: {}",
        info.us_presidents_since
    );

    println!("\n  TIME ALIVE");
    println!("  → {} days", group_digits(stats.elapsed.days));
    println!("  → {} weeks", group_digits(stats.elapsed.weeks));
    println!("  → {} hours", group_digits(stats.elapsed.hours));
    println!("  → {} seconds", group_digits(stats.elapsed.seconds));
    println!(
        "  → {} full moons · {} leap years",
        group_digits(stats.elapsed.full_moons),
        stats.elapsed.leap_years
    );
    println!(
        "  → {} of {} weeks of a 90-year life ({}%)",
        group_digits(stats.life_in_weeks.weeks_lived),
        group_digits(stats.life_in_weeks.weeks_total),
        stats.life_in_weeks.percent_lived
    );

    println!("\n  YOUR BODY");
    println!("  → {} heartbeats", group_digits(stats.body.heartbeats));
    println!("  → {} breaths", group_digits(stats.body.breaths));
    println!("  → {} blinks", group_digits(stats.body.blinks));
    println!(
        "  → {} years asleep, {} dreams",
        stats.body.sleep_years,
        group_digits(stats.body.dreams)
    );
    println!(
        "  → {} cm of hair, {} cm of nails",
        stats.body.hair_grown_cm, stats.body.nails_grown_cm
    );
    println!(
        "  → {} words spoken, {} laughs",
        group_digits(stats.body.words_spoken),
        group_digits(stats.body.laughs)
    );
    if let Some(cycles) = stats.body.menstrual_cycles {
        println!("  → {} menstrual cycles", group_digits(cycles));
    }
    if let Some(cm) = stats.body.facial_hair_cm {
        println!("  → {} cm of facial hair", cm);
    }

    println!("\n  THE COSMOS");
    println!(
        "  → {} miles traveled through space",
        group_digits(stats.cosmic.distance_traveled_miles)
    );
    println!(
        "  → ~{} solar and ~{} lunar eclipses",
        stats.cosmic.solar_eclipses, stats.cosmic.lunar_eclipses
    );
    for age in &stats.cosmic.planetary_ages {
        println!(
            "  {} {:<8} {:>4} years (next birthday in {} days)",
            age.symbol,
            age.planet,
            age.years,
            group_digits(age.days_until_birthday)
        );
    }

    println!("\n  IN {} (country averages)", stats.country.to_uppercase());
    println!(
        "  → {} steps walked",
        group_digits(stats.consumption.steps_walked)
    );
    println!(
        "  → {} hours commuting",
        group_digits(stats.consumption.commute_hours)
    );
    println!(
        "  → {} full days of screen time",
        group_digits(stats.consumption.screen_time_days)
    );
    println!(
        "  → {} baths, {} cups of coffee",
        group_digits(stats.consumption.baths_taken),
        group_digits(stats.consumption.cups_of_coffee)
    );
    println!(
        "  → {} miles driven",
        group_digits(stats.consumption.miles_driven)
    );
    for item in &stats.consumption.food {
        println!(
            "  {} {} {}",
            item.icon,
            format_amount(item.amount, item.precision),
            item.label
        );
    }

    println!("\n  CLUBS");
    print_club(
        "Billion-seconds club",
        stats.clubs.billion_seconds,
        stats.clubs.days_until_billion_seconds,
    );
    print_club(
        "10,000-days club",
        stats.clubs.ten_thousand_days,
        stats.clubs.days_until_ten_thousand_days,
    );

    println!("\n  COMING UP");
    for milestone in &stats.milestones {
        println!(
            "  → {} in {} days ({})",
            milestone.label,
            group_digits(milestone.days_until),
            milestone.on
        );
    }

    println!("\n  ACHIEVEMENTS");
    for achievement in &stats.achievements {
        let mark = if achievement.earned { "✓" } else { "·" };
        println!("  {} {}", mark, achievement.label);
    }

    println!();
}

/// The clubs carry a joined/countdown duality: a joined club has no
/// countdown to print.
fn print_club(label: &str, joined: bool, days_until: Option<i64>) {
    match (joined, days_until) {
        (true, _) => println!("  ✓ {} — member", label),
        (false, Some(days)) => {
            println!("  · {} — {} days to go", label, group_digits(days))
        }
        (false, None) => println!("  · {}", label),
    }
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
