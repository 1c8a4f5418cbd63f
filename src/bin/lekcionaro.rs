//! Lists the Sundays and holy days in a range of dates with their readings.
//!
//! # Usage
//!
//! ```bash
//! # the coming week
//! lekcionaro
//! # a week from the given date
//! lekcionaro 2024-12-01
//! # an explicit range, both ends included
//! lekcionaro 2024-12-01 2025-01-06
//! ```
//!
//! Table locations come from `lekcionaro.toml` (see `lekcionaro::config`).
//! When a psalter is configured, the text of each appointed psalm is printed
//! below its citation.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::process::ExitCode;

use anyhow::{Context, bail};
use chrono::Datelike;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use lekcionaro::Date;
use lekcionaro::citation;
use lekcionaro::config::Config;
use lekcionaro::error::ConfigError;
use lekcionaro::liturgical::observances;
use lekcionaro::psalter::Psalter;

#[derive(Debug, Parser)]
#[command(
    name = "lekcionaro",
    about = "List Sundays and holy days with their appointed readings"
)]
struct Args {
    /// First date listed, YYYY-MM-DD (default: today, UTC)
    #[arg(value_name = "START")]
    start: Option<Date>,
    /// Last date listed, YYYY-MM-DD (default: START plus `range.days`)
    #[arg(value_name = "END", requires = "start")]
    end: Option<Date>,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = match Config::from_default_location() {
        Ok(config) => config,
        Err(ConfigError::NotFound) => {
            info!("no configuration file found, using defaults");
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };

    let start = match args.start {
        Some(start) => start,
        None => today()?,
    };
    let end = match args.end {
        Some(end) => end,
        None => {
            let days = i32::try_from(config.range.days).context("range.days is too large")?;
            start
                .checked_add(days)
                .with_context(|| format!("{start} plus {days} days is past the year 9999"))?
        }
    };
    if end < start {
        bail!("end date {end} is before start date {start}");
    }

    let lectionary = config.load_lectionary()?;
    info!("reading table has {} entries", lectionary.len());
    let psalter = config.load_psalter()?;
    if let Some(psalter) = &psalter {
        info!("psalter has {} psalms", psalter.len());
    }

    println!("Sundays and Holy Days between {start} and {end}:");
    println!();
    let mut failures = 0;
    for (index, observance) in observances(start, end).iter().enumerate() {
        println!(
            "{}) {} [{}] {}, {}",
            index + 1,
            observance.name,
            observance.date,
            observance.season,
            observance.year
        );
        match lectionary.resolve(observance) {
            Ok(readings) => {
                for reading in &readings {
                    println!("   * {reading}");
                    if let Some(psalter) = &psalter {
                        failures += print_psalm(psalter, reading);
                    }
                }
            }
            Err(e) => {
                eprintln!("error: {e}");
                failures += 1;
            }
        }
        println!();
    }

    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Prints the psalm text for `reading` if it is a psalm; returns the number
/// of failures.
fn print_psalm(psalter: &Psalter, reading: &str) -> u32 {
    let chosen = citation::first_option(reading);
    if !citation::is_psalm(&chosen) {
        return 0;
    }
    match psalter.get_psalm(&chosen) {
        Ok(text) => {
            println!();
            for line in text.lines() {
                println!("       {line}");
            }
            println!();
            0
        }
        Err(e) => {
            eprintln!("error: {chosen}: {e}");
            1
        }
    }
}

fn today() -> anyhow::Result<Date> {
    let today = chrono::Utc::now().date_naive();
    Date::from_gregorian(today.year(), today.month() as i32, today.day() as i32)
        .context("today's date is past the year 9999")
}
