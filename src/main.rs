//! # Prayer Times Command Line
//!
//! Prints one day's prayer times for a coordinate pair or a US zip code.

use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::debug;

use prayer_times::config::{Config, DEFAULT_CONFIG_PATH};
use prayer_times::{compute_prayer_times, method_by_name, methods, parse_date, LocationQuery};

#[derive(Parser)]
#[command(name = "prayer-times", about = "Daily Islamic prayer times")]
struct Cli {
    /// Configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the times for one day
    Times {
        /// Date as MM/DD/YYYY, YYYY-MM-DD or YYYY/M/D (default: today)
        #[arg(long)]
        date: Option<String>,
        /// Latitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        long: Option<f64>,
        /// Five digit zip code
        #[arg(long)]
        zip: Option<String>,
        /// UTC offset in whole hours (default: system offset)
        #[arg(long, allow_hyphen_values = true)]
        tz: Option<i32>,
        /// Calculation method (see `methods`)
        #[arg(long)]
        method: Option<String>,
        /// Print the schedule as JSON
        #[arg(long)]
        json: bool,
        /// Write the effective configuration to this path
        #[arg(long)]
        write_config: Option<PathBuf>,
    },
    /// List the calculation methods
    Methods,
}

fn local_utc_offset_hours() -> i32 {
    Local::now().offset().local_minus_utc() / 3600
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Methods => {
            for method in methods() {
                println!("{}", method.name);
            }
        }
        Commands::Times {
            date,
            lat,
            long,
            zip,
            tz,
            method,
            json,
            write_config,
        } => {
            let mut config = Config::load_from_path(&cli.config);

            let date = match date {
                Some(s) => parse_date(&s)?,
                None => Local::now().date_naive(),
            };
            let method_name = method.unwrap_or_else(|| config.calculation.method.clone());
            let method = method_by_name(&method_name)?;

            let from_cli = lat.is_some() || long.is_some() || zip.is_some();
            let query = LocationQuery {
                latitude: if from_cli { lat } else { config.location.latitude },
                longitude: if from_cli { long } else { config.location.longitude },
                zip,
                utc_offset_hours: tz
                    .or(config.location.utc_offset)
                    .unwrap_or_else(local_utc_offset_hours),
            };
            debug!("{:?} on {}", query, date);
            let location = query
                .resolve(&config.location.zcta_path)
                .context("could not determine location")?;

            let schedule = compute_prayer_times(&date, &location, method)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&schedule)?);
            } else {
                for entry in &schedule.entries {
                    match entry.clock {
                        Some(clock) => println!("{}\t{}", entry.label, clock),
                        None => println!("{}\t--:--", entry.label),
                    }
                }
            }

            if let Some(path) = write_config {
                config.calculation.method = method.name.to_string();
                config.location.latitude = Some(location.latitude);
                config.location.longitude = Some(location.longitude);
                config.location.utc_offset = Some(location.utc_offset_hours);
                config.save_to_path(&path)?;
            }
        }
    }

    Ok(())
}
