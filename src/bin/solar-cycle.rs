//! Prints the solar-cycle snapshot for a coordinate.
//!
//! ```bash
//! solar-cycle 39.8 -89.6
//! solar-cycle 69.65 18.96 --at 2024-12-21T12:00:00Z --json
//! ```
//!
//! `RUST_LOG` takes tracing filter directives, e.g. `solar_cycle=debug`
//! (default: info).

use std::io;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use solar_cycle::{iso8601, Coordinate, DayKind, SolarCycle, SolarCycleConfig};

#[derive(Parser)]
#[command(name = "solar-cycle", about = "Diurnal period, season and sun position")]
struct Cli {
    /// Latitude in degrees, north positive
    #[arg(allow_hyphen_values = true)]
    latitude: f64,
    /// Longitude in degrees, east positive
    #[arg(allow_hyphen_values = true)]
    longitude: f64,
    /// Instant to evaluate (RFC 3339). Defaults to now.
    #[arg(long)]
    at: Option<DateTime<Utc>>,
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "loading configuration");
            SolarCycleConfig::from_path(path)?
        }
        None => SolarCycleConfig::default(),
    };

    let coordinate = Coordinate::validated(cli.latitude, cli.longitude)?;
    let now = cli.at.unwrap_or_else(Utc::now);
    let snapshot = SolarCycle::from_config(&config).snapshot(coordinate, now)?;

    if cli.json {
        println!("{}", snapshot.to_json_pretty()?);
        return Ok(());
    }

    let show = |t: Option<DateTime<Utc>>| t.map_or_else(|| "-".to_string(), |t| iso8601::format(&t));
    let events = &snapshot.events;

    println!("=== Solar Cycle ===");
    println!("Location: ({:.4}, {:.4})", coordinate.latitude, coordinate.longitude);
    println!("Instant: {}", iso8601::format(&now));
    println!();
    println!("--- Solar Events ---");
    println!("Sunrise:  {}", show(events.sunrise));
    println!("Noon:     {}", iso8601::format(&events.noon));
    println!("Sunset:   {}", show(events.sunset));
    println!("Midnight: {}", show(events.midnight));
    println!();
    println!("--- Current Period ---");
    match (events.daylight, &snapshot.current_period) {
        (DayKind::PolarDay, _) => println!("Period: polar day"),
        (DayKind::PolarNight, _) => println!("Period: polar night"),
        (DayKind::Regular, Some(p)) => {
            println!("Period: {}", p.period);
            println!("Elapsed: {:.0} s of {:.0} s", p.elapsed_seconds, p.total_seconds);
            println!("Progress: {:.1}%", p.progress);
        }
        (DayKind::Regular, None) => println!("Period: -"),
    }
    println!();
    println!("--- Season ---");
    let season = &snapshot.season;
    println!("Season: {}", season.current_season);
    println!("Started: {}", iso8601::format(&season.season_start));
    println!(
        "Day {} of {} ({:.1}%)",
        season.days_since_start, season.total_season_days, season.season_progress
    );
    println!();
    println!("--- Sun Position ---");
    println!("Altitude: {:.2}°", snapshot.sun_position.altitude);
    println!("Azimuth: {:.2}° (0°=N, 90°=E, 180°=S)", snapshot.sun_position.azimuth);
    println!(
        "Sun is {}",
        if snapshot.sun_position.is_daytime { "up" } else { "down" }
    );

    Ok(())
}
