use chrono::TimeZone;
use chrono_tz::America::Chicago;

use solar_cycle::{iso8601, Coordinate, SolarCycle};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let coordinate = Coordinate::new(39.8, -89.6);

    let dt = Chicago
        .with_ymd_and_hms(2026, 3, 21, 12, 0, 0)
        .single()
        .ok_or("ambiguous local time")?;

    let cycle: SolarCycle = SolarCycle::default();
    let snapshot = cycle.snapshot_at(coordinate, &dt)?;

    println!("=== Solar Cycle Snapshot Example ===");
    println!(
        "Location: Springfield, IL ({:.1}°N, {:.1}°W)",
        coordinate.latitude, -coordinate.longitude
    );
    println!("Date/Time: {}", dt);
    println!();
    println!("--- Solar Events (UTC) ---");
    if let (Some(sunrise), Some(sunset), Some(midnight)) = (
        snapshot.events.sunrise,
        snapshot.events.sunset,
        snapshot.events.midnight,
    ) {
        println!("Sunrise: {}", iso8601::format(&sunrise));
        println!("Noon: {}", iso8601::format(&snapshot.events.noon));
        println!("Sunset: {}", iso8601::format(&sunset));
        println!("Midnight: {}", iso8601::format(&midnight));
    }
    println!();
    if let Some(period) = snapshot.current_period {
        println!("--- Current Period ---");
        println!("Period: {}", period.period);
        println!("Progress: {:.1}%", period.progress);
        println!();
    }
    println!("--- Season ---");
    println!("Season: {}", snapshot.season.current_season);
    println!("Progress: {:.1}%", snapshot.season.season_progress);
    println!();
    println!("--- Sun Position ---");
    println!("Altitude: {:.2}°", snapshot.sun_position.altitude);
    println!(
        "Azimuth: {:.2}° (0°=N, 90°=E, 180°=S)",
        snapshot.sun_position.azimuth
    );
    println!();
    println!("{}", snapshot.to_json_pretty()?);

    Ok(())
}
