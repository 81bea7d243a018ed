mod common;

use chrono::{Duration, TimeZone};
use chrono_tz::America::Chicago;
use serde_json::{json, Value};

use common::{date, origin, utc, FixedEphemeris};
use solar_cycle::{
    Coordinate, DayKind, Error, Period, SeasonCalendar, SolarCycle, SolarCycleConfig,
};

fn fixed_cycle(eph: FixedEphemeris) -> SolarCycle<FixedEphemeris> {
    SolarCycle::new(eph, SeasonCalendar::default())
}

// ── Output shape ──

#[test]
fn test_snapshot_json_matches_contract() {
    let cycle = fixed_cycle(FixedEphemeris::default());
    let snapshot = cycle.snapshot(origin(), utc(2024, 6, 21, 16, 0, 0)).unwrap();
    let value: Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();

    assert_eq!(
        value,
        json!({
            "events": {
                "daylight": "regular",
                "sunrise": "2024-06-21T05:00:00+00:00",
                "noon": "2024-06-21T12:00:00+00:00",
                "sunset": "2024-06-21T20:00:00+00:00",
                "midnight": "2024-06-22T00:30:00+00:00"
            },
            "current_period": {
                "period": "afternoon",
                "total_seconds": 28800.0,
                "elapsed_seconds": 14400.0,
                "progress": 50.0
            },
            "season": {
                "current_season": "Summer",
                "season_start": "2024-06-21T00:00:00+00:00",
                "days_since_start": 0,
                "total_season_days": 93,
                "season_progress": 0.0
            },
            "sun_position": {
                "altitude": 30.0,
                "azimuth": 180.0,
                "is_daytime": true
            }
        })
    );
}

#[test]
fn test_polar_snapshot_has_null_events_and_period() {
    let eph = FixedEphemeris {
        polar_night: vec![date(2024, 12, 21)],
        elevation: -5.0,
        ..FixedEphemeris::default()
    };
    let snapshot = fixed_cycle(eph)
        .snapshot(origin(), utc(2024, 12, 21, 16, 0, 0))
        .unwrap();
    assert!(snapshot.current_period.is_none());
    assert!(!snapshot.sun_position.is_daytime);

    let value: Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();
    assert_eq!(value["events"]["daylight"], "polar_night");
    assert_eq!(value["events"]["sunrise"], Value::Null);
    assert_eq!(value["events"]["midnight"], Value::Null);
    assert_eq!(value["events"]["noon"], "2024-12-21T12:00:00+00:00");
    assert_eq!(value["current_period"], Value::Null);
    assert_eq!(value["season"]["current_season"], "Winter");
}

#[test]
fn test_polar_day_is_tagged_even_with_sun_below_horizon() {
    // Refraction keeps the sun "up" for rise/set while its altitude dips
    // just under zero.
    let eph = FixedEphemeris {
        polar_day: vec![date(2024, 6, 21)],
        elevation: -0.25,
        ..FixedEphemeris::default()
    };
    let snapshot = fixed_cycle(eph)
        .snapshot(origin(), utc(2024, 6, 21, 0, 0, 0))
        .unwrap();
    assert_eq!(snapshot.events.daylight, DayKind::PolarDay);
    assert!(!snapshot.sun_position.is_daytime);

    let value: Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();
    assert_eq!(value["events"]["daylight"], "polar_day");
}

#[test]
fn test_arctic_circle_midsummer_midnight_is_polar_day() {
    let cycle = SolarCycle::from_config(&SolarCycleConfig::default());
    let snapshot = cycle
        .snapshot(Coordinate::new(66.3, 0.0), utc(2024, 6, 21, 0, 0, 0))
        .unwrap();
    assert_eq!(snapshot.events.daylight, DayKind::PolarDay);
    assert!(snapshot.events.sunrise.is_none());
    assert!(snapshot.current_period.is_none());
}

// ── Assembly ──

#[test]
fn test_events_follow_the_active_solar_day() {
    let cycle = fixed_cycle(FixedEphemeris::default());
    let snapshot = cycle.snapshot(origin(), utc(2024, 6, 21, 2, 0, 0)).unwrap();
    assert_eq!(snapshot.events.sunrise, Some(utc(2024, 6, 20, 5, 0, 0)));
    assert_eq!(snapshot.events.midnight, Some(utc(2024, 6, 21, 0, 30, 0)));
    assert_eq!(snapshot.events.daylight, DayKind::Regular);
    let p = snapshot.current_period.unwrap();
    assert_eq!(p.period, Period::Night);
    assert!(p.progress > 0.0 && p.progress < 100.0);
}

#[test]
fn test_snapshot_at_converts_time_zones() {
    let cycle = fixed_cycle(FixedEphemeris::default());
    let local = Chicago.with_ymd_and_hms(2024, 6, 21, 11, 0, 0).unwrap();
    let from_local = cycle.snapshot_at(origin(), &local).unwrap();
    let from_utc = cycle.snapshot(origin(), utc(2024, 6, 21, 16, 0, 0)).unwrap();
    assert_eq!(from_local, from_utc);
}

#[test]
fn test_snapshot_propagates_ephemeris_failure() {
    let eph = FixedEphemeris {
        unavailable: vec![date(2024, 6, 21)],
        ..FixedEphemeris::default()
    };
    let err = fixed_cycle(eph)
        .snapshot(origin(), utc(2024, 6, 21, 16, 0, 0))
        .unwrap_err();
    assert!(matches!(err, Error::EphemerisUnavailable { .. }), "{:?}", err);
}

#[test]
fn test_snapshot_is_deterministic() {
    let cycle = fixed_cycle(FixedEphemeris::default());
    let now = utc(2024, 9, 1, 9, 30, 0);
    assert_eq!(
        cycle.snapshot(origin(), now).unwrap(),
        cycle.snapshot(origin(), now).unwrap()
    );
}

#[test]
fn test_default_cycle_for_springfield() {
    let cycle = SolarCycle::from_config(&SolarCycleConfig::default());
    let springfield = Coordinate::new(39.8, -89.6);
    let now = utc(2026, 3, 21, 18, 0, 0);
    let snapshot = cycle.snapshot(springfield, now).unwrap();

    let sunrise = snapshot.events.sunrise.unwrap();
    let sunset = snapshot.events.sunset.unwrap();
    let midnight = snapshot.events.midnight.unwrap();
    assert!(sunrise < snapshot.events.noon && snapshot.events.noon < sunset && sunset < midnight);
    assert!((snapshot.events.noon - now).num_minutes().abs() < 30);

    let p = snapshot.current_period.unwrap();
    assert!(matches!(p.period, Period::Morning | Period::Afternoon));
    assert!(snapshot.sun_position.is_daytime);
    assert_eq!(snapshot.season.days_since_start, 1);
    assert!(sunset - sunrise > Duration::hours(12));
}

#[test]
fn test_validated_coordinate_ranges() {
    assert!(Coordinate::validated(90.0, -180.0).is_ok());
    assert!(Coordinate::validated(-90.0, 180.0).is_ok());
    match Coordinate::validated(91.0, 0.0).unwrap_err() {
        Error::InvalidCoordinate { latitude, longitude } => {
            assert_eq!(latitude, 91.0);
            assert_eq!(longitude, 0.0);
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert!(matches!(
        Coordinate::validated(0.0, 180.5),
        Err(Error::InvalidCoordinate { .. })
    ));
    assert!(Coordinate::validated(f64::NAN, 0.0).is_err());
}
