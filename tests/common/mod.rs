#![allow(dead_code, unused_macros)]

use std::cell::Cell;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

use solar_cycle::{Coordinate, DayLight, Ephemeris, Error, Result};

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {{
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    }};
}

pub fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

pub fn date(y: i32, mo: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, mo, d).unwrap()
}

pub fn origin() -> Coordinate {
    Coordinate::new(0.0, 0.0)
}

/// Scripted ephemeris: the same rise/transit/set offsets from 00:00 UTC on
/// every date, with selected dates marked polar or unavailable.
pub struct FixedEphemeris {
    pub sunrise: Duration,
    pub noon: Duration,
    pub sunset: Duration,
    pub polar_day: Vec<NaiveDate>,
    pub polar_night: Vec<NaiveDate>,
    pub unavailable: Vec<NaiveDate>,
    pub elevation: f64,
    pub azimuth: f64,
    pub lookups: Cell<usize>,
}

impl Default for FixedEphemeris {
    fn default() -> Self {
        Self {
            sunrise: Duration::hours(5),
            noon: Duration::hours(12),
            sunset: Duration::hours(20),
            polar_day: Vec::new(),
            polar_night: Vec::new(),
            unavailable: Vec::new(),
            elevation: 30.0,
            azimuth: 180.0,
            lookups: Cell::new(0),
        }
    }
}

impl FixedEphemeris {
    pub fn with_offsets(sunrise: Duration, noon: Duration, sunset: Duration) -> Self {
        Self {
            sunrise,
            noon,
            sunset,
            ..Self::default()
        }
    }
}

impl Ephemeris for FixedEphemeris {
    fn solar_events_for_date(&self, coordinate: Coordinate, date: NaiveDate) -> Result<DayLight> {
        self.lookups.set(self.lookups.get() + 1);
        if self.unavailable.contains(&date) {
            return Err(Error::EphemerisUnavailable {
                coordinate,
                date,
                reason: "scripted outage".to_string(),
            });
        }
        let start = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
        let noon = start + self.noon;
        if self.polar_day.contains(&date) {
            return Ok(DayLight::PolarDay { noon });
        }
        if self.polar_night.contains(&date) {
            return Ok(DayLight::PolarNight { noon });
        }
        Ok(DayLight::NormalDay {
            sunrise: start + self.sunrise,
            noon,
            sunset: start + self.sunset,
        })
    }

    fn azimuth(&self, _coordinate: Coordinate, _instant: DateTime<Utc>) -> f64 {
        self.azimuth
    }

    fn elevation(&self, _coordinate: Coordinate, _instant: DateTime<Utc>) -> f64 {
        self.elevation
    }
}
