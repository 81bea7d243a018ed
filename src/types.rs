use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::iso8601;

/// Observer position in degrees, north and east positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Builds a coordinate without range checks. Out-of-range values are
    /// handed to the ephemeris as-is.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Builds a coordinate, rejecting latitudes outside [-90, 90] and
    /// longitudes outside [-180, 180].
    pub fn validated(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(Self::new(latitude, longitude))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub fn next(self) -> Season {
        match self {
            Season::Spring => Season::Summer,
            Season::Summer => Season::Autumn,
            Season::Autumn => Season::Winter,
            Season::Winter => Season::Spring,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        };
        f.write_str(name)
    }
}

/// One of the four phases of the diurnal cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Night,
    Morning,
    Afternoon,
    Evening,
}

impl Period {
    /// Cyclic successor: night → morning → afternoon → evening → night.
    pub fn next(self) -> Period {
        match self {
            Period::Night => Period::Morning,
            Period::Morning => Period::Afternoon,
            Period::Afternoon => Period::Evening,
            Period::Evening => Period::Night,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Period::Night => "night",
            Period::Morning => "morning",
            Period::Afternoon => "afternoon",
            Period::Evening => "evening",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rise, transit and set for one date as reported by an ephemeris.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayLight {
    NormalDay {
        sunrise: DateTime<Utc>,
        noon: DateTime<Utc>,
        sunset: DateTime<Utc>,
    },
    /// The sun stays above the horizon for the whole date.
    PolarDay { noon: DateTime<Utc> },
    /// The sun stays below the horizon for the whole date.
    PolarNight { noon: DateTime<Utc> },
}

impl DayLight {
    pub fn sunrise(&self) -> Option<DateTime<Utc>> {
        match *self {
            DayLight::NormalDay { sunrise, .. } => Some(sunrise),
            _ => None,
        }
    }
}

/// The four reference instants of one solar day.
///
/// Always satisfies `sunrise < noon < sunset < midnight` when built with
/// [`SolarEvents::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SolarEvents {
    #[serde(serialize_with = "iso8601::serialize")]
    pub sunrise: DateTime<Utc>,
    #[serde(serialize_with = "iso8601::serialize")]
    pub noon: DateTime<Utc>,
    #[serde(serialize_with = "iso8601::serialize")]
    pub sunset: DateTime<Utc>,
    #[serde(serialize_with = "iso8601::serialize")]
    pub midnight: DateTime<Utc>,
}

impl SolarEvents {
    /// Places solar midnight halfway between `sunset` and `next_sunrise`.
    pub fn new(
        sunrise: DateTime<Utc>,
        noon: DateTime<Utc>,
        sunset: DateTime<Utc>,
        next_sunrise: DateTime<Utc>,
    ) -> Result<Self> {
        for (start, end) in [(sunrise, noon), (noon, sunset), (sunset, next_sunrise)] {
            if start >= end {
                return Err(Error::degenerate(start, end));
            }
        }
        let midnight = sunset + (next_sunrise - sunset) / 2;
        Ok(Self {
            sunrise,
            noon,
            sunset,
            midnight,
        })
    }

    pub fn period_start(&self, period: Period) -> DateTime<Utc> {
        match period {
            Period::Morning => self.sunrise,
            Period::Afternoon => self.noon,
            Period::Evening => self.sunset,
            Period::Night => self.midnight,
        }
    }

    pub fn period_end(&self, period: Period) -> DateTime<Utc> {
        match period {
            Period::Morning => self.noon,
            Period::Afternoon => self.sunset,
            Period::Evening => self.midnight,
            Period::Night => self.night_end(),
        }
    }

    /// End of this cycle's night, one day after this cycle's sunrise.
    pub fn night_end(&self) -> DateTime<Utc> {
        self.sunrise + Duration::days(1)
    }
}

/// Which kind of day a [`SolarDay`] is, without its instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    Regular,
    PolarDay,
    PolarNight,
}

/// Output of the event deriver: a regular four-event day, or one of the
/// polar cases where no midnight can be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolarDay {
    Regular(SolarEvents),
    PolarDay { noon: DateTime<Utc> },
    PolarNight { noon: DateTime<Utc> },
}

impl SolarDay {
    pub fn events(&self) -> Option<&SolarEvents> {
        match self {
            SolarDay::Regular(events) => Some(events),
            _ => None,
        }
    }

    pub fn kind(&self) -> DayKind {
        match self {
            SolarDay::Regular(_) => DayKind::Regular,
            SolarDay::PolarDay { .. } => DayKind::PolarDay,
            SolarDay::PolarNight { .. } => DayKind::PolarNight,
        }
    }

    pub fn noon(&self) -> DateTime<Utc> {
        match *self {
            SolarDay::Regular(events) => events.noon,
            SolarDay::PolarDay { noon } | SolarDay::PolarNight { noon } => noon,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodProgress {
    pub period: Period,
    pub total_seconds: f64,
    pub elapsed_seconds: f64,
    /// Percent of the period elapsed. Not clamped.
    pub progress: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeasonInfo {
    pub current_season: Season,
    #[serde(serialize_with = "iso8601::serialize")]
    pub season_start: DateTime<Utc>,
    pub days_since_start: i64,
    pub total_season_days: i64,
    pub season_progress: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SkyPosition {
    pub altitude: f64,
    pub azimuth: f64,
    pub is_daytime: bool,
}

impl SkyPosition {
    /// The sun counts as up only when strictly above the horizon.
    pub fn new(altitude: f64, azimuth: f64) -> Self {
        Self {
            altitude,
            azimuth,
            is_daytime: altitude > 0.0,
        }
    }
}
