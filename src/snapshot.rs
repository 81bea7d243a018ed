//! Assembly of the full read-only snapshot served to a presentation layer.

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;
use tracing::debug;

use crate::config::SolarCycleConfig;
use crate::ephemeris::{ApproximateEphemeris, Ephemeris};
use crate::error::Result;
use crate::iso8601;
use crate::period::resolve_period;
use crate::season::SeasonCalendar;
use crate::sky;
use crate::types::{Coordinate, DayKind, PeriodProgress, SeasonInfo, SkyPosition, SolarDay};

/// Reference instants of the active solar day. On polar days only `noon`
/// is set and `daylight` says whether the sun stays up or down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SnapshotEvents {
    pub daylight: DayKind,
    #[serde(serialize_with = "iso8601::serialize_opt")]
    pub sunrise: Option<DateTime<Utc>>,
    #[serde(serialize_with = "iso8601::serialize")]
    pub noon: DateTime<Utc>,
    #[serde(serialize_with = "iso8601::serialize_opt")]
    pub sunset: Option<DateTime<Utc>>,
    #[serde(serialize_with = "iso8601::serialize_opt")]
    pub midnight: Option<DateTime<Utc>>,
}

impl From<&SolarDay> for SnapshotEvents {
    fn from(day: &SolarDay) -> Self {
        match day.events() {
            Some(events) => Self {
                daylight: DayKind::Regular,
                sunrise: Some(events.sunrise),
                noon: events.noon,
                sunset: Some(events.sunset),
                midnight: Some(events.midnight),
            },
            None => Self {
                daylight: day.kind(),
                sunrise: None,
                noon: day.noon(),
                sunset: None,
                midnight: None,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SunSnapshot {
    pub events: SnapshotEvents,
    pub current_period: Option<PeriodProgress>,
    pub season: SeasonInfo,
    pub sun_position: SkyPosition,
}

impl SunSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Combines an ephemeris with a season calendar to build snapshots.
#[derive(Debug, Clone, Default)]
pub struct SolarCycle<E = ApproximateEphemeris> {
    ephemeris: E,
    seasons: SeasonCalendar,
}

impl SolarCycle<ApproximateEphemeris> {
    pub fn from_config(config: &SolarCycleConfig) -> Self {
        Self::new(config.ephemeris(), config.seasons.clone())
    }
}

impl<E: Ephemeris> SolarCycle<E> {
    pub fn new(ephemeris: E, seasons: SeasonCalendar) -> Self {
        Self { ephemeris, seasons }
    }

    pub fn ephemeris(&self) -> &E {
        &self.ephemeris
    }

    pub fn seasons(&self) -> &SeasonCalendar {
        &self.seasons
    }

    /// Everything known about the sun at `coordinate` and `now`.
    ///
    /// `events` and `current_period` describe the solar day whose cycle
    /// contains `now`.
    pub fn snapshot(&self, coordinate: Coordinate, now: DateTime<Utc>) -> Result<SunSnapshot> {
        let cycle = resolve_period(&self.ephemeris, coordinate, now)?;
        let season = self.seasons.track(now)?;
        let sun_position = sky::position(&self.ephemeris, coordinate, now)?;

        debug!(
            %coordinate,
            %now,
            solar_date = %cycle.date,
            daylight = ?cycle.day.kind(),
            period = cycle.progress.map(|p| p.period.as_str()).unwrap_or("none"),
            season = %season.current_season,
            "assembled snapshot"
        );

        Ok(SunSnapshot {
            events: SnapshotEvents::from(&cycle.day),
            current_period: cycle.progress,
            season,
            sun_position,
        })
    }

    /// Like [`SolarCycle::snapshot`], for an instant in any time zone.
    pub fn snapshot_at<Tz: TimeZone>(
        &self,
        coordinate: Coordinate,
        instant: &DateTime<Tz>,
    ) -> Result<SunSnapshot> {
        self.snapshot(coordinate, instant.with_timezone(&Utc))
    }
}
