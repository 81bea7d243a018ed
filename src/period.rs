//! Diurnal period classification and progress.

use chrono::{DateTime, Duration, NaiveDate, TimeDelta, Utc};
use tracing::debug;

use crate::ephemeris::Ephemeris;
use crate::error::{Error, Result};
use crate::events;
use crate::types::{Coordinate, Period, PeriodProgress, SolarDay, SolarEvents};

/// Which period `now` falls in. Boundary instants belong to the later period.
pub fn current_period(events: &SolarEvents, now: DateTime<Utc>) -> Period {
    if now < events.sunrise {
        Period::Night
    } else if now < events.noon {
        Period::Morning
    } else if now < events.sunset {
        Period::Afternoon
    } else if now < events.midnight {
        Period::Evening
    } else {
        Period::Night
    }
}

/// Classifies `now` against `events` and measures its progress.
///
/// Night is always measured from `events.midnight`, so an instant before
/// `events.sunrise` gets a negative progress. Use [`resolve_period`] to pick
/// the solar day whose cycle actually contains `now`.
pub fn classify(events: &SolarEvents, now: DateTime<Utc>) -> Result<PeriodProgress> {
    let period = current_period(events, now);
    PeriodProgress::measure(
        period,
        events.period_start(period),
        events.period_end(period),
        now,
    )
}

pub(crate) fn seconds(delta: TimeDelta) -> f64 {
    match delta.num_microseconds() {
        Some(us) => us as f64 / 1_000_000.0,
        None => delta.num_milliseconds() as f64 / 1_000.0,
    }
}

impl PeriodProgress {
    /// Progress of `now` through `[start, end)`, in percent.
    pub fn measure(
        period: Period,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        if end <= start {
            return Err(Error::degenerate(start, end));
        }
        let total_seconds = seconds(end - start);
        let elapsed_seconds = seconds(now - start);
        Ok(Self {
            period,
            total_seconds,
            elapsed_seconds,
            progress: elapsed_seconds / total_seconds * 100.0,
        })
    }
}

/// The solar day whose cycle contains an instant, with the instant's period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveCycle {
    pub date: NaiveDate,
    pub day: SolarDay,
    /// `None` on polar days and nights.
    pub progress: Option<PeriodProgress>,
}

fn step(date: NaiveDate, coordinate: Coordinate, days: i64) -> Result<NaiveDate> {
    date.checked_add_signed(Duration::days(days))
        .ok_or_else(|| Error::EphemerisUnavailable {
            coordinate,
            date,
            reason: "adjacent date is out of range".to_string(),
        })
}

/// Finds the cycle `[sunrise, sunrise + 1 day)` that contains `now` and
/// classifies `now` against it.
///
/// Starts from the UTC date of `now`. An instant before that date's sunrise
/// belongs to the previous date's cycle. An instant past that date's night
/// belongs to the next date's cycle once the next sunrise has passed, or
/// straight away when the next date is polar. The date is picked from raw
/// sunrises and only the chosen cycle is derived, so a polar date after an
/// unchosen cycle is never an error.
pub fn resolve_period<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    coordinate: Coordinate,
    now: DateTime<Utc>,
) -> Result<ActiveCycle> {
    let today = now.date_naive();
    let date = match ephemeris.solar_events_for_date(coordinate, today)?.sunrise() {
        Some(sunrise) if now < sunrise => {
            let date = step(today, coordinate, -1)?;
            debug!(%coordinate, %now, %date, "before sunrise, using previous solar day");
            date
        }
        Some(sunrise) if now >= sunrise + Duration::days(1) => {
            let next_date = step(today, coordinate, 1)?;
            let reached = ephemeris
                .solar_events_for_date(coordinate, next_date)?
                .sunrise()
                .map_or(true, |next_sunrise| now >= next_sunrise);
            if reached {
                debug!(%coordinate, %now, date = %next_date, "past night end, using next solar day");
                next_date
            } else {
                today
            }
        }
        _ => today,
    };

    let day = events::derive(ephemeris, coordinate, date)?;
    let progress = match day {
        SolarDay::Regular(current) => Some(classify(&current, now)?),
        SolarDay::PolarDay { .. } | SolarDay::PolarNight { .. } => None,
    };
    Ok(ActiveCycle {
        date,
        day,
        progress,
    })
}
