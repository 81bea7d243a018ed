//! Derivation of a day's four reference instants.

use chrono::NaiveDate;
use tracing::trace;

use crate::ephemeris::Ephemeris;
use crate::error::{Error, Result};
use crate::types::{Coordinate, DayLight, SolarDay, SolarEvents};

/// Derives sunrise, noon, sunset and solar midnight for `date`.
///
/// Makes two ephemeris lookups, one for `date` and one for the following
/// date, and places midnight halfway between sunset and the next sunrise.
/// Polar dates come back as [`SolarDay::PolarDay`] or
/// [`SolarDay::PolarNight`]. A normal date followed by a date without a
/// sunrise has no midnight and is reported as
/// [`Error::EphemerisUnavailable`] for the following date.
pub fn derive<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    coordinate: Coordinate,
    date: NaiveDate,
) -> Result<SolarDay> {
    let (sunrise, noon, sunset) = match ephemeris.solar_events_for_date(coordinate, date)? {
        DayLight::NormalDay {
            sunrise,
            noon,
            sunset,
        } => (sunrise, noon, sunset),
        DayLight::PolarDay { noon } => {
            trace!(%coordinate, %date, "polar day");
            return Ok(SolarDay::PolarDay { noon });
        }
        DayLight::PolarNight { noon } => {
            trace!(%coordinate, %date, "polar night");
            return Ok(SolarDay::PolarNight { noon });
        }
    };

    let next_date = date.succ_opt().ok_or_else(|| Error::EphemerisUnavailable {
        coordinate,
        date,
        reason: "following date is out of range".to_string(),
    })?;
    let next_sunrise = ephemeris
        .solar_events_for_date(coordinate, next_date)?
        .sunrise()
        .ok_or_else(|| Error::EphemerisUnavailable {
            coordinate,
            date: next_date,
            reason: "no sunrise on the following date".to_string(),
        })?;

    SolarEvents::new(sunrise, noon, sunset, next_sunrise).map(SolarDay::Regular)
}
