//! Source of raw solar events and sky angles.
//!
//! The rest of the crate only shapes what an [`Ephemeris`] reports.
//! [`ApproximateEphemeris`] is the built-in implementation, based on the
//! day-of-year declination and equation-of-time model in [`crate::angles`].
//! A higher-precision source can be plugged in by implementing the trait.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::angles::{self, HorizonCrossing, STANDARD_HORIZON_DEPRESSION};
use crate::error::{Error, Result};
use crate::types::{Coordinate, DayLight};

pub trait Ephemeris {
    /// Sunrise, transit and sunset for the UTC calendar `date`.
    fn solar_events_for_date(&self, coordinate: Coordinate, date: NaiveDate) -> Result<DayLight>;

    /// Degrees clockwise from north, in [0, 360).
    fn azimuth(&self, coordinate: Coordinate, instant: DateTime<Utc>) -> f64;

    /// Degrees above the horizon, in (-90, 90].
    fn elevation(&self, coordinate: Coordinate, instant: DateTime<Utc>) -> f64;
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn solar_events_for_date(&self, coordinate: Coordinate, date: NaiveDate) -> Result<DayLight> {
        (**self).solar_events_for_date(coordinate, date)
    }

    fn azimuth(&self, coordinate: Coordinate, instant: DateTime<Utc>) -> f64 {
        (**self).azimuth(coordinate, instant)
    }

    fn elevation(&self, coordinate: Coordinate, instant: DateTime<Utc>) -> f64 {
        (**self).elevation(coordinate, instant)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproximateEphemeris {
    /// Degrees below the geometric horizon at which the sun rises and sets.
    pub horizon_depression: f64,
}

impl Default for ApproximateEphemeris {
    fn default() -> Self {
        Self {
            horizon_depression: STANDARD_HORIZON_DEPRESSION,
        }
    }
}

impl ApproximateEphemeris {
    pub fn new(horizon_depression: f64) -> Self {
        Self { horizon_depression }
    }
}

fn offset_hours(base: DateTime<Utc>, hours: f64) -> DateTime<Utc> {
    base + Duration::milliseconds((hours * 3_600_000.0).round() as i64)
}

impl Ephemeris for ApproximateEphemeris {
    fn solar_events_for_date(&self, coordinate: Coordinate, date: NaiveDate) -> Result<DayLight> {
        let n = date.ordinal() as i32;
        let eot = angles::equation_of_time(n);
        let decl = angles::solar_declination(n);
        let transit_hours = 12.0 - angles::utc_lst_correction(coordinate.longitude, eot);

        if !transit_hours.is_finite() {
            return Err(Error::EphemerisUnavailable {
                coordinate,
                date,
                reason: "solar transit is not finite".to_string(),
            });
        }

        let start_of_day = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
        let noon = offset_hours(start_of_day, transit_hours);

        match angles::horizon_crossing(coordinate.latitude, decl, self.horizon_depression) {
            HorizonCrossing::Crosses(half_arc) if half_arc.is_finite() => {
                let half_day_hours = half_arc / angles::DEGREES_PER_HOUR;
                Ok(DayLight::NormalDay {
                    sunrise: offset_hours(noon, -half_day_hours),
                    noon,
                    sunset: offset_hours(noon, half_day_hours),
                })
            }
            HorizonCrossing::Crosses(_) => Err(Error::EphemerisUnavailable {
                coordinate,
                date,
                reason: "horizon crossing is not finite".to_string(),
            }),
            HorizonCrossing::NeverSets => Ok(DayLight::PolarDay { noon }),
            HorizonCrossing::NeverRises => Ok(DayLight::PolarNight { noon }),
        }
    }

    fn azimuth(&self, coordinate: Coordinate, instant: DateTime<Utc>) -> f64 {
        angles::solar_position(coordinate.latitude, coordinate.longitude, &instant).azimuth
    }

    fn elevation(&self, coordinate: Coordinate, instant: DateTime<Utc>) -> f64 {
        angles::solar_position(coordinate.latitude, coordinate.longitude, &instant).altitude
    }
}
