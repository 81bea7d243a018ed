use chrono::{DateTime, Utc};

use crate::ephemeris::Ephemeris;
use crate::error::{Error, Result};
use crate::types::{Coordinate, SkyPosition};

/// Sun altitude and azimuth at `now`, flagged as daytime when the sun is
/// strictly above the horizon.
pub fn position<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    coordinate: Coordinate,
    now: DateTime<Utc>,
) -> Result<SkyPosition> {
    let altitude = ephemeris.elevation(coordinate, now);
    let azimuth = ephemeris.azimuth(coordinate, now);
    if !altitude.is_finite() || !azimuth.is_finite() {
        return Err(Error::EphemerisUnavailable {
            coordinate,
            date: now.date_naive(),
            reason: format!("non-finite sky position (altitude {altitude}, azimuth {azimuth})"),
        });
    }
    Ok(SkyPosition::new(altitude, azimuth))
}
