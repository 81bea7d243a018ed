use chrono::{DateTime, Datelike, Timelike, Utc};

pub const EARTH_AXIAL_TILT: f64 = 23.45;
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Refraction (34') plus solar semidiameter (16') at the horizon.
pub const STANDARD_HORIZON_DEPRESSION: f64 = 50.0 / 60.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

pub fn intermediate_angle_b(n: i32) -> f64 {
    deg_to_rad((n - 1) as f64 * (360.0 / 365.0))
}

/// Equation of time in minutes for day-of-year `n`.
pub fn equation_of_time(n: i32) -> f64 {
    let b = intermediate_angle_b(n);
    229.18
        * (0.000075
            + 0.001868 * b.cos()
            - 0.032077 * b.sin()
            - 0.014615 * (2.0 * b).cos()
            - 0.040849 * (2.0 * b).sin())
}

/// Hours to add to UTC to get local solar time.
pub fn utc_lst_correction(longitude: f64, eot: f64) -> f64 {
    (4.0 * longitude + eot) / 60.0
}

pub fn hour_angle(local_solar_time: f64) -> f64 {
    DEGREES_PER_HOUR * (local_solar_time - 12.0)
}

pub fn solar_declination(n: i32) -> f64 {
    EARTH_AXIAL_TILT * deg_to_rad(360.0 * ((284 + n) as f64 / 365.0)).sin()
}

pub fn solar_zenith_angle(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let cos_zenith =
        lat_rad.sin() * dec_rad.sin() + lat_rad.cos() * dec_rad.cos() * ha_rad.cos();
    rad_to_deg(cos_zenith.clamp(-1.0, 1.0).acos())
}

pub fn solar_altitude(zenith_angle: f64) -> f64 {
    90.0 - zenith_angle
}

/// Azimuth measured clockwise from north, in [0, 360).
pub fn solar_azimuth(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let sin_az = -dec_rad.cos() * ha_rad.sin();
    let cos_az = dec_rad.sin() * lat_rad.cos() - dec_rad.cos() * lat_rad.sin() * ha_rad.cos();
    let az_rad = sin_az.atan2(cos_az);
    normalize_angle(rad_to_deg(az_rad))
}

/// How the sun meets a horizon lowered by some depression angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HorizonCrossing {
    /// Half the daylight arc, as an hour angle in degrees.
    Crosses(f64),
    NeverSets,
    NeverRises,
}

pub fn horizon_crossing(latitude: f64, declination: f64, depression: f64) -> HorizonCrossing {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let cos_h = (deg_to_rad(-depression).sin() - lat_rad.sin() * dec_rad.sin())
        / (lat_rad.cos() * dec_rad.cos());

    if cos_h >= 1.0 {
        HorizonCrossing::NeverRises
    } else if cos_h <= -1.0 {
        HorizonCrossing::NeverSets
    } else {
        HorizonCrossing::Crosses(rad_to_deg(cos_h.acos()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    pub day_of_year: i32,
    pub declination: f64,
    pub equation_of_time: f64,
    pub local_solar_time: f64,
    pub hour_angle: f64,
    pub zenith: f64,
    pub altitude: f64,
    pub azimuth: f64,
}

pub fn solar_position(latitude: f64, longitude: f64, instant: &DateTime<Utc>) -> SolarPosition {
    let utc_hours = instant.hour() as f64
        + instant.minute() as f64 / 60.0
        + instant.second() as f64 / 3600.0;
    let n = instant.ordinal() as i32;
    let eot = equation_of_time(n);
    let decl = solar_declination(n);
    let lst = (utc_hours + utc_lst_correction(longitude, eot)).rem_euclid(24.0);
    let ha = hour_angle(lst);
    let zenith = solar_zenith_angle(latitude, decl, ha);
    SolarPosition {
        day_of_year: n,
        declination: decl,
        equation_of_time: eot,
        local_solar_time: lst,
        hour_angle: ha,
        zenith,
        altitude: solar_altitude(zenith),
        azimuth: solar_azimuth(latitude, decl, ha),
    }
}
