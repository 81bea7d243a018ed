pub mod angles;
pub mod config;
pub mod ephemeris;
pub mod error;
pub mod events;
pub mod iso8601;
pub mod period;
pub mod season;
pub mod sky;
pub mod snapshot;
pub mod types;

pub use angles::{
    deg_to_rad, equation_of_time, horizon_crossing, hour_angle, intermediate_angle_b,
    normalize_angle, rad_to_deg, solar_altitude, solar_azimuth, solar_declination,
    solar_position, solar_zenith_angle, utc_lst_correction, HorizonCrossing, SolarPosition,
    DEGREES_PER_HOUR, EARTH_AXIAL_TILT, STANDARD_HORIZON_DEPRESSION,
};

pub use config::SolarCycleConfig;
pub use ephemeris::{ApproximateEphemeris, Ephemeris};
pub use error::{Error, Result};
pub use events::derive;
pub use period::{classify, current_period, resolve_period, ActiveCycle};
pub use season::{track, SeasonBoundary, SeasonCalendar, FIXED_BOUNDARIES};
pub use sky::position;
pub use snapshot::{SnapshotEvents, SolarCycle, SunSnapshot};

pub use types::{
    Coordinate, DayKind, DayLight, Period, PeriodProgress, Season, SeasonInfo, SkyPosition,
    SolarDay, SolarEvents,
};
