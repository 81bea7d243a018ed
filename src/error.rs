//! Error type shared by every solar-cycle operation.

use chrono::{DateTime, NaiveDate, Utc};

use crate::types::Coordinate;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The ephemeris cannot produce rise/set instants for this place and date.
    #[error("ephemeris unavailable for {coordinate} on {date}: {reason}")]
    EphemerisUnavailable {
        coordinate: Coordinate,
        date: NaiveDate,
        reason: String,
    },

    /// Two boundary instants coincide or are out of order.
    #[error("degenerate interval: start {start} is not before end {end}")]
    DegenerateInterval {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn degenerate(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self::DegenerateInterval { start, end }
    }
}
