//! Runtime configuration, loadable from TOML.
//!
//! ```toml
//! horizon_depression_deg = 0.833
//!
//! [seasons.years]
//! 2025 = ["2025-03-20", "2025-06-21", "2025-09-22", "2025-12-21"]
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::angles::STANDARD_HORIZON_DEPRESSION;
use crate::ephemeris::ApproximateEphemeris;
use crate::error::{Error, Result};
use crate::season::SeasonCalendar;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolarCycleConfig {
    /// Degrees below the horizon at which the built-in ephemeris places
    /// sunrise and sunset.
    pub horizon_depression_deg: f64,
    pub seasons: SeasonCalendar,
}

impl Default for SolarCycleConfig {
    fn default() -> Self {
        Self {
            horizon_depression_deg: STANDARD_HORIZON_DEPRESSION,
            seasons: SeasonCalendar::default(),
        }
    }
}

impl SolarCycleConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        let depression = self.horizon_depression_deg;
        if !(depression > -90.0 && depression < 90.0) {
            return Err(Error::Config(format!(
                "horizon_depression_deg must lie in (-90, 90), got {depression}"
            )));
        }
        Ok(())
    }

    pub fn ephemeris(&self) -> ApproximateEphemeris {
        ApproximateEphemeris::new(self.horizon_depression_deg)
    }
}
