//! Season tracking against a table of yearly boundary dates.
//!
//! The default table uses fixed calendar dates (Mar 20, Jun 21, Sep 22,
//! Dec 21 at 00:00 UTC) as an approximation of the equinoxes and
//! solstices. Specific years can be overridden with exact dates.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::{Season, SeasonInfo};

/// Month and day on which a season begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SeasonBoundary {
    pub season: Season,
    pub month: u32,
    pub day: u32,
}

impl SeasonBoundary {
    pub const fn new(season: Season, month: u32, day: u32) -> Self {
        Self { season, month, day }
    }
}

pub const FIXED_BOUNDARIES: [SeasonBoundary; 4] = [
    SeasonBoundary::new(Season::Spring, 3, 20),
    SeasonBoundary::new(Season::Summer, 6, 21),
    SeasonBoundary::new(Season::Autumn, 9, 22),
    SeasonBoundary::new(Season::Winter, 12, 21),
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawSeasonCalendar")]
pub struct SeasonCalendar {
    boundaries: [SeasonBoundary; 4],
    years: BTreeMap<i32, [NaiveDate; 4]>,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawSeasonCalendar {
    boundaries: [SeasonBoundary; 4],
    years: BTreeMap<String, [NaiveDate; 4]>,
}

impl Default for RawSeasonCalendar {
    fn default() -> Self {
        Self {
            boundaries: FIXED_BOUNDARIES,
            years: BTreeMap::new(),
        }
    }
}

impl TryFrom<RawSeasonCalendar> for SeasonCalendar {
    type Error = Error;

    fn try_from(raw: RawSeasonCalendar) -> Result<Self> {
        let mut calendar = SeasonCalendar::with_boundaries(raw.boundaries)?;
        for (key, dates) in raw.years {
            let year = key
                .trim()
                .parse::<i32>()
                .map_err(|_| Error::Config(format!("season year key {key:?} is not a year")))?;
            calendar = calendar.with_year(year, dates)?;
        }
        Ok(calendar)
    }
}

impl Default for SeasonCalendar {
    fn default() -> Self {
        Self {
            boundaries: FIXED_BOUNDARIES,
            years: BTreeMap::new(),
        }
    }
}

/// Seasons must follow each other in cyclic order.
fn check_season_order(seasons: [Season; 4]) -> Result<()> {
    for pair in seasons.windows(2) {
        if pair[0].next() != pair[1] {
            return Err(Error::Config(format!(
                "season {} cannot follow {}",
                pair[1], pair[0]
            )));
        }
    }
    Ok(())
}

impl SeasonCalendar {
    /// A calendar using the same month/day boundaries every year.
    ///
    /// Boundaries must be listed chronologically, in cyclic season order,
    /// and be valid dates in both leap and common years.
    pub fn with_boundaries(boundaries: [SeasonBoundary; 4]) -> Result<Self> {
        check_season_order(boundaries.map(|b| b.season))?;
        for year in [2000, 2001] {
            let mut previous: Option<NaiveDate> = None;
            for b in &boundaries {
                let date = NaiveDate::from_ymd_opt(year, b.month, b.day).ok_or_else(|| {
                    Error::Config(format!(
                        "{} boundary {:02}-{:02} is not a valid date",
                        b.season, b.month, b.day
                    ))
                })?;
                if previous.is_some_and(|p| p >= date) {
                    return Err(Error::Config(format!(
                        "{} boundary {:02}-{:02} is not after the previous boundary",
                        b.season, b.month, b.day
                    )));
                }
                previous = Some(date);
            }
        }
        Ok(Self {
            boundaries,
            years: BTreeMap::new(),
        })
    }

    /// Overrides the boundary dates for one year. Dates must fall in `year`
    /// and be strictly increasing.
    pub fn with_year(mut self, year: i32, dates: [NaiveDate; 4]) -> Result<Self> {
        for (i, date) in dates.iter().enumerate() {
            if date.year() != year {
                return Err(Error::Config(format!(
                    "season boundary {date} is outside year {year}"
                )));
            }
            if i > 0 && dates[i - 1] >= *date {
                return Err(Error::Config(format!(
                    "season boundary {date} is not after {}",
                    dates[i - 1]
                )));
            }
        }
        self.years.insert(year, dates);
        Ok(self)
    }

    /// The four season starts of `year`, in chronological order.
    pub fn boundaries(&self, year: i32) -> Result<[(Season, DateTime<Utc>); 4]> {
        let mut out = [(Season::Spring, DateTime::<Utc>::MIN_UTC); 4];
        for (i, b) in self.boundaries.iter().enumerate() {
            let date = match self.years.get(&year) {
                Some(dates) => dates[i],
                None => NaiveDate::from_ymd_opt(year, b.month, b.day).ok_or_else(|| {
                    Error::Config(format!(
                        "{} boundary {:02}-{:02} does not exist in {year}",
                        b.season, b.month, b.day
                    ))
                })?,
            };
            out[i] = (b.season, Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)));
        }
        Ok(out)
    }

    /// Current season and how far `now` has progressed through it.
    ///
    /// Before the first boundary of its year, `now` belongs to the last
    /// season of the previous year.
    pub fn track(&self, now: DateTime<Utc>) -> Result<SeasonInfo> {
        let year = now.year();
        let current = self.boundaries(year)?;

        let ((season, start), next) = match current.iter().rposition(|(_, at)| *at <= now) {
            Some(i) if i + 1 < current.len() => (current[i], current[i + 1].1),
            Some(i) => (current[i], self.boundaries(year + 1)?[0].1),
            None => (self.boundaries(year - 1)?[3], current[0].1),
        };

        let days_since_start = (now - start).num_days();
        let total_season_days = (next - start).num_days();
        if total_season_days <= 0 {
            return Err(Error::degenerate(start, next));
        }

        Ok(SeasonInfo {
            current_season: season,
            season_start: start,
            days_since_start,
            total_season_days,
            season_progress: days_since_start as f64 / total_season_days as f64 * 100.0,
        })
    }
}

/// [`SeasonCalendar::track`] on the fixed default calendar.
pub fn track(now: DateTime<Utc>) -> Result<SeasonInfo> {
    SeasonCalendar::default().track(now)
}
