//! Time-related types for ESPN Fantasy Football seasons and weeks.

use crate::error::{EspnError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Month in which a new NFL season is considered to have started.
const SEASON_ROLLOVER_MONTH: u32 = 7;

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// The football season in progress on `date`.
    ///
    /// Before July the previous year's season is still the latest one, so
    /// `2025-03-01` maps to the 2024 season.
    pub fn for_date(date: NaiveDate) -> Self {
        let year = date.year() as u16;
        if date.month() < SEASON_ROLLOVER_MONTH {
            Self(year - 1)
        } else {
            Self(year)
        }
    }

    /// The football season in progress today (local time).
    pub fn current() -> Self {
        Self::for_date(chrono::Local::now().date_naive())
    }

    /// ESPN serves seasons before 2018 from the league history endpoint.
    pub fn is_historical(&self) -> bool {
        self.0 < 2018
    }
}

impl Default for Season {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Type-safe wrapper for Week numbers (ESPN "scoring periods").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Validate a caller-supplied week against the season bounds `[1, max]`.
    pub fn checked(week: i64, max: u16) -> Result<Self> {
        if week < 1 || week > i64::from(max) {
            return Err(EspnError::InvalidWeek { week, max });
        }
        Ok(Self(week as u16))
    }
}

impl Default for Week {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}
