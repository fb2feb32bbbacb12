//! Months, seasons, and the period selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Calendar month.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// All months, January first.
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Stable machine-readable id.
    pub fn id(self) -> &'static str {
        match self {
            Month::Jan => "jan",
            Month::Feb => "feb",
            Month::Mar => "mar",
            Month::Apr => "apr",
            Month::May => "may",
            Month::Jun => "jun",
            Month::Jul => "jul",
            Month::Aug => "aug",
            Month::Sep => "sep",
            Month::Oct => "oct",
            Month::Nov => "nov",
            Month::Dec => "dec",
        }
    }

    /// Full month name.
    pub fn name(self) -> &'static str {
        match self {
            Month::Jan => "January",
            Month::Feb => "February",
            Month::Mar => "March",
            Month::Apr => "April",
            Month::May => "May",
            Month::Jun => "June",
            Month::Jul => "July",
            Month::Aug => "August",
            Month::Sep => "September",
            Month::Oct => "October",
            Month::Nov => "November",
            Month::Dec => "December",
        }
    }

    /// 0-based index into a 12-slot monthly array (Jan = 0).
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Meteorological season. Winter spans December through February of the
/// same record (no cross-year stitching).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    /// All seasons, winter first.
    pub const ALL: [Season; 4] = [Season::Winter, Season::Spring, Season::Summer, Season::Autumn];

    /// Stable machine-readable id.
    pub fn id(self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
        }
    }

    /// The three constituent months.
    pub fn months(self) -> [Month; 3] {
        match self {
            Season::Winter => [Month::Dec, Month::Jan, Month::Feb],
            Season::Spring => [Month::Mar, Month::Apr, Month::May],
            Season::Summer => [Month::Jun, Month::Jul, Month::Aug],
            Season::Autumn => [Month::Sep, Month::Oct, Month::Nov],
        }
    }

    /// 0-based index into a 4-slot seasonal array (winter = 0).
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Selector for one scalar slot of a metric series: a single month, a
/// season, or the annual aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Month(Month),
    Season(Season),
    Annual,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Month(m) => f.write_str(m.id()),
            Period::Season(s) => f.write_str(s.id()),
            Period::Annual => f.write_str("annual"),
        }
    }
}

impl FromStr for Period {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "annual" {
            return Ok(Period::Annual);
        }
        if let Some(m) = Month::ALL.into_iter().find(|m| m.id() == s) {
            return Ok(Period::Month(m));
        }
        if let Some(season) = Season::ALL.into_iter().find(|x| x.id() == s) {
            return Ok(Period::Season(season));
        }
        Err(CatalogError::UnknownPeriod {
            name: s.to_string(),
        })
    }
}
