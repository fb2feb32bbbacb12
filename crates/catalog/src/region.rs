//! UK reporting regions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// One of the 14 fixed UK reporting regions: 13 sub-national areas plus the
/// aggregate [`Region::Uk`] entry.
///
/// The catalog is closed and immutable. [`Region::ALL`] fixes the canonical
/// iteration order used everywhere a deterministic region order matters
/// (dataset generation, map output).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    EnglandN,
    EnglandS,
    EnglandENe,
    EnglandCentral,
    EnglandSwSWales,
    Midlands,
    EastAnglia,
    ScotlandN,
    ScotlandE,
    ScotlandW,
    WalesN,
    Wales,
    NorthernIreland,
    Uk,
}

impl Region {
    /// All regions in canonical catalog order, ending with the UK aggregate.
    pub const ALL: [Region; 14] = [
        Region::EnglandN,
        Region::EnglandS,
        Region::EnglandENe,
        Region::EnglandCentral,
        Region::EnglandSwSWales,
        Region::Midlands,
        Region::EastAnglia,
        Region::ScotlandN,
        Region::ScotlandE,
        Region::ScotlandW,
        Region::WalesN,
        Region::Wales,
        Region::NorthernIreland,
        Region::Uk,
    ];

    /// Stable machine-readable id (also the serialized form).
    pub fn id(self) -> &'static str {
        match self {
            Region::EnglandN => "england_n",
            Region::EnglandS => "england_s",
            Region::EnglandENe => "england_e_ne",
            Region::EnglandCentral => "england_central",
            Region::EnglandSwSWales => "england_sw_s_wales",
            Region::Midlands => "midlands",
            Region::EastAnglia => "east_anglia",
            Region::ScotlandN => "scotland_n",
            Region::ScotlandE => "scotland_e",
            Region::ScotlandW => "scotland_w",
            Region::WalesN => "wales_n",
            Region::Wales => "wales",
            Region::NorthernIreland => "northern_ireland",
            Region::Uk => "uk",
        }
    }

    /// Full display name.
    pub fn name(self) -> &'static str {
        match self {
            Region::EnglandN => "Northern England",
            Region::EnglandS => "Southern England",
            Region::EnglandENe => "Eastern & North Eastern England",
            Region::EnglandCentral => "Central England",
            Region::EnglandSwSWales => "South West England & South Wales",
            Region::Midlands => "Midlands",
            Region::EastAnglia => "East Anglia",
            Region::ScotlandN => "Northern Scotland",
            Region::ScotlandE => "Eastern Scotland",
            Region::ScotlandW => "Western Scotland",
            Region::WalesN => "Northern Wales",
            Region::Wales => "Wales",
            Region::NorthernIreland => "Northern Ireland",
            Region::Uk => "United Kingdom",
        }
    }

    /// Abbreviated name for chart legends and table headers.
    pub fn short_name(self) -> &'static str {
        match self {
            Region::EnglandN => "England N",
            Region::EnglandS => "England S",
            Region::EnglandENe => "England E & NE",
            Region::EnglandCentral => "England Central",
            Region::EnglandSwSWales => "England SW & S Wales",
            Region::Midlands => "Midlands",
            Region::EastAnglia => "East Anglia",
            Region::ScotlandN => "Scotland N",
            Region::ScotlandE => "Scotland E",
            Region::ScotlandW => "Scotland W",
            Region::WalesN => "Wales N",
            Region::Wales => "Wales",
            Region::NorthernIreland => "N. Ireland",
            Region::Uk => "UK",
        }
    }

    /// Representative `(longitude, latitude)` point for map labelling.
    pub fn coordinates(self) -> (f64, f64) {
        match self {
            Region::EnglandN => (-2.0, 54.5),
            Region::EnglandS => (-1.0, 51.0),
            Region::EnglandENe => (0.5, 53.0),
            Region::EnglandCentral => (-1.5, 52.5),
            Region::EnglandSwSWales => (-3.5, 51.0),
            Region::Midlands => (-1.8, 52.8),
            Region::EastAnglia => (0.8, 52.5),
            Region::ScotlandN => (-4.0, 57.5),
            Region::ScotlandE => (-3.0, 56.5),
            Region::ScotlandW => (-5.0, 56.0),
            Region::WalesN => (-3.8, 53.0),
            Region::Wales => (-3.5, 52.0),
            Region::NorthernIreland => (-6.5, 54.7),
            Region::Uk => (-2.0, 54.0),
        }
    }

    /// Whether this is one of the three Scottish regions, which carry a
    /// higher frost-day floor in the synthetic profiles.
    pub fn is_scotland(self) -> bool {
        matches!(self, Region::ScotlandN | Region::ScotlandE | Region::ScotlandW)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Region {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|r| r.id() == s)
            .ok_or_else(|| CatalogError::UnknownRegion {
                name: s.to_string(),
            })
    }
}
