//! Tracked weather metrics.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// One of the 7 tracked weather metrics.
///
/// The set is closed: every consumer matches exhaustively, so an
/// unrecognized metric is unrepresentable rather than a runtime lookup
/// failure.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    TemperatureMin,
    TemperatureMax,
    TemperatureMean,
    FrostDays,
    Rainfall,
    RainDays,
    Sunshine,
}

impl Metric {
    /// All metrics in catalog order.
    pub const ALL: [Metric; 7] = [
        Metric::TemperatureMin,
        Metric::TemperatureMax,
        Metric::TemperatureMean,
        Metric::FrostDays,
        Metric::Rainfall,
        Metric::RainDays,
        Metric::Sunshine,
    ];

    /// Stable machine-readable id (also the serialized form).
    pub fn id(self) -> &'static str {
        match self {
            Metric::TemperatureMin => "temperature_min",
            Metric::TemperatureMax => "temperature_max",
            Metric::TemperatureMean => "temperature_mean",
            Metric::FrostDays => "frost_days",
            Metric::Rainfall => "rainfall",
            Metric::RainDays => "rain_days",
            Metric::Sunshine => "sunshine",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Metric::TemperatureMin => "Min Temperature",
            Metric::TemperatureMax => "Max Temperature",
            Metric::TemperatureMean => "Mean Temperature",
            Metric::FrostDays => "Frost Days",
            Metric::Rainfall => "Rainfall",
            Metric::RainDays => "Rain Days",
            Metric::Sunshine => "Sunshine",
        }
    }

    /// Display unit.
    pub fn unit(self) -> &'static str {
        match self {
            Metric::TemperatureMin | Metric::TemperatureMax | Metric::TemperatureMean => "°C",
            Metric::FrostDays | Metric::RainDays => "days",
            Metric::Rainfall => "mm",
            Metric::Sunshine => "hours",
        }
    }

    /// Decimal places used when projecting annual values into table rows:
    /// 1 for temperatures, 0 for counts, rainfall, and sunshine.
    pub fn decimals(self) -> u32 {
        match self {
            Metric::TemperatureMin | Metric::TemperatureMax | Metric::TemperatureMean => 1,
            _ => 0,
        }
    }

    /// Whether this is one of the three temperature metrics.
    pub fn is_temperature(self) -> bool {
        matches!(
            self,
            Metric::TemperatureMin | Metric::TemperatureMax | Metric::TemperatureMean
        )
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Metric {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|m| m.id() == s)
            .ok_or_else(|| CatalogError::UnknownMetric {
                name: s.to_string(),
            })
    }
}
