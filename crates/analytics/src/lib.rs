//! # iris-analytics
//!
//! Derived analytics over the generated weather dataset:
//!
//! - choropleth map support: per-region ranking and year-relative color
//!   scaling for one (year, metric) frame;
//! - extreme-event detection: percentile-band tagging of statistically
//!   extreme years in a metric series;
//! - trend classification, descriptive statistics, and climate-stripe
//!   coloring for the side analysis panel.
//!
//! Everything here recomputes on query and persists nothing. All functions
//! are total: queries that match no data return empty collections, zeroed
//! ranges, or `None`.

mod color;
mod events;
mod map;
mod stripes;
mod trend;

pub use color::{rainfall_band_color, ramp, temperature_band_color, Rgb};
pub use events::{extreme_events, EventKind, Severity, WeatherEvent};
pub use map::{map_data, metric_range, MetricRange, RegionMapDatum};
pub use stripes::stripe_colors;
pub use trend::{
    metric_statistics, regional_statistics, trend, MetricStatistics, RegionalStatistics, Trend,
    TrendDirection,
};
