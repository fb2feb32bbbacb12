//! Per-region ranking and coloring for one map frame.

use std::collections::BTreeMap;

use iris_catalog::{Metric, Region};
use iris_stats::round_to;
use iris_synth::Dataset;
use serde::Serialize;

use crate::color::ramp;

/// Map datum for one region in one (year, metric) frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionMapDatum {
    pub region: Region,
    pub region_name: String,
    /// Annual value at display precision (1 decimal).
    pub value: f64,
    /// Hex color on the metric's ramp, scaled to this year's value range.
    pub color: String,
    /// 1-based rank, 1 = highest value.
    pub rank: usize,
}

/// Observed value range of one (year, metric) frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricRange {
    pub min: f64,
    pub max: f64,
}

/// Ranks and colors every region that has data for `year`.
///
/// The color domain is exactly [observed min, observed max] **of that
/// year**, not a global range: contrast is maximized per frame at the cost
/// of cross-year color comparability. That trade-off is deliberate and
/// relied upon by the map legend, so it must not be "fixed" to a global
/// domain. A degenerate domain (all regions equal) maps to the ramp
/// midpoint. Ranking is a stable descending sort, so ties keep dataset
/// order; output order is dataset order, not rank order.
///
/// A year with no records yields an empty vector.
pub fn map_data(dataset: &Dataset, year: i32, metric: Metric) -> Vec<RegionMapDatum> {
    let values: Vec<(Region, f64)> = dataset
        .iter()
        .filter(|r| r.year == year)
        .map(|r| (r.region, r.series(metric).annual()))
        .collect();
    if values.is_empty() {
        return Vec::new();
    }

    let min = values.iter().map(|(_, v)| *v).fold(f64::INFINITY, f64::min);
    let max = values
        .iter()
        .map(|(_, v)| *v)
        .fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    let (low, high) = ramp(metric);

    let mut sorted = values.clone();
    sorted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    let ranks: BTreeMap<Region, usize> = sorted
        .iter()
        .enumerate()
        .map(|(i, (region, _))| (*region, i + 1))
        .collect();

    values
        .into_iter()
        .map(|(region, value)| {
            let t = if span == 0.0 { 0.5 } else { (value - min) / span };
            RegionMapDatum {
                region,
                region_name: region.name().to_string(),
                value: round_to(value, 1),
                color: low.lerp(high, t).to_hex(),
                rank: ranks[&region],
            }
        })
        .collect()
}

/// Observed annual min/max for one (year, metric) frame; zeroes when no
/// records match.
pub fn metric_range(dataset: &Dataset, year: i32, metric: Metric) -> MetricRange {
    let mut values = dataset
        .iter()
        .filter(|r| r.year == year)
        .map(|r| r.series(metric).annual())
        .peekable();
    if values.peek().is_none() {
        return MetricRange { min: 0.0, max: 0.0 };
    }
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    MetricRange { min, max }
}
