//! Trend classification and descriptive statistics for a metric series.

use iris_catalog::{Metric, Region};
use iris_stats::{mean, median, sd};
use iris_synth::Dataset;
use serde::Serialize;

/// Direction of a series' first-to-last change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

/// Trend classification: direction plus absolute percentage change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trend {
    pub direction: TrendDirection,
    pub percentage: f64,
}

impl Trend {
    fn stable() -> Self {
        Self {
            direction: TrendDirection::Stable,
            percentage: 0.0,
        }
    }
}

/// Classifies the relative change from the first to the last value.
///
/// Changes under 2% in magnitude read as stable with 0%, as do series with
/// fewer than two points or a non-finite change ratio (zero baseline).
pub fn trend(values: &[f64]) -> Trend {
    if values.len() < 2 {
        return Trend::stable();
    }
    let first = values[0];
    let last = values[values.len() - 1];
    let change = (last - first) / first * 100.0;
    if !change.is_finite() || change.abs() < 2.0 {
        return Trend::stable();
    }
    Trend {
        direction: if change > 0.0 {
            TrendDirection::Increasing
        } else {
            TrendDirection::Decreasing
        },
        percentage: change.abs(),
    }
}

/// Descriptive statistics of a value series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricStatistics {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
}

/// Computes descriptive statistics; `None` on empty input.
pub fn metric_statistics(values: &[f64]) -> Option<MetricStatistics> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    Some(MetricStatistics {
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        mean: mean(values),
        median: median(&sorted),
        std_dev: sd(values),
    })
}

/// Descriptive statistics plus trend for one region's annual series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionalStatistics {
    pub region: Region,
    pub metric: Metric,
    pub statistics: MetricStatistics,
    pub trend: Trend,
}

/// Statistics and trend over one region's annual values, in dataset year
/// order. `None` when the region has no records.
pub fn regional_statistics(
    dataset: &Dataset,
    region: Region,
    metric: Metric,
) -> Option<RegionalStatistics> {
    let values: Vec<f64> = dataset
        .iter()
        .filter(|r| r.region == region)
        .map(|r| r.series(metric).annual())
        .collect();
    let statistics = metric_statistics(&values)?;
    Some(RegionalStatistics {
        region,
        metric,
        statistics,
        trend: trend(&values),
    })
}
