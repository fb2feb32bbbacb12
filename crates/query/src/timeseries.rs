//! Time-series and heatmap projections for the trend charts.

use std::collections::BTreeMap;

use iris_catalog::{Metric, Month, Period, Region};
use iris_synth::Dataset;
use serde::Serialize;

/// One point of an annual time series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeSeriesPoint {
    pub year: i32,
    pub value: f64,
}

/// One cell of a year × month heatmap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeatmapPoint {
    pub year: i32,
    pub month: Month,
    pub value: f64,
}

/// Projects every record to a (year, value) point for one metric and
/// period, in dataset order. Callers chart a single region by filtering
/// first.
pub fn time_series(dataset: &Dataset, metric: Metric, period: Period) -> Vec<TimeSeriesPoint> {
    dataset
        .iter()
        .map(|record| TimeSeriesPoint {
            year: record.year,
            value: record.value(metric, period),
        })
        .collect()
}

/// One time series per requested region, keyed by region.
pub fn multi_region_time_series(
    dataset: &Dataset,
    metric: Metric,
    regions: &[Region],
    period: Period,
) -> BTreeMap<Region, Vec<TimeSeriesPoint>> {
    regions
        .iter()
        .map(|&region| {
            let series = dataset
                .iter()
                .filter(|r| r.region == region)
                .map(|r| TimeSeriesPoint {
                    year: r.year,
                    value: r.value(metric, period),
                })
                .collect();
            (region, series)
        })
        .collect()
}

/// Year × month grid of one metric for one region, months in calendar
/// order within each year.
pub fn heatmap(dataset: &Dataset, metric: Metric, region: Region) -> Vec<HeatmapPoint> {
    let mut points = Vec::new();
    for record in dataset.iter().filter(|r| r.region == region) {
        for month in Month::ALL {
            points.push(HeatmapPoint {
                year: record.year,
                month,
                value: record.value(metric, Period::Month(month)),
            });
        }
    }
    points
}
