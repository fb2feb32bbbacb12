//! Percentile-band detection of extreme-weather years.

use iris_catalog::Metric;
use iris_stats::nearest_rank;
use iris_synth::AnnualRecord;
use serde::Serialize;

/// Category of a detected extreme year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Heatwave,
    Freeze,
    Storm,
    Drought,
}

/// Event severity. The current detector only emits [`Severity::High`];
/// the lower bands are part of the published event shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// One detected extreme year in a metric series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherEvent {
    pub year: i32,
    pub kind: EventKind,
    pub label: String,
    pub severity: Severity,
}

/// Flags statistically extreme years in one scope's series (a single
/// region, or the national aggregate) for one metric.
///
/// Thresholds are the discrete nearest-rank percentiles of the series'
/// finite annual values — 2nd/98th for temperatures, 5th/95th for rainfall
/// — and are inclusive at both ends: a year sitting exactly on a threshold
/// is flagged. Temperature metrics yield heatwave/freeze, rainfall yields
/// storm/drought; the remaining metrics intentionally yield nothing (the
/// detector is metric-aware and narrow — widening it has never been
/// validated). Empty input returns an empty list.
pub fn extreme_events(series: &[AnnualRecord], metric: Metric) -> Vec<WeatherEvent> {
    let mut values: Vec<f64> = series
        .iter()
        .map(|r| r.series(metric).annual())
        .filter(|v| v.is_finite())
        .collect();
    if values.is_empty() {
        return Vec::new();
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let p02 = nearest_rank(&values, 0.02);
    let p05 = nearest_rank(&values, 0.05);
    let p95 = nearest_rank(&values, 0.95);
    let p98 = nearest_rank(&values, 0.98);

    let mut events = Vec::new();
    for record in series {
        let value = record.series(metric).annual();
        if !value.is_finite() {
            continue;
        }
        if metric.is_temperature() {
            if value >= p98 {
                events.push(WeatherEvent {
                    year: record.year,
                    kind: EventKind::Heatwave,
                    label: format!("Heatwave of {}", record.year),
                    severity: Severity::High,
                });
            } else if value <= p02 {
                events.push(WeatherEvent {
                    year: record.year,
                    kind: EventKind::Freeze,
                    label: format!("Deep Freeze of {}", record.year),
                    severity: Severity::High,
                });
            }
        } else if metric == Metric::Rainfall {
            if value >= p95 {
                events.push(WeatherEvent {
                    year: record.year,
                    kind: EventKind::Storm,
                    label: format!("Major Floods/Storms {}", record.year),
                    severity: Severity::High,
                });
            } else if value <= p05 {
                events.push(WeatherEvent {
                    year: record.year,
                    kind: EventKind::Drought,
                    label: format!("Drought of {}", record.year),
                    severity: Severity::High,
                });
            }
        }
    }
    events
}
