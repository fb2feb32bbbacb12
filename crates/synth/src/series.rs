//! Metric series and annual record model types.

use iris_catalog::{Metric, Month, Period, Region, Season};
use serde::Serialize;

/// Monthly, seasonal, and annual values of one metric for one (region,
/// year) record.
///
/// Seasonal slots are the unweighted means of their three constituent
/// months and the annual slot is the unweighted mean of all twelve months;
/// both are derived at construction time and never generated directly, so
/// the only constructor is [`MetricSeries::from_monthly`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSeries {
    monthly: [f64; 12],
    seasonal: [f64; 4],
    annual: f64,
}

impl MetricSeries {
    /// Builds a series from twelve monthly values (January first),
    /// deriving the seasonal and annual aggregates.
    pub fn from_monthly(monthly: [f64; 12]) -> Self {
        let mut seasonal = [0.0; 4];
        for season in Season::ALL {
            let sum: f64 = season.months().iter().map(|m| monthly[m.index()]).sum();
            seasonal[season.index()] = sum / 3.0;
        }
        let annual = monthly.iter().sum::<f64>() / 12.0;
        Self {
            monthly,
            seasonal,
            annual,
        }
    }

    /// Value for a single month.
    pub fn month(&self, month: Month) -> f64 {
        self.monthly[month.index()]
    }

    /// Mean over a season's three months.
    pub fn season(&self, season: Season) -> f64 {
        self.seasonal[season.index()]
    }

    /// Mean over all twelve months.
    pub fn annual(&self) -> f64 {
        self.annual
    }

    /// Scalar for any period selector.
    pub fn value(&self, period: Period) -> f64 {
        match period {
            Period::Month(m) => self.month(m),
            Period::Season(s) => self.season(s),
            Period::Annual => self.annual,
        }
    }

    /// All twelve monthly values, January first.
    pub fn monthly(&self) -> &[f64; 12] {
        &self.monthly
    }
}

/// One synthetic weather record, keyed by (region, year), holding one
/// series per tracked metric. Created once during generation and immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualRecord {
    pub region: Region,
    pub year: i32,
    pub temperature_min: MetricSeries,
    pub temperature_max: MetricSeries,
    pub temperature_mean: MetricSeries,
    pub frost_days: MetricSeries,
    pub rainfall: MetricSeries,
    pub rain_days: MetricSeries,
    pub sunshine: MetricSeries,
}

impl AnnualRecord {
    /// The series for one metric. Exhaustive over the closed metric set,
    /// so an unrecognized metric is a compile-time impossibility.
    pub fn series(&self, metric: Metric) -> &MetricSeries {
        match metric {
            Metric::TemperatureMin => &self.temperature_min,
            Metric::TemperatureMax => &self.temperature_max,
            Metric::TemperatureMean => &self.temperature_mean,
            Metric::FrostDays => &self.frost_days,
            Metric::Rainfall => &self.rainfall,
            Metric::RainDays => &self.rain_days,
            Metric::Sunshine => &self.sunshine,
        }
    }

    /// Scalar for one metric and period selector.
    pub fn value(&self, metric: Metric, period: Period) -> f64 {
        self.series(metric).value(period)
    }
}
