//! Flat table projection of the dataset.

use iris_catalog::{Metric, Region};
use iris_stats::round_to;
use iris_synth::Dataset;
use serde::Serialize;

/// One table row: a record's annual values, rounded to each metric's
/// display precision (1 decimal for temperatures, whole numbers for
/// counts, rainfall, and sunshine).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub id: String,
    pub year: i32,
    pub region: Region,
    pub region_name: &'static str,
    pub temperature_min: f64,
    pub temperature_max: f64,
    pub temperature_mean: f64,
    pub rainfall: f64,
    pub rain_days: f64,
    pub sunshine: f64,
    pub frost_days: f64,
}

/// Projects every record into a [`TableRow`], preserving dataset order.
pub fn to_table_rows(dataset: &Dataset) -> Vec<TableRow> {
    dataset
        .iter()
        .map(|record| {
            let annual =
                |metric: Metric| round_to(record.series(metric).annual(), metric.decimals());
            TableRow {
                id: format!("{}-{}", record.region, record.year),
                year: record.year,
                region: record.region,
                region_name: record.region.name(),
                temperature_min: annual(Metric::TemperatureMin),
                temperature_max: annual(Metric::TemperatureMax),
                temperature_mean: annual(Metric::TemperatureMean),
                rainfall: annual(Metric::Rainfall),
                rain_days: annual(Metric::RainDays),
                sunshine: annual(Metric::Sunshine),
                frost_days: annual(Metric::FrostDays),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use iris_catalog::Region;
    use iris_synth::{AnnualRecord, MetricSeries};

    fn record(region: Region, year: i32) -> AnnualRecord {
        AnnualRecord {
            region,
            year,
            temperature_min: MetricSeries::from_monthly([3.14; 12]),
            temperature_max: MetricSeries::from_monthly([15.26; 12]),
            temperature_mean: MetricSeries::from_monthly([9.87; 12]),
            frost_days: MetricSeries::from_monthly([4.6; 12]),
            rainfall: MetricSeries::from_monthly([70.5; 12]),
            rain_days: MetricSeries::from_monthly([14.2; 12]),
            sunshine: MetricSeries::from_monthly([112.9; 12]),
        }
    }

    #[test]
    fn rows_carry_id_and_display_name() {
        let dataset = Dataset::new(vec![record(Region::ScotlandW, 2019)]);
        let rows = to_table_rows(&dataset);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "scotland_w-2019");
        assert_eq!(rows[0].region_name, "Western Scotland");
        assert_eq!(rows[0].year, 2019);
    }

    #[test]
    fn temperatures_round_to_one_decimal_and_counts_to_whole() {
        let dataset = Dataset::new(vec![record(Region::Uk, 2020)]);
        let row = &to_table_rows(&dataset)[0];
        assert_eq!(row.temperature_min, 3.1);
        assert_eq!(row.temperature_max, 15.3);
        assert_eq!(row.temperature_mean, 9.9);
        assert_eq!(row.frost_days, 5.0);
        assert_eq!(row.rainfall, 71.0);
        assert_eq!(row.rain_days, 14.0);
        assert_eq!(row.sunshine, 113.0);
    }
}
