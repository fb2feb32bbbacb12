//! Summary statistics over a table-row collection.

use iris_stats::{mean, round_to};
use serde::Serialize;

use crate::table::TableRow;

/// Inclusive year span of a row collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearSpan {
    pub start: i32,
    pub end: i32,
}

/// Collection-wide averages of the three headline metrics, at display
/// precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Averages {
    pub temperature_mean: f64,
    pub rainfall: f64,
    pub sunshine: f64,
}

/// One extreme row: where and when the extreme occurred, and its value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtremeEntry {
    pub year: i32,
    pub region: String,
    pub value: f64,
}

/// The four headline extremes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extremes {
    pub hottest_year: ExtremeEntry,
    pub coldest_year: ExtremeEntry,
    pub wettest_year: ExtremeEntry,
    pub driest_year: ExtremeEntry,
}

/// Summary statistics for a table-row collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStatistics {
    pub total_records: usize,
    pub date_range: YearSpan,
    pub regions: Vec<String>,
    pub averages: Averages,
    pub extremes: Extremes,
}

impl SummaryStatistics {
    /// The all-zero sentinel returned for an empty row collection.
    fn empty() -> Self {
        let zero = ExtremeEntry {
            year: 0,
            region: String::new(),
            value: 0.0,
        };
        Self {
            total_records: 0,
            date_range: YearSpan { start: 0, end: 0 },
            regions: Vec::new(),
            averages: Averages {
                temperature_mean: 0.0,
                rainfall: 0.0,
                sunshine: 0.0,
            },
            extremes: Extremes {
                hottest_year: zero.clone(),
                coldest_year: zero.clone(),
                wettest_year: zero.clone(),
                driest_year: zero,
            },
        }
    }
}

/// Computes summary statistics over `rows`.
///
/// Extremes use strict comparison in iteration order, so ties resolve to
/// the first-encountered row; test fixtures depend on that exact behavior.
/// Empty input yields the all-zero sentinel, never an error.
pub fn summarize(rows: &[TableRow]) -> SummaryStatistics {
    let Some(first) = rows.first() else {
        return SummaryStatistics::empty();
    };

    let mut date_range = YearSpan {
        start: first.year,
        end: first.year,
    };
    let mut regions: Vec<String> = Vec::new();
    let (mut hottest, mut coldest, mut wettest, mut driest) = (first, first, first, first);

    for row in rows {
        date_range.start = date_range.start.min(row.year);
        date_range.end = date_range.end.max(row.year);
        if !regions.iter().any(|name| name == row.region_name) {
            regions.push(row.region_name.to_string());
        }
        if row.temperature_mean > hottest.temperature_mean {
            hottest = row;
        }
        if row.temperature_mean < coldest.temperature_mean {
            coldest = row;
        }
        if row.rainfall > wettest.rainfall {
            wettest = row;
        }
        if row.rainfall < driest.rainfall {
            driest = row;
        }
    }

    let temps: Vec<f64> = rows.iter().map(|r| r.temperature_mean).collect();
    let rain: Vec<f64> = rows.iter().map(|r| r.rainfall).collect();
    let sun: Vec<f64> = rows.iter().map(|r| r.sunshine).collect();

    let entry = |row: &TableRow, value: f64| ExtremeEntry {
        year: row.year,
        region: row.region_name.to_string(),
        value,
    };

    SummaryStatistics {
        total_records: rows.len(),
        date_range,
        regions,
        averages: Averages {
            temperature_mean: round_to(mean(&temps), 1),
            rainfall: round_to(mean(&rain), 0),
            sunshine: round_to(mean(&sun), 0),
        },
        extremes: Extremes {
            hottest_year: entry(hottest, hottest.temperature_mean),
            coldest_year: entry(coldest, coldest.temperature_mean),
            wettest_year: entry(wettest, wettest.rainfall),
            driest_year: entry(driest, driest.rainfall),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iris_catalog::Region;

    fn row(region: Region, year: i32, temp: f64, rainfall: f64) -> TableRow {
        TableRow {
            id: format!("{region}-{year}"),
            year,
            region,
            region_name: region.name(),
            temperature_min: temp - 3.0,
            temperature_max: temp + 5.0,
            temperature_mean: temp,
            rainfall,
            rain_days: 170.0,
            sunshine: 1400.0,
            frost_days: 40.0,
        }
    }

    #[test]
    fn empty_input_yields_the_sentinel() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_records, 0);
        assert_eq!(summary.date_range, YearSpan { start: 0, end: 0 });
        assert!(summary.regions.is_empty());
        assert_eq!(summary.averages.temperature_mean, 0.0);
        assert_eq!(summary.averages.rainfall, 0.0);
        assert_eq!(summary.averages.sunshine, 0.0);
        assert_eq!(summary.extremes.hottest_year.year, 0);
        assert_eq!(summary.extremes.hottest_year.region, "");
        assert_eq!(summary.extremes.driest_year.value, 0.0);
    }

    #[test]
    fn counts_span_and_distinct_regions() {
        let rows = vec![
            row(Region::Wales, 2018, 9.5, 1200.0),
            row(Region::Wales, 2019, 9.7, 1150.0),
            row(Region::Uk, 2019, 9.6, 900.0),
        ];
        let summary = summarize(&rows);
        assert_eq!(summary.total_records, 3);
        assert_eq!(summary.date_range, YearSpan { start: 2018, end: 2019 });
        assert_eq!(summary.regions, vec!["Wales", "United Kingdom"]);
    }

    #[test]
    fn extremes_pick_the_right_rows() {
        let rows = vec![
            row(Region::EnglandS, 2014, 11.2, 740.0),
            row(Region::ScotlandN, 2014, 6.9, 1250.0),
            row(Region::EastAnglia, 2015, 10.1, 590.0),
        ];
        let summary = summarize(&rows);
        assert_eq!(summary.extremes.hottest_year.region, "Southern England");
        assert_eq!(summary.extremes.hottest_year.value, 11.2);
        assert_eq!(summary.extremes.coldest_year.region, "Northern Scotland");
        assert_eq!(summary.extremes.wettest_year.region, "Northern Scotland");
        assert_eq!(summary.extremes.driest_year.region, "East Anglia");
        assert_eq!(summary.extremes.driest_year.value, 590.0);
    }

    #[test]
    fn ties_resolve_to_the_first_row() {
        let rows = vec![
            row(Region::EnglandN, 2014, 9.0, 850.0),
            row(Region::Midlands, 2015, 9.0, 850.0),
        ];
        let summary = summarize(&rows);
        assert_eq!(summary.extremes.hottest_year.region, "Northern England");
        assert_eq!(summary.extremes.coldest_year.region, "Northern England");
        assert_eq!(summary.extremes.wettest_year.region, "Northern England");
        assert_eq!(summary.extremes.driest_year.region, "Northern England");
    }

    #[test]
    fn averages_round_to_display_precision() {
        let rows = vec![
            row(Region::Uk, 2014, 9.11, 900.4),
            row(Region::Uk, 2015, 9.22, 901.4),
        ];
        let summary = summarize(&rows);
        assert_eq!(summary.averages.temperature_mean, 9.2);
        assert_eq!(summary.averages.rainfall, 901.0);
        assert_eq!(summary.averages.sunshine, 1400.0);
    }
}
