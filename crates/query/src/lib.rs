//! # iris-query
//!
//! Pure, synchronous extraction and projection over the immutable weather
//! dataset: region and year-range filters, flat table rows, summary
//! statistics, and the time-series/heatmap projections behind the trend
//! charts.
//!
//! Every function here is total over its input domain. "No data" is an
//! empty collection or the all-zero summary sentinel, never an error.

mod extract;
mod filter;
mod summary;
mod table;
mod timeseries;

pub use extract::{extract, monthly_values};
pub use filter::{filter_by_regions, filter_by_year_range, for_region, for_year};
pub use summary::{summarize, Averages, ExtremeEntry, Extremes, SummaryStatistics, YearSpan};
pub use table::{to_table_rows, TableRow};
pub use timeseries::{
    heatmap, multi_region_time_series, time_series, HeatmapPoint, TimeSeriesPoint,
};
