//! Scalar and monthly extraction from a single record.

use iris_catalog::{Metric, Period};
use iris_synth::AnnualRecord;

/// The scalar for one metric and period of one record.
///
/// Metric and period are closed enums, so the lookup cannot fail; there is
/// no runtime "unknown key" path.
pub fn extract(record: &AnnualRecord, metric: Metric, period: Period) -> f64 {
    record.value(metric, period)
}

/// The twelve monthly values of one metric, January first.
pub fn monthly_values(record: &AnnualRecord, metric: Metric) -> [f64; 12] {
    *record.series(metric).monthly()
}
