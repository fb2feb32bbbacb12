//! Region and year filters producing derived dataset views.

use iris_catalog::Region;
use iris_synth::Dataset;

/// The records whose region is in `regions`, in source order.
///
/// An empty selection means "no restriction" and returns the whole dataset
/// — the UI's region picker treats nothing-selected as everything, and
/// this layer follows that policy rather than returning an empty view.
pub fn filter_by_regions(dataset: &Dataset, regions: &[Region]) -> Dataset {
    if regions.is_empty() {
        return dataset.clone();
    }
    Dataset::new(
        dataset
            .iter()
            .filter(|r| regions.contains(&r.region))
            .cloned()
            .collect(),
    )
}

/// The records with `start <= year <= end`, in source order.
pub fn filter_by_year_range(dataset: &Dataset, start: i32, end: i32) -> Dataset {
    Dataset::new(
        dataset
            .iter()
            .filter(|r| r.year >= start && r.year <= end)
            .cloned()
            .collect(),
    )
}

/// All records for one region.
pub fn for_region(dataset: &Dataset, region: Region) -> Dataset {
    Dataset::new(
        dataset
            .iter()
            .filter(|r| r.region == region)
            .cloned()
            .collect(),
    )
}

/// All records for one year.
pub fn for_year(dataset: &Dataset, year: i32) -> Dataset {
    Dataset::new(dataset.iter().filter(|r| r.year == year).cloned().collect())
}
