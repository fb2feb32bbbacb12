//! The `map` subcommand: one ranked, colored map frame.

use anyhow::{Context, Result};
use iris_analytics::{map_data, metric_range, MetricRange, RegionMapDatum};
use iris_catalog::Metric;
use iris_synth::generate;
use serde::Serialize;
use tracing::info;

use crate::cli::MapArgs;
use crate::config::IrisConfig;
use crate::output::write_json;

#[derive(Serialize)]
struct MapOutput {
    year: i32,
    metric: Metric,
    range: MetricRange,
    regions: Vec<RegionMapDatum>,
}

pub fn run(args: MapArgs) -> Result<()> {
    let config = IrisConfig::load(&args.config)?;
    let dataset =
        generate(&config.generate_config(args.seed)).context("dataset generation failed")?;

    let regions = map_data(&dataset, args.year, args.metric);
    let range = metric_range(&dataset, args.year, args.metric);
    info!(
        year = args.year,
        metric = %args.metric,
        n_regions = regions.len(),
        "map frame computed"
    );

    write_json(
        &MapOutput {
            year: args.year,
            metric: args.metric,
            range,
            regions,
        },
        args.output.as_deref(),
    )
}
