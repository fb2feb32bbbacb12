//! The `events` subcommand: extreme-weather years for one scope.

use anyhow::{Context, Result};
use iris_analytics::{extreme_events, WeatherEvent};
use iris_catalog::{Metric, Region};
use iris_query::for_region;
use iris_synth::generate;
use serde::Serialize;
use tracing::info;

use crate::cli::EventsArgs;
use crate::config::IrisConfig;
use crate::output::write_json;

#[derive(Serialize)]
struct EventsOutput {
    region: Region,
    metric: Metric,
    events: Vec<WeatherEvent>,
}

pub fn run(args: EventsArgs) -> Result<()> {
    let config = IrisConfig::load(&args.config)?;
    let dataset =
        generate(&config.generate_config(args.seed)).context("dataset generation failed")?;

    let scope = for_region(&dataset, args.region);
    let events = extreme_events(scope.records(), args.metric);
    info!(
        region = %args.region,
        metric = %args.metric,
        n_events = events.len(),
        "event detection complete"
    );

    write_json(
        &EventsOutput {
            region: args.region,
            metric: args.metric,
            events,
        },
        args.output.as_deref(),
    )
}
