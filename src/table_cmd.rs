//! The `table` subcommand: filtered table rows plus summary statistics.

use anyhow::{Context, Result};
use iris_query::{
    filter_by_regions, filter_by_year_range, summarize, to_table_rows, SummaryStatistics,
    TableRow,
};
use iris_synth::generate;
use serde::Serialize;
use tracing::info;

use crate::cli::TableArgs;
use crate::config::IrisConfig;
use crate::output::write_json;

#[derive(Serialize)]
struct TableOutput {
    rows: Vec<TableRow>,
    summary: SummaryStatistics,
}

pub fn run(args: TableArgs) -> Result<()> {
    let config = IrisConfig::load(&args.config)?;
    let dataset =
        generate(&config.generate_config(args.seed)).context("dataset generation failed")?;

    let mut view = filter_by_regions(&dataset, &args.regions);
    if args.from.is_some() || args.to.is_some() {
        let start = args.from.unwrap_or(i32::MIN);
        let end = args.to.unwrap_or(i32::MAX);
        view = filter_by_year_range(&view, start, end);
    }

    let rows = to_table_rows(&view);
    let summary = summarize(&rows);
    info!(n_rows = rows.len(), "table projection complete");

    write_json(
        &TableOutput { rows, summary },
        args.output.as_deref(),
    )
}
