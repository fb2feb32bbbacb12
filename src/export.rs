//! The `export` subcommand: generate the dataset and write it as JSON.

use anyhow::{Context, Result};
use iris_synth::generate;
use tracing::info;

use crate::cli::ExportArgs;
use crate::config::IrisConfig;
use crate::output::write_json;

pub fn run(args: ExportArgs) -> Result<()> {
    let config = IrisConfig::load(&args.config)?;
    let gen_config = config.generate_config(args.seed);

    let dataset = generate(&gen_config).context("dataset generation failed")?;
    info!(
        n_records = dataset.len(),
        seed = gen_config.seed(),
        "dataset generated"
    );

    write_json(&dataset, args.output.as_deref())
}
