use std::path::PathBuf;

use clap::{Parser, Subcommand};
use iris_catalog::{Metric, Region};

/// Iris synthetic UK regional weather statistics engine.
#[derive(Parser)]
#[command(
    name = "iris",
    version,
    about = "Synthetic UK regional weather statistics engine"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate the synthetic dataset and write it as JSON.
    Export(ExportArgs),
    /// Project the dataset into table rows with summary statistics.
    Table(TableArgs),
    /// Rank and color every region for one (year, metric) map frame.
    Map(MapArgs),
    /// Detect extreme-weather years for one region and metric.
    Events(EventsArgs),
}

/// Arguments for the `export` subcommand.
#[derive(clap::Args)]
pub struct ExportArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "iris.toml")]
    pub config: PathBuf,

    /// Override RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u32>,

    /// Output path (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `table` subcommand.
#[derive(clap::Args)]
pub struct TableArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "iris.toml")]
    pub config: PathBuf,

    /// Override RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u32>,

    /// Restrict to these regions (comma separated; none = all).
    #[arg(short, long, value_delimiter = ',')]
    pub regions: Vec<Region>,

    /// First year of the range filter (inclusive).
    #[arg(long)]
    pub from: Option<i32>,

    /// Last year of the range filter (inclusive).
    #[arg(long)]
    pub to: Option<i32>,

    /// Output path (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `map` subcommand.
#[derive(clap::Args)]
pub struct MapArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "iris.toml")]
    pub config: PathBuf,

    /// Override RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u32>,

    /// Year of the map frame.
    #[arg(short, long)]
    pub year: i32,

    /// Metric to rank and color by.
    #[arg(short, long)]
    pub metric: Metric,

    /// Output path (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `events` subcommand.
#[derive(clap::Args)]
pub struct EventsArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "iris.toml")]
    pub config: PathBuf,

    /// Override RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u32>,

    /// Scope of the series: a single region or the `uk` aggregate.
    #[arg(short, long, default_value = "uk")]
    pub region: Region,

    /// Metric to scan for extremes.
    #[arg(short, long)]
    pub metric: Metric,

    /// Output path (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
