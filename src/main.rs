mod cli;
mod config;
mod events_cmd;
mod export;
mod logging;
mod map_cmd;
mod output;
mod table_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Export(args) => export::run(args),
        Command::Table(args) => table_cmd::run(args),
        Command::Map(args) => map_cmd::run(args),
        Command::Events(args) => events_cmd::run(args),
    }
}
