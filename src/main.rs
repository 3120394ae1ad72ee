mod analyze_cmd;
mod cli;
mod config;
mod convert;
mod index_cmd;
mod logging;
mod summary_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::CrimecastConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = CrimecastConfig::load(cli.config.as_deref())?;
    if let Some(data) = cli.data {
        config.data.path = Some(data);
    }

    match cli.command {
        Command::Analyze(args) => analyze_cmd::run(args, &config),
        Command::Summary(args) => summary_cmd::run(args, &config),
        Command::Index(args) => index_cmd::run(args, &config),
    }
}
