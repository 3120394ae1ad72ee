use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Crimecast annual crime-count analysis and forecasting.
#[derive(Parser)]
#[command(
    name = "crimecast",
    version,
    about = "ARIMA stationarity testing and forecasting for annual crime counts"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Long-format CSV (`region,category,year,count`) replacing the built-in table.
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Analyze and forecast a single series.
    Analyze(AnalyzeArgs),
    /// Fit every series and write the summary report.
    Summary(SummaryArgs),
    /// Compute the crime index of every region.
    Index(IndexArgs),
}

/// Arguments for the `analyze` subcommand.
#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Region (state) name.
    #[arg(short, long)]
    pub region: String,

    /// Crime category, e.g. MURDER.
    #[arg(long = "category", visible_alias = "crime")]
    pub category: String,

    /// Override the model order as `p,d,q`.
    #[arg(long)]
    pub order: Option<String>,

    /// Override the number of forecast years.
    #[arg(long)]
    pub horizon: Option<usize>,

    /// Override the analysis JSON path derived from `[output].analysis_dir`.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `summary` subcommand.
#[derive(clap::Args)]
pub struct SummaryArgs {
    /// Override the summary CSV path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `index` subcommand.
#[derive(clap::Args)]
pub struct IndexArgs {
    /// Override the base year from config.
    #[arg(long)]
    pub base_year: Option<i32>,

    /// Override the current year from config.
    #[arg(long)]
    pub current_year: Option<i32>,

    /// Override the index JSON path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
