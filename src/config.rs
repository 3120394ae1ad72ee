use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Crimecast configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CrimecastConfig {
    /// Input data settings.
    #[serde(default)]
    pub data: DataToml,

    /// Model order and forecast settings.
    #[serde(default)]
    pub model: ModelToml,

    /// Crime index settings.
    #[serde(default)]
    pub index: IndexToml,

    /// Report output settings.
    #[serde(default)]
    pub output: OutputToml,
}

impl CrimecastConfig {
    /// Reads and parses a TOML file; `None` yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataToml {
    /// Long-format CSV; the built-in table is used when absent.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelToml {
    #[serde(default = "default_order")]
    pub order: [usize; 3],
    #[serde(default = "default_horizon")]
    pub horizon: usize,
    #[serde(default = "default_ma_window")]
    pub ma_window: usize,
    #[serde(default = "default_max_lag")]
    pub max_lag: usize,
}

impl Default for ModelToml {
    fn default() -> Self {
        Self {
            order: default_order(),
            horizon: default_horizon(),
            ma_window: default_ma_window(),
            max_lag: default_max_lag(),
        }
    }
}

fn default_order() -> [usize; 3] {
    [1, 1, 1]
}
fn default_horizon() -> usize {
    3
}
fn default_ma_window() -> usize {
    3
}
fn default_max_lag() -> usize {
    10
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndexToml {
    #[serde(default = "default_base_year")]
    pub base_year: i32,
    #[serde(default = "default_current_year")]
    pub current_year: i32,
}

impl Default for IndexToml {
    fn default() -> Self {
        Self {
            base_year: default_base_year(),
            current_year: default_current_year(),
        }
    }
}

fn default_base_year() -> i32 {
    2001
}
fn default_current_year() -> i32 {
    2012
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_summary_csv")]
    pub summary_csv: PathBuf,
    /// Directory receiving `{region}_{category}_analysis.json` files.
    #[serde(default = "default_analysis_dir")]
    pub analysis_dir: PathBuf,
    #[serde(default = "default_index_json")]
    pub index_json: PathBuf,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            summary_csv: default_summary_csv(),
            analysis_dir: default_analysis_dir(),
            index_json: default_index_json(),
        }
    }
}

fn default_summary_csv() -> PathBuf {
    PathBuf::from("Crime_Analysis_Summary_Report.csv")
}
fn default_analysis_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_index_json() -> PathBuf {
    PathBuf::from("Crime_Index_Analysis.json")
}
