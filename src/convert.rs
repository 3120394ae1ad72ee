//! Pure conversion functions: TOML config structs -> crate API config types.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::info;

use crimecast_analysis::AnalysisConfig;
use crimecast_arima::ArimaSpec;
use crimecast_dataset::{CrimeTable, SeriesKey, read_csv};

use crate::config::{IndexToml, ModelToml, OutputToml};

/// Parses a model order written as `p,d,q`.
pub fn parse_order(s: &str) -> Result<[usize; 3]> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        bail!("order must be three comma-separated integers p,d,q, got {s:?}");
    }
    let mut order = [0; 3];
    for (slot, part) in order.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .with_context(|| format!("invalid order component {part:?} in {s:?}"))?;
    }
    Ok(order)
}

/// Builds an [`AnalysisConfig`] from the TOML model configuration.
pub fn build_analysis_config(model: &ModelToml) -> Result<AnalysisConfig> {
    let [p, d, q] = model.order;
    let cfg = AnalysisConfig::default()
        .with_spec(ArimaSpec::new(p, d, q))
        .with_horizon(model.horizon)
        .with_ma_window(model.ma_window)
        .with_max_lag(model.max_lag);
    cfg.validate()?;
    Ok(cfg)
}

/// Checks the crime index years and returns them as `(base, current)`.
pub fn index_years(index: &IndexToml) -> Result<(i32, i32)> {
    if index.base_year > index.current_year {
        bail!(
            "index base year {} is after current year {}",
            index.base_year,
            index.current_year
        );
    }
    Ok((index.base_year, index.current_year))
}

/// Default JSON path for one series: `{region}_{category}_analysis.json`
/// under `[output].analysis_dir`, spaces in names replaced by `_`.
pub fn analysis_json_path(output: &OutputToml, key: &SeriesKey) -> PathBuf {
    let name = format!("{}_{}_analysis.json", key.region, key.category).replace(' ', "_");
    output.analysis_dir.join(name)
}

/// Reads the CSV at `path`, or returns the built-in table when `None`.
pub fn load_table(path: Option<&Path>) -> Result<CrimeTable> {
    let table = match path {
        Some(path) => {
            info!(path = %path.display(), "reading crime table");
            read_csv(path).with_context(|| format!("failed to read CSV: {}", path.display()))?
        }
        None => {
            info!("using built-in crime table");
            CrimeTable::builtin().context("failed to build built-in table")?
        }
    };
    info!(n_series = table.len(), "crime table loaded");
    Ok(table)
}
