//! Index command: crime index and safety label per region.

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use crimecast_analysis::{crime_indices, to_json};

use crate::cli::IndexArgs;
use crate::config::{CrimecastConfig, IndexToml};
use crate::convert;

/// Run the crime index computation.
pub fn run(args: IndexArgs, config: &CrimecastConfig) -> Result<()> {
    let _cmd = info_span!("index").entered();

    let (base_year, current_year) = convert::index_years(&IndexToml {
        base_year: args.base_year.unwrap_or(config.index.base_year),
        current_year: args.current_year.unwrap_or(config.index.current_year),
    })?;
    let table = convert::load_table(config.data.path.as_deref())?;

    let indices = crime_indices(&table, base_year, current_year);
    for idx in &indices {
        match (idx.index, &idx.status) {
            (Some(index), Some(status)) => info!(
                region = %idx.region,
                index,
                status = %status,
                categories = idx.categories_used,
                "crime index"
            ),
            _ => warn!(
                region = %idx.region,
                base_year,
                current_year,
                "no category with data for both years"
            ),
        }
    }

    let path = args
        .output
        .unwrap_or_else(|| config.output.index_json.clone());
    let json = to_json(&indices)?;
    std::fs::write(&path, &json)
        .with_context(|| format!("failed to write index: {}", path.display()))?;
    info!(path = %path.display(), "index written");

    Ok(())
}
