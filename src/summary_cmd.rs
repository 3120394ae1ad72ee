//! Summary command: fit every series and write the CSV report.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use crimecast_analysis::{SummaryReport, analyze_table, write_summary_csv};

use crate::cli::SummaryArgs;
use crate::config::CrimecastConfig;
use crate::convert;

/// Run the table-wide summary.
pub fn run(args: SummaryArgs, config: &CrimecastConfig) -> Result<()> {
    let _cmd = info_span!("summary").entered();

    let analysis_cfg = convert::build_analysis_config(&config.model)?;
    let table = convert::load_table(config.data.path.as_deref())?;

    info!(n_series = table.len(), spec = %analysis_cfg.spec(), "fitting all series");
    let analyses = analyze_table(&table, &analysis_cfg);
    let report = SummaryReport::new(&analyses, analysis_cfg.horizon());

    let failed = report.rows.iter().filter(|r| r.status != "ok").count();
    info!(
        n_rows = report.rows.len(),
        n_failed = failed,
        "summary complete"
    );

    let path = args.output.as_ref().unwrap_or(&config.output.summary_csv);
    write_summary_csv(&report, path)
        .with_context(|| format!("failed to write summary: {}", path.display()))?;

    Ok(())
}
