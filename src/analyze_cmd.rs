//! Analyze command: full analysis and forecast of one series.

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use crimecast_analysis::{Outcome, analyze_series, to_json};

use crate::cli::AnalyzeArgs;
use crate::config::CrimecastConfig;
use crate::convert;

/// Run the single-series analysis.
pub fn run(args: AnalyzeArgs, config: &CrimecastConfig) -> Result<()> {
    let _cmd = info_span!("analyze").entered();

    // 1. Resolve model settings, CLI flags over config
    let mut model = config.model.clone();
    if let Some(order) = &args.order {
        model.order = convert::parse_order(order)?;
    }
    if let Some(horizon) = args.horizon {
        model.horizon = horizon;
    }
    let analysis_cfg = convert::build_analysis_config(&model)?;

    // 2. Look up the series
    let table = convert::load_table(config.data.path.as_deref())?;
    let (key, series) = table
        .entry(&args.region, &args.category)
        .context("series lookup failed")?;
    info!(
        key = %key,
        first_year = series.start_year(),
        last_year = series.last_year(),
        "series selected"
    );

    // 3. Run the pipeline
    let analysis = analyze_series(key, series, &analysis_cfg);

    if let Some(d) = &analysis.descriptives {
        info!(
            mean = d.mean,
            sd = d.sd,
            min = d.min,
            max = d.max,
            trend = %analysis.trend,
            change_percent = ?analysis.change_percent,
            "descriptive statistics"
        );
    }
    match &analysis.stationarity {
        Outcome::Completed(adf) => info!(
            statistic = adf.statistic,
            p_value = adf.p_value,
            used_lag = adf.used_lag,
            stationary = adf.is_stationary,
            "ADF test"
        ),
        Outcome::Failed { reason } => warn!(reason = reason.as_str(), "ADF test failed"),
    }
    match &analysis.model {
        Outcome::Completed(report) => {
            info!(
                spec = %analysis_cfg.spec(),
                ar = ?report.ar,
                ma = ?report.ma,
                sigma2 = report.sigma2,
                aic = report.aic,
                bic = report.bic,
                "model fitted"
            );
            for step in &report.forecast {
                info!(
                    year = step.year,
                    point = step.point,
                    lower = step.lower,
                    upper = step.upper,
                    "forecast"
                );
            }
        }
        Outcome::Failed { reason } => warn!(reason = reason.as_str(), "model fit failed"),
    }

    // 4. Write JSON
    let path = args
        .output
        .unwrap_or_else(|| convert::analysis_json_path(&config.output, key));
    let json = to_json(&analysis)?;
    std::fs::write(&path, &json)
        .with_context(|| format!("failed to write analysis: {}", path.display()))?;
    info!(path = %path.display(), "analysis written");

    Ok(())
}
