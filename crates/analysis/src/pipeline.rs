//! Per-series analysis pipeline.
//!
//! ```text
//! Series ─┬─ descriptives, trend, moving average, ACF/PACF
//!         ├─ adf_test ──────────────▶ StationarityReport
//!         └─ ArimaSpec::fit ─▶ forecast ─▶ ModelReport
//! ```
//!
//! A failing step is recorded as [`Outcome::Failed`]; it never aborts the
//! other steps or other series.

use crimecast_arima::{AdfResult, ArimaError, ArimaFit, Forecast, Series, adf_test};
use crimecast_dataset::{CrimeTable, SeriesKey};
use crimecast_stats::{Descriptives, Trend, acf, change_percent, moving_average, pacf};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::config::AnalysisConfig;
use crate::output::{
    DescriptiveSummary, ForecastPoint, ModelReport, Outcome, SeriesAnalysis, StationarityReport,
};

/// Runs the full pipeline on one series.
#[tracing::instrument(skip(key, series, config), fields(key = %key))]
pub fn analyze_series(key: &SeriesKey, series: &Series, config: &AnalysisConfig) -> SeriesAnalysis {
    let values = series.values();

    let stationarity: Outcome<StationarityReport> =
        adf_test(values).map(|r| stationarity_report(&r)).into();
    if let Some(reason) = stationarity.failure() {
        warn!(reason, "stationarity test failed");
    }

    let model: Outcome<ModelReport> = fit_and_forecast(series, config).into();
    match &model {
        Outcome::Completed(report) => debug!(aic = report.aic, "model fitted"),
        Outcome::Failed { reason } => warn!(reason = reason.as_str(), "model fit failed"),
    }

    SeriesAnalysis {
        region: key.region.clone(),
        category: key.category.clone(),
        years: series.years().collect(),
        values: values.to_vec(),
        descriptives: Descriptives::compute(values).map(DescriptiveSummary::from),
        trend: Trend::of(values)
            .unwrap_or(Trend::Decreasing)
            .as_str()
            .to_string(),
        change_percent: change_percent(values),
        moving_average: moving_average(values, config.ma_window()),
        acf: acf(values, config.max_lag()),
        pacf: pacf(values, config.max_lag()),
        stationarity,
        model,
    }
}

/// Runs [`analyze_series`] on every series of `table` in parallel.
///
/// Results come back in table (key) order.
pub fn analyze_table(table: &CrimeTable, config: &AnalysisConfig) -> Vec<SeriesAnalysis> {
    let entries: Vec<(&SeriesKey, &Series)> = table.iter().collect();
    let analyses: Vec<SeriesAnalysis> = entries
        .par_iter()
        .map(|(key, series)| analyze_series(key, series, config))
        .collect();
    let failed = analyses.iter().filter(|a| a.model.failure().is_some()).count();
    info!(
        series = analyses.len(),
        failed,
        spec = %config.spec(),
        "table analysis complete"
    );
    analyses
}

fn fit_and_forecast(series: &Series, config: &AnalysisConfig) -> Result<ModelReport, ArimaError> {
    let fit = config.spec().fit(series)?;
    let forecast = fit.forecast(config.horizon())?;
    Ok(model_report(&fit, &forecast))
}

fn model_report(fit: &ArimaFit, forecast: &Forecast) -> ModelReport {
    let (p, d, q) = fit.spec().order();
    ModelReport {
        order: [p, d, q],
        ar: fit.ar().to_vec(),
        ma: fit.ma().to_vec(),
        mean: fit.mean(),
        sigma2: fit.sigma2(),
        log_likelihood: fit.log_likelihood(),
        aic: fit.aic(),
        bic: fit.bic(),
        residuals: fit.residuals().to_vec(),
        forecast: forecast
            .steps()
            .iter()
            .map(|s| ForecastPoint {
                year: s.year,
                point: s.point,
                lower: s.lower,
                upper: s.upper,
            })
            .collect(),
    }
}

fn stationarity_report(result: &AdfResult) -> StationarityReport {
    StationarityReport {
        statistic: result.statistic(),
        p_value: result.p_value(),
        used_lag: result.used_lag(),
        nobs: result.nobs(),
        critical_values: result.critical_values().clone(),
        is_stationary: result.is_stationary(),
    }
}
