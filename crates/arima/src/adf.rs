//! Augmented Dickey-Fuller unit-root test.
//!
//! Regression (constant, no trend):
//!
//! ```text
//! Δy[t] = α + β·y[t-1] + γ₁·Δy[t-1] + … + γₖ·Δy[t-k] + ε[t]
//! ```
//!
//! The statistic is the t-ratio of `β`; the null hypothesis is a unit root
//! (`β = 0`). The lag count `k` is chosen by AIC.

use std::collections::BTreeMap;

use ndarray::{Array1, Array2};
use tracing::debug;

use crate::error::ArimaError;
use crate::linalg::{self, OlsFit};
use crate::mackinnon;

/// Smallest series the regression can be run on.
const MIN_OBS: usize = 4;

/// Significance level for the stationarity verdict.
const SIGNIFICANCE: f64 = 0.05;

/// Outcome of an Augmented Dickey-Fuller test.
#[derive(Clone, Debug, PartialEq)]
pub struct AdfResult {
    statistic: f64,
    p_value: f64,
    used_lag: usize,
    nobs: usize,
    critical_values: BTreeMap<String, f64>,
}

impl AdfResult {
    /// t-statistic of the lagged-level coefficient.
    pub fn statistic(&self) -> f64 {
        self.statistic
    }

    /// MacKinnon approximate p-value.
    pub fn p_value(&self) -> f64 {
        self.p_value
    }

    /// Number of lagged differences chosen by AIC.
    pub fn used_lag(&self) -> usize {
        self.used_lag
    }

    /// Number of observations in the final regression.
    pub fn nobs(&self) -> usize {
        self.nobs
    }

    /// Critical values keyed by significance label (`"1%"`, `"5%"`, `"10%"`).
    pub fn critical_values(&self) -> &BTreeMap<String, f64> {
        &self.critical_values
    }

    /// `true` when the unit-root null is rejected at 5% (`p <= 0.05`).
    pub fn is_stationary(&self) -> bool {
        self.p_value <= SIGNIFICANCE
    }
}

/// Upper bound on the lag search for a series of length `n`.
///
/// `floor(12 (n/100)^¼)`, capped so the largest regression keeps at least
/// one residual degree of freedom.
pub fn max_lag(n: usize) -> usize {
    let schwert = (12.0 * (n as f64 / 100.0).powf(0.25)).floor() as usize;
    schwert
        .min(n.saturating_sub(1))
        .min((n / 2).saturating_sub(2))
}

/// Runs the Augmented Dickey-Fuller test on `series`.
///
/// Every lag `k` in `0..=max_lag(n)` is fitted on the common sample left
/// after dropping `max_lag` leading differences; the `k` with the smallest
/// AIC is refitted on all rows available to it.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`ArimaError::InsufficientData`] | fewer than 4 observations |
/// | [`ArimaError::NonFiniteData`] | any element is NaN or infinite |
/// | [`ArimaError::NonConvergence`] | the regression is singular or has zero residual variance |
///
/// # Example
///
/// ```
/// use crimecast_arima::adf_test;
///
/// let series = [880.0, 844.0, 776.0, 927.0, 1013.0, 1098.0,
///               1097.0, 1169.0, 1083.0, 1065.0, 1110.0, 998.0];
/// let result = adf_test(&series).unwrap();
/// assert!(result.p_value() >= 0.0 && result.p_value() <= 1.0);
/// assert_eq!(result.critical_values().len(), 3);
/// ```
#[tracing::instrument(skip(series), fields(n = series.len()))]
pub fn adf_test(series: &[f64]) -> Result<AdfResult, ArimaError> {
    let n = series.len();
    if n < MIN_OBS {
        return Err(ArimaError::InsufficientData { n, min: MIN_OBS });
    }
    if series.iter().any(|x| !x.is_finite()) {
        return Err(ArimaError::NonFiniteData);
    }

    let dy: Vec<f64> = series.windows(2).map(|w| w[1] - w[0]).collect();
    let max_lag = max_lag(n);

    let mut best: Option<(usize, f64)> = None;
    for k in 0..=max_lag {
        let Some(fit) = regress(series, &dy, k, max_lag) else {
            continue;
        };
        let aic = regression_aic(&fit, k + 2);
        debug!(lag = k, aic, "ADF lag candidate");
        if aic.is_finite() && best.is_none_or(|(_, a)| aic < a) {
            best = Some((k, aic));
        }
    }
    let (used_lag, _) =
        best.ok_or_else(|| ArimaError::non_convergence("ADF regression is degenerate"))?;

    let fit = regress(series, &dy, used_lag, used_lag)
        .ok_or_else(|| ArimaError::non_convergence("ADF regression is singular"))?;
    if fit.rss <= 0.0 || fit.std_err[1] <= 0.0 {
        return Err(ArimaError::non_convergence(
            "ADF regression has zero residual variance",
        ));
    }

    let statistic = fit.coef[1] / fit.std_err[1];
    let p_value = mackinnon::p_value(statistic);
    let nobs = fit.nobs();
    debug!(statistic, p_value, used_lag, nobs, "ADF test complete");

    Ok(AdfResult {
        statistic,
        p_value,
        used_lag,
        nobs,
        critical_values: mackinnon::critical_values(nobs),
    })
}

/// Fits the ADF regression with `k` lagged differences using rows
/// `start..dy.len()` (`start >= k`).
fn regress(series: &[f64], dy: &[f64], k: usize, start: usize) -> Option<OlsFit> {
    let rows = dy.len().checked_sub(start)?;
    let cols = k + 2;
    let mut x = Array2::zeros((rows, cols));
    let mut y = Array1::zeros(rows);
    for (r, t) in (start..dy.len()).enumerate() {
        y[r] = dy[t];
        x[[r, 0]] = 1.0;
        x[[r, 1]] = series[t];
        for i in 1..=k {
            x[[r, 1 + i]] = dy[t - i];
        }
    }
    linalg::ols(&x, &y)
}

/// Gaussian AIC of a regression with `n_params` coefficients.
fn regression_aic(fit: &OlsFit, n_params: usize) -> f64 {
    let n = fit.nobs() as f64;
    if fit.rss <= 0.0 {
        return f64::NEG_INFINITY;
    }
    let log_lik = -0.5 * n * ((2.0 * std::f64::consts::PI * fit.rss / n).ln() + 1.0);
    -2.0 * log_lik + 2.0 * n_params as f64
}
