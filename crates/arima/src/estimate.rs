//! ARIMA(p,d,q) estimation pipeline.
//!
//! 1. Validate the order against the series length.
//! 2. Difference `d` times; for `d = 0` remove the sample mean.
//! 3. Hannan-Rissanen regressions for starting values.
//! 4. Minimise the conditional sum of squares with an [`Optimizer`].
//! 5. Variance, log-likelihood and residuals from the final recursion.
//!
//! **Not part of the public API.**

use ndarray::{Array1, Array2};
use tracing::{debug, warn};

use crate::diff;
use crate::error::ArimaError;
use crate::fit::ArimaFit;
use crate::linalg;
use crate::optimizer::{Objective, Optimizer, sum_sq};
use crate::params;
use crate::series::Series;
use crate::spec::ArimaSpec;

/// Conditional sum-of-squares objective of an ARMA(p,q) recursion
///
/// ```text
/// e[t] = w[t] - Σ φᵢ w[t-i] - Σ θⱼ e[t-j]
/// ```
///
/// with pre-sample values of `w` and `e` taken as zero. Parameters are laid
/// out as `[φ₁ … φₚ, θ₁ … θ_q]`.
pub(crate) struct CssObjective<'a> {
    w: &'a [f64],
    p: usize,
    q: usize,
}

impl<'a> CssObjective<'a> {
    pub(crate) fn new(w: &'a [f64], p: usize, q: usize) -> Self {
        Self { w, p, q }
    }
}

/// Runs the ARMA recursion, returning the one-step residuals.
pub(crate) fn arma_residuals(w: &[f64], ar: &[f64], ma: &[f64]) -> Vec<f64> {
    let mut e = vec![0.0; w.len()];
    for t in 0..w.len() {
        let mut v = w[t];
        for (i, phi) in ar.iter().enumerate().take(t) {
            v -= phi * w[t - 1 - i];
        }
        for (j, theta) in ma.iter().enumerate().take(t) {
            v -= theta * e[t - 1 - j];
        }
        e[t] = v;
    }
    e
}

impl Objective for CssObjective<'_> {
    fn dim(&self) -> usize {
        self.p + self.q
    }

    fn residuals(&self, params: &[f64]) -> Option<Vec<f64>> {
        let (ar, ma) = params.split_at(self.p);
        if !params::is_stationary(ar) || !params::is_invertible(ma) {
            return None;
        }
        let e = arma_residuals(self.w, ar, ma);
        e.iter().all(|v| v.is_finite()).then_some(e)
    }
}

/// Fits `spec` to `series` using `optimizer` for the refinement step.
#[tracing::instrument(skip(series, optimizer), fields(n = series.len()))]
pub(crate) fn fit_arima(
    spec: ArimaSpec,
    series: &Series,
    optimizer: &dyn Optimizer,
) -> Result<ArimaFit, ArimaError> {
    let (p, d, q) = spec.order();
    let n = series.len();

    // 1. Validate
    if d >= n {
        return Err(ArimaError::invalid_order(format!(
            "differencing order d={d} must be less than the series length n={n}"
        )));
    }
    let max_lag = n - d - 1;
    if p > max_lag || q > max_lag {
        return Err(ArimaError::invalid_order(format!(
            "p={p} and q={q} must not exceed n-d-1={max_lag}"
        )));
    }

    // 2. Difference and centre
    let differenced = diff::difference(series.values(), d)?;
    let n_eff = differenced.len();
    let min_val = differenced.iter().cloned().fold(f64::INFINITY, f64::min);
    let max_val = differenced.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if (max_val - min_val).abs() < f64::EPSILON {
        return Err(ArimaError::non_convergence(
            "working series is constant (zero variance)",
        ));
    }
    let mean = if d == 0 {
        differenced.iter().sum::<f64>() / n_eff as f64
    } else {
        0.0
    };
    let w: Vec<f64> = differenced.iter().map(|v| v - mean).collect();

    // 3. Starting values
    let start = hannan_rissanen(&w, p, q);
    debug!(?start, "Hannan-Rissanen starting values");

    // 4. Refine
    let objective = CssObjective::new(&w, p, q);
    let minimum = optimizer.minimize(&objective, &start)?;
    let (ar, ma) = minimum.params.split_at(p);
    debug!(?ar, ?ma, iterations = minimum.iterations, "optimiser finished");

    // 5. Final recursion
    let residuals = objective
        .residuals(&minimum.params)
        .ok_or_else(|| ArimaError::non_convergence("estimate is not stationary/invertible"))?;
    let sigma2 = sum_sq(&residuals) / n_eff as f64;
    if !sigma2.is_finite() || sigma2 <= 0.0 {
        warn!(sigma2, "rejecting fit with degenerate residual variance");
        return Err(ArimaError::non_convergence(format!(
            "residual variance is not positive and finite ({sigma2})"
        )));
    }
    let nf = n_eff as f64;
    let log_likelihood = -0.5 * nf * ((2.0 * std::f64::consts::PI * sigma2).ln() + 1.0);

    let tail = &series.values()[n - d..];
    Ok(ArimaFit::new(
        spec,
        ar.to_vec(),
        ma.to_vec(),
        mean,
        sigma2,
        log_likelihood,
        residuals,
        differenced,
        tail.to_vec(),
        series.last_year(),
    ))
}

/// Hannan-Rissanen two-step starting values `[φ…, θ…]`.
///
/// A long autoregression supplies innovation proxies, then `w` is regressed
/// on its own lags and lagged proxies. Regressions without enough rows
/// yield a zero start; inadmissible starts are shrunk toward zero.
pub(crate) fn hannan_rissanen(w: &[f64], p: usize, q: usize) -> Vec<f64> {
    let n = w.len();
    let zero = vec![0.0; p + q];
    if p + q == 0 {
        return zero;
    }

    // Step 1: innovation proxies from a long AR(m)
    let (proxies, first_proxy) = if q > 0 {
        let m = long_ar_order(n, p, q);
        let Some(fit) = lagged_regression(w, m, &[], 0, m) else {
            return zero;
        };
        let mut eps = vec![0.0; n];
        eps[m..].copy_from_slice(&fit.residuals);
        (eps, m)
    } else {
        (Vec::new(), 0)
    };

    // Step 2: regress w on p own lags and q proxy lags
    let start = p.max(first_proxy + q);
    let Some(fit) = lagged_regression(w, p, &proxies, q, start) else {
        return zero;
    };

    let (ar, ma) = fit.coef.split_at(p);
    let mut out = params::shrink_until(ar, params::is_stationary);
    out.extend(params::shrink_until(ma, params::is_invertible));
    out
}

/// Order of the long autoregression in the first Hannan-Rissanen step.
fn long_ar_order(n: usize, p: usize, q: usize) -> usize {
    let ln_n = (n as f64).ln();
    let target = ((ln_n * ln_n).floor() as usize).max(2 * p.max(q));
    target.min(n / 3).max(p.max(q)).max(1)
}

/// Regresses `w[t]` on `w[t-1..=t-p]` and `extra[t-1..=t-q]` for
/// `t in start..n`, without intercept.
fn lagged_regression(
    w: &[f64],
    p: usize,
    extra: &[f64],
    q: usize,
    start: usize,
) -> Option<linalg::OlsFit> {
    let rows = w.len().checked_sub(start)?;
    let cols = p + q;
    let mut x = Array2::zeros((rows, cols));
    let mut y = Array1::zeros(rows);
    for (r, t) in (start..w.len()).enumerate() {
        y[r] = w[t];
        for i in 1..=p {
            x[[r, i - 1]] = w[t - i];
        }
        for j in 1..=q {
            x[[r, p + j - 1]] = extra[t - j];
        }
    }
    linalg::ols(&x, &y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimizer::GaussNewton;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal};

    fn ar1(phi: f64, n: usize, seed: u64) -> Vec<f64> {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let normal = Normal::new(0.0, 1.0).unwrap();
        let mut data = vec![0.0; n];
        for t in 1..n {
            data[t] = phi * data[t - 1] + normal.sample(&mut rng);
        }
        data
    }

    fn ma1(theta: f64, n: usize, seed: u64) -> Vec<f64> {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let normal = Normal::new(0.0, 1.0).unwrap();
        let eps: Vec<f64> = (0..n).map(|_| normal.sample(&mut rng)).collect();
        (0..n)
            .map(|t| eps[t] + if t > 0 { theta * eps[t - 1] } else { 0.0 })
            .collect()
    }

    fn series(values: Vec<f64>) -> Series {
        Series::new(2001, values).unwrap()
    }

    #[test]
    fn arma_residuals_ar1_by_hand() {
        // e0 = 1, e1 = 2 - 0.5*1, e2 = 4 - 0.5*2
        let e = arma_residuals(&[1.0, 2.0, 4.0], &[0.5], &[]);
        assert_eq!(e, vec![1.0, 1.5, 3.0]);
    }

    #[test]
    fn arma_residuals_ma1_by_hand() {
        // e0 = 1, e1 = 2 - 0.5*1 = 1.5, e2 = 4 - 0.5*1.5 = 3.25
        let e = arma_residuals(&[1.0, 2.0, 4.0], &[], &[0.5]);
        assert_eq!(e, vec![1.0, 1.5, 3.25]);
    }

    #[test]
    fn objective_rejects_explosive_ar() {
        let w = [1.0, 2.0, 3.0];
        let obj = CssObjective::new(&w, 1, 0);
        assert!(obj.residuals(&[1.5]).is_none());
        assert!(obj.cost(&[1.5]).is_infinite());
        assert!(obj.residuals(&[0.5]).is_some());
    }

    #[test]
    fn objective_rejects_non_invertible_ma() {
        let w = [1.0, 2.0, 3.0];
        let obj = CssObjective::new(&w, 0, 1);
        assert!(obj.residuals(&[-1.0]).is_none());
    }

    #[test]
    fn hannan_rissanen_ar1_close_to_truth() {
        let w = ar1(0.6, 2000, 7);
        let start = hannan_rissanen(&w, 1, 0);
        assert!((start[0] - 0.6).abs() < 0.1, "start = {start:?}");
    }

    #[test]
    fn hannan_rissanen_ma1_close_to_truth() {
        let w = ma1(0.5, 2000, 8);
        let start = hannan_rissanen(&w, 0, 1);
        assert!((start[0] - 0.5).abs() < 0.15, "start = {start:?}");
    }

    #[test]
    fn hannan_rissanen_short_series_falls_back_to_zero() {
        let start = hannan_rissanen(&[1.0, -1.0, 2.0], 1, 1);
        assert_eq!(start, vec![0.0, 0.0]);
    }

    #[test]
    fn hannan_rissanen_white_noise_order() {
        assert!(hannan_rissanen(&[1.0, 2.0], 0, 0).is_empty());
    }

    #[test]
    fn long_ar_order_is_bounded_by_sample() {
        assert_eq!(long_ar_order(11, 1, 1), 3);
        assert!(long_ar_order(1000, 1, 1) >= 2);
        assert_eq!(long_ar_order(2, 1, 1), 1);
    }

    #[test]
    fn fit_rejects_d_not_below_n() {
        let err = fit_arima(ArimaSpec::new(0, 3, 0), &series(vec![1.0, 2.0, 4.0]), &GaussNewton::new())
            .unwrap_err();
        assert!(matches!(err, ArimaError::InvalidOrder { .. }));
    }

    #[test]
    fn fit_rejects_p_too_large() {
        // n - d - 1 = 3
        let data = series(vec![1.0, 3.0, 2.0, 5.0, 4.0]);
        let err = fit_arima(ArimaSpec::new(4, 1, 0), &data, &GaussNewton::new()).unwrap_err();
        assert!(matches!(err, ArimaError::InvalidOrder { .. }));
    }

    #[test]
    fn fit_rejects_q_too_large() {
        let data = series(vec![1.0, 3.0, 2.0, 5.0, 4.0]);
        let err = fit_arima(ArimaSpec::new(0, 0, 5), &data, &GaussNewton::new()).unwrap_err();
        assert!(matches!(err, ArimaError::InvalidOrder { .. }));
    }

    #[test]
    fn fit_constant_series_is_non_convergence() {
        let data = series(vec![5.0; 12]);
        let err = fit_arima(ArimaSpec::new(1, 0, 0), &data, &GaussNewton::new()).unwrap_err();
        assert!(matches!(err, ArimaError::NonConvergence { .. }));
    }

    #[test]
    fn fit_linear_trend_with_differencing_is_non_convergence() {
        let data = series((0..12).map(|i| 100.0 + 7.0 * i as f64).collect());
        let err = fit_arima(ArimaSpec::new(1, 1, 0), &data, &GaussNewton::new()).unwrap_err();
        assert!(matches!(err, ArimaError::NonConvergence { .. }));
    }

    #[test]
    fn fit_keeps_residuals_of_working_length() {
        let data = series(vec![880.0, 844.0, 776.0, 927.0, 1013.0, 1098.0, 1097.0, 1169.0]);
        let fit = fit_arima(ArimaSpec::new(1, 1, 0), &data, &GaussNewton::new()).unwrap();
        assert_eq!(fit.residuals().len(), 7);
        assert_eq!(fit.mean(), 0.0);
    }
}
