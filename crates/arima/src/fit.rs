//! Fitted ARIMA model results.

use crate::error::ArimaError;
use crate::forecast::{self, Forecast};
use crate::spec::ArimaSpec;

/// A fitted ARIMA(p,d,q) model produced by [`ArimaSpec::fit()`].
///
/// Holds the estimated coefficients, the innovation variance, the
/// residuals and everything [`ArimaFit::forecast()`] needs to continue
/// the series: the differenced working series and the last `d` original
/// observations.
///
/// ```mermaid
/// graph LR
///     B["ArimaFit"] --> C[".ar() / .ma()"]
///     B --> D[".sigma2()"]
///     B --> E[".aic() / .bic()"]
///     B --> F[".forecast(horizon)?"]
/// ```
#[derive(Clone, Debug)]
pub struct ArimaFit {
    spec: ArimaSpec,
    ar: Vec<f64>,
    ma: Vec<f64>,
    mean: f64,
    sigma2: f64,
    log_likelihood: f64,
    residuals: Vec<f64>,
    working: Vec<f64>,
    tail: Vec<f64>,
    last_year: i32,
}

impl ArimaFit {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        spec: ArimaSpec,
        ar: Vec<f64>,
        ma: Vec<f64>,
        mean: f64,
        sigma2: f64,
        log_likelihood: f64,
        residuals: Vec<f64>,
        working: Vec<f64>,
        tail: Vec<f64>,
        last_year: i32,
    ) -> Self {
        Self {
            spec,
            ar,
            ma,
            mean,
            sigma2,
            log_likelihood,
            residuals,
            working,
            tail,
            last_year,
        }
    }

    /// Returns the [`ArimaSpec`] that produced this fit.
    pub fn spec(&self) -> ArimaSpec {
        self.spec
    }

    /// Returns the AR coefficients (`phi`).
    pub fn ar(&self) -> &[f64] {
        &self.ar
    }

    /// Returns the MA coefficients (`theta`).
    pub fn ma(&self) -> &[f64] {
        &self.ma
    }

    /// Returns the mean of the working series.
    ///
    /// Estimated (as the sample mean) only when `d = 0`; differenced models
    /// carry no drift and report `0.0`.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns the innovation variance (`sigma2`), the mean squared residual.
    pub fn sigma2(&self) -> f64 {
        self.sigma2
    }

    /// Returns the conditional Gaussian log-likelihood.
    pub fn log_likelihood(&self) -> f64 {
        self.log_likelihood
    }

    /// Returns the one-step residuals, one per working observation.
    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    /// Returns the differenced series the ARMA part was fitted to.
    pub fn working_series(&self) -> &[f64] {
        &self.working
    }

    /// Returns the last `d` original observations.
    pub fn tail(&self) -> &[f64] {
        &self.tail
    }

    /// Returns the year of the last observation.
    pub fn last_year(&self) -> i32 {
        self.last_year
    }

    /// Effective sample size `n - d`.
    pub fn n_eff(&self) -> usize {
        self.working.len()
    }

    /// Akaike Information Criterion, `-2 logL + 2k` with `k = p + q + 1`.
    pub fn aic(&self) -> f64 {
        -2.0 * self.log_likelihood + 2.0 * self.spec.n_params() as f64
    }

    /// Bayesian Information Criterion, `-2 logL + ln(n - d) k`.
    pub fn bic(&self) -> f64 {
        -2.0 * self.log_likelihood + (self.n_eff() as f64).ln() * self.spec.n_params() as f64
    }

    /// Forecasts `horizon` steps past the last observation with 95% bounds.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ArimaError::InvalidHorizon`] | `horizon == 0` |
    /// | [`ArimaError::NonConvergence`] | the bounds are not finite |
    ///
    /// # Example
    ///
    /// ```
    /// use crimecast_arima::{ArimaSpec, Series};
    ///
    /// let series = Series::new(2001, vec![2.0, 4.0, 3.0, 5.0]).unwrap();
    /// let fc = ArimaSpec::new(0, 0, 0).fit(&series)?.forecast(2)?;
    /// assert_eq!(fc.steps()[0].year, 2005);
    /// assert!((fc.steps()[1].point - 3.5).abs() < 1e-12);
    /// # Ok::<(), crimecast_arima::ArimaError>(())
    /// ```
    pub fn forecast(&self, horizon: usize) -> Result<Forecast, ArimaError> {
        forecast::forecast(self, horizon)
    }
}
