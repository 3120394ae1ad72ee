//! ARIMA model specification (unfitted).

use crate::error::ArimaError;
use crate::estimate;
use crate::fit::ArimaFit;
use crate::optimizer::{GaussNewton, Optimizer};
use crate::series::Series;

/// An unfitted ARIMA(p,d,q) model specification.
///
/// Create a spec with [`ArimaSpec::new()`], then call [`ArimaSpec::fit()`]
/// to obtain an [`ArimaFit`].
///
/// ```mermaid
/// graph LR
///     A["ArimaSpec::new(p, d, q)"] -->|".fit(&series)?"| B["ArimaFit"]
///     A -->|".fit_with(&series, &solver)?"| B
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArimaSpec {
    p: usize,
    d: usize,
    q: usize,
}

impl ArimaSpec {
    /// Creates a new ARIMA(p,d,q) specification.
    ///
    /// # Example
    ///
    /// ```
    /// use crimecast_arima::ArimaSpec;
    ///
    /// let spec = ArimaSpec::new(1, 1, 1);
    /// assert_eq!(spec.order(), (1, 1, 1));
    /// ```
    pub fn new(p: usize, d: usize, q: usize) -> Self {
        Self { p, d, q }
    }

    /// Returns the AR order (`p`).
    pub fn p(&self) -> usize {
        self.p
    }

    /// Returns the differencing order (`d`).
    pub fn d(&self) -> usize {
        self.d
    }

    /// Returns the MA order (`q`).
    pub fn q(&self) -> usize {
        self.q
    }

    /// Returns `(p, d, q)`.
    pub fn order(&self) -> (usize, usize, usize) {
        (self.p, self.d, self.q)
    }

    /// Number of estimated parameters counted by the information criteria
    /// (`p + q + 1`, the one being the innovation variance).
    pub fn n_params(&self) -> usize {
        self.p + self.q + 1
    }

    /// Fits this specification by conditional sum of squares using the
    /// default [`GaussNewton`] solver.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ArimaError::InvalidOrder`] | `d >= n`, or `p` or `q` exceeds `n - d - 1` |
    /// | [`ArimaError::NonConvergence`] | constant working series, solver budget exhausted, or degenerate variance |
    pub fn fit(&self, series: &Series) -> Result<ArimaFit, ArimaError> {
        self.fit_with(series, &GaussNewton::new())
    }

    /// Fits this specification with a caller-supplied [`Optimizer`].
    ///
    /// # Example
    ///
    /// ```
    /// use crimecast_arima::{ArimaSpec, NelderMead, Series};
    ///
    /// let series = Series::new(2001, vec![3.0, 5.0, 4.0, 6.0, 5.0, 7.0, 6.0, 8.0]).unwrap();
    /// let fit = ArimaSpec::new(0, 0, 0).fit_with(&series, &NelderMead::new()).unwrap();
    /// assert!((fit.mean() - 5.5).abs() < 1e-12);
    /// ```
    pub fn fit_with(
        &self,
        series: &Series,
        optimizer: &dyn Optimizer,
    ) -> Result<ArimaFit, ArimaError> {
        estimate::fit_arima(*self, series, optimizer)
    }
}

impl Default for ArimaSpec {
    /// ARIMA(1,1,1).
    fn default() -> Self {
        Self::new(1, 1, 1)
    }
}

impl std::fmt::Display for ArimaSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ARIMA({},{},{})", self.p, self.d, self.q)
    }
}
