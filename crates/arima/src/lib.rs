//! # crimecast-arima
//!
//! Unit-root testing, ARIMA(p,d,q) estimation and forecasting for short
//! annual count series.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     S["Series"] -->|"adf_test(values)?"| R["AdfResult"]
//!     S -->|"ArimaSpec::new(p, d, q).fit(&series)?"| F["ArimaFit"]
//!     F -->|".forecast(h)?"| FC["Forecast"]
//!     F --> A[".aic() / .bic()"]
//! ```
//!
//! Differencing lives in [`difference`]; forecasts are mapped back to the
//! original scale with [`integrate`]. [`reconstruct`] rebuilds a whole
//! series from its differences and its last `d` observations.
//!
//! ## Estimation
//!
//! Coefficients minimise the conditional sum of squares of the ARMA
//! recursion on the differenced series, started from Hannan-Rissanen
//! regressions. The solver is pluggable through [`Optimizer`]:
//! [`GaussNewton`] is the default, [`NelderMead`] wraps `argmin`.
//!
//! ```
//! use crimecast_arima::{adf_test, ArimaSpec, Series};
//!
//! let murders = Series::new(
//!     2001,
//!     vec![880.0, 844.0, 776.0, 927.0, 1013.0, 1098.0, 1097.0, 1169.0, 1083.0, 1065.0, 1110.0, 998.0],
//! )?;
//! let adf = adf_test(murders.values())?;
//! let fit = ArimaSpec::new(1, 1, 1).fit(&murders)?;
//! let forecast = fit.forecast(3)?;
//! assert_eq!(forecast.steps()[0].year, 2013);
//! assert!(adf.p_value() <= 1.0 && fit.aic().is_finite());
//! # Ok::<(), crimecast_arima::ArimaError>(())
//! ```
//!
//! ## Glossary
//!
//! | Symbol | Accessor | Meaning |
//! |--------|----------|---------|
//! | phi | [`ArimaFit::ar()`] | AR coefficients |
//! | theta | [`ArimaFit::ma()`] | MA coefficients |
//! | sigma2 | [`ArimaFit::sigma2()`] | innovation variance (mean squared residual) |
//! | psi | n/a | impulse-response weights driving forecast variance |
//! | tau | [`AdfResult::statistic()`] | ADF t-statistic |

mod adf;
mod diff;
mod error;
mod fit;
mod forecast;
mod optimizer;
mod series;
mod spec;

pub(crate) mod estimate;
pub(crate) mod linalg;
pub(crate) mod mackinnon;
pub(crate) mod params;

pub use adf::{AdfResult, adf_test, max_lag};
pub use diff::{difference, integrate, reconstruct};
pub use error::ArimaError;
pub use fit::ArimaFit;
pub use forecast::{Forecast, ForecastStep, Z_95};
pub use optimizer::{GaussNewton, Minimum, NelderMead, Objective, Optimizer};
pub use series::Series;
pub use spec::ArimaSpec;
