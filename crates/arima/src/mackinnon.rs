//! MacKinnon response surfaces for the Dickey-Fuller distribution,
//! regression with a constant and no trend, one integrated variable.
//!
//! * p-values: MacKinnon (1994), "Approximate asymptotic distribution
//!   functions for unit-root and cointegration tests".
//! * critical values: MacKinnon (2010), "Critical values for cointegration
//!   tests", Queen's Economics Department Working Paper 1227, table 2.
//!
//! **Not part of the public API.**

use std::collections::BTreeMap;

use statrs::distribution::{ContinuousCDF, Normal};

/// Statistics above this value have p-value 1.
const TAU_MAX: f64 = 2.74;
/// Statistics below this value have p-value 0.
const TAU_MIN: f64 = -18.83;
/// Switch point between the small-p and large-p polynomials.
const TAU_STAR: f64 = -1.61;

/// Polynomial in the statistic (ascending powers) used when `stat <= TAU_STAR`.
const TAU_SMALL_P: [f64; 3] = [2.1659, 1.4412, 0.038269];
/// Polynomial in the statistic (ascending powers) used when `stat > TAU_STAR`.
const TAU_LARGE_P: [f64; 4] = [1.7339, 0.93202, -0.12745, -0.010368];

/// Finite-sample critical value surfaces `b0 + b1/N + b2/N² + b3/N³`.
const TAU_C_2010: [(&str, [f64; 4]); 3] = [
    ("1%", [-3.43035, -6.5393, -16.786, -79.433]),
    ("5%", [-2.86154, -2.8903, -4.234, -40.040]),
    ("10%", [-2.56677, -1.5384, -2.809, 0.0]),
];

/// Evaluates `c[0] + c[1] x + c[2] x² + ...` by Horner's rule.
fn polyval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

/// Approximate p-value of an ADF t-statistic.
pub(crate) fn p_value(stat: f64) -> f64 {
    if stat.is_nan() {
        return f64::NAN;
    }
    if stat > TAU_MAX {
        return 1.0;
    }
    if stat < TAU_MIN {
        return 0.0;
    }
    let coeffs: &[f64] = if stat <= TAU_STAR {
        &TAU_SMALL_P
    } else {
        &TAU_LARGE_P
    };
    Normal::standard().cdf(polyval(coeffs, stat))
}

/// Critical values at 1%, 5% and 10% for a regression with `nobs` observations.
pub(crate) fn critical_values(nobs: usize) -> BTreeMap<String, f64> {
    let inv = 1.0 / nobs as f64;
    TAU_C_2010
        .iter()
        .map(|(label, b)| {
            let cv = b[0] + b[1] * inv + b[2] * inv * inv + b[3] * inv * inv * inv;
            (label.to_string(), cv)
        })
        .collect()
}
