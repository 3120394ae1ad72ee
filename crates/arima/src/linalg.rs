//! Dense least-squares helpers for the small regressions used by the ADF
//! test, the Hannan-Rissanen start and the Gauss-Newton step.
//!
//! Systems here have at most a dozen unknowns, so normal equations with a
//! Cholesky factorisation are accurate enough and allocation is negligible.
//!
//! **Not part of the public API.**

use ndarray::{Array1, Array2};

/// Relative pivot threshold below which a matrix is treated as singular.
const PIVOT_TOL: f64 = 1e-12;

/// Ordinary least-squares estimates for `y = X b + e`.
#[derive(Clone, Debug)]
pub(crate) struct OlsFit {
    pub(crate) coef: Vec<f64>,
    pub(crate) std_err: Vec<f64>,
    pub(crate) residuals: Vec<f64>,
    pub(crate) rss: f64,
}

impl OlsFit {
    /// Number of observations in the regression.
    pub(crate) fn nobs(&self) -> usize {
        self.residuals.len()
    }
}

/// Lower-triangular Cholesky factor `L` with `a = L Lᵀ`.
///
/// Returns `None` if `a` is not numerically positive definite.
pub(crate) fn cholesky(a: &Array2<f64>) -> Option<Array2<f64>> {
    let n = a.nrows();
    let mut l = Array2::zeros((n, n));
    for j in 0..n {
        let mut diag = a[[j, j]];
        for k in 0..j {
            diag -= l[[j, k]] * l[[j, k]];
        }
        if !diag.is_finite() || diag <= PIVOT_TOL * a[[j, j]].abs() || diag <= 0.0 {
            return None;
        }
        let ljj = diag.sqrt();
        l[[j, j]] = ljj;
        for i in (j + 1)..n {
            let mut s = a[[i, j]];
            for k in 0..j {
                s -= l[[i, k]] * l[[j, k]];
            }
            l[[i, j]] = s / ljj;
        }
    }
    Some(l)
}

/// Solves `L Lᵀ x = b` given the Cholesky factor `L`.
fn cholesky_solve(l: &Array2<f64>, b: &Array1<f64>) -> Array1<f64> {
    let n = l.nrows();
    let mut z = Array1::zeros(n);
    for i in 0..n {
        let mut s = b[i];
        for k in 0..i {
            s -= l[[i, k]] * z[k];
        }
        z[i] = s / l[[i, i]];
    }
    let mut x = Array1::zeros(n);
    for i in (0..n).rev() {
        let mut s = z[i];
        for k in (i + 1)..n {
            s -= l[[k, i]] * x[k];
        }
        x[i] = s / l[[i, i]];
    }
    x
}

/// Solves the symmetric positive-definite system `a x = b`.
pub(crate) fn solve_spd(a: &Array2<f64>, b: &Array1<f64>) -> Option<Array1<f64>> {
    let l = cholesky(a)?;
    let x = cholesky_solve(&l, b);
    x.iter().all(|v| v.is_finite()).then_some(x)
}

/// Fits `y = X b + e` by least squares.
///
/// Returns `None` when the design is rank deficient or leaves no residual
/// degrees of freedom.
pub(crate) fn ols(x: &Array2<f64>, y: &Array1<f64>) -> Option<OlsFit> {
    let (nobs, k) = x.dim();
    if nobs <= k || y.len() != nobs {
        return None;
    }

    let xtx = x.t().dot(x);
    let xty = x.t().dot(y);
    let l = cholesky(&xtx)?;
    let coef = cholesky_solve(&l, &xty);

    let fitted = x.dot(&coef);
    let residuals: Vec<f64> = y.iter().zip(fitted.iter()).map(|(a, b)| a - b).collect();
    let rss: f64 = residuals.iter().map(|e| e * e).sum();
    let s2 = rss / (nobs - k) as f64;

    // diag((XᵀX)⁻¹) column by column
    let std_err: Vec<f64> = (0..k)
        .map(|j| {
            let mut unit = Array1::zeros(k);
            unit[j] = 1.0;
            let col = cholesky_solve(&l, &unit);
            (s2 * col[j]).sqrt()
        })
        .collect();

    let coef = coef.to_vec();
    if coef.iter().chain(std_err.iter()).any(|v| !v.is_finite()) {
        return None;
    }

    Some(OlsFit {
        coef,
        std_err,
        residuals,
        rss,
    })
}
