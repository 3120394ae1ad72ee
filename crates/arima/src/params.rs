//! Stationarity and invertibility checks for ARMA coefficient vectors.
//!
//! A polynomial `1 - a₁z - … - aₖzᵏ` has all roots strictly outside the
//! unit circle iff the step-down (reverse Levinson-Durbin) recursion yields
//! partial autocorrelations with `|r| < 1` at every stage. The AR side is
//! checked on `φ` directly; the MA polynomial `1 + θ₁z + …` is checked on `-θ`.
//!
//! **Not part of the public API.**

/// Partial autocorrelations at or beyond this magnitude are rejected,
/// keeping roots a small distance away from the unit circle.
const MAX_PARTIAL: f64 = 1.0 - 1e-4;

/// Shrinkage factor applied to an inadmissible start.
const SHRINK: f64 = 0.9;

/// Maximum number of shrink steps before falling back to zero.
const MAX_SHRINK_STEPS: usize = 100;

/// Maps polynomial coefficients back to partial autocorrelations.
///
/// Returns `None` if any stage has `|r| >= MAX_PARTIAL` (or is NaN).
pub(crate) fn coeffs_to_pacf(coeffs: &[f64]) -> Option<Vec<f64>> {
    let p = coeffs.len();
    let mut a = coeffs.to_vec();
    let mut r = vec![0.0; p];

    for k in (0..p).rev() {
        let rk = a[k];
        if !(rk.abs() < MAX_PARTIAL) {
            return None;
        }
        r[k] = rk;
        let denom = 1.0 - rk * rk;
        let prev: Vec<f64> = (0..k).map(|j| (a[j] + rk * a[k - 1 - j]) / denom).collect();
        a[..k].copy_from_slice(&prev);
    }

    Some(r)
}

/// `true` if the AR polynomial `1 - Σ φᵢ zⁱ` has all roots outside the unit circle.
pub(crate) fn is_stationary(ar: &[f64]) -> bool {
    coeffs_to_pacf(ar).is_some()
}

/// `true` if the MA polynomial `1 + Σ θⱼ zʲ` has all roots outside the unit circle.
pub(crate) fn is_invertible(ma: &[f64]) -> bool {
    let neg: Vec<f64> = ma.iter().map(|t| -t).collect();
    coeffs_to_pacf(&neg).is_some()
}

/// Shrinks `coeffs` toward zero until `admissible` accepts them.
pub(crate) fn shrink_until(coeffs: &[f64], admissible: impl Fn(&[f64]) -> bool) -> Vec<f64> {
    let mut current = coeffs.to_vec();
    for _ in 0..MAX_SHRINK_STEPS {
        if admissible(&current) {
            return current;
        }
        current.iter_mut().for_each(|c| *c *= SHRINK);
    }
    vec![0.0; coeffs.len()]
}
