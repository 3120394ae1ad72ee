//! Integer-order differencing and its inverses.
//!
//! ```text
//! difference(x, d)              x[0..n]       ->  Δᵈx[0..n-d]
//! integrate(Δᵈy, head, d)       head = d values preceding Δᵈy's span  ->  levels
//! reconstruct(Δᵈx, tail, d)     tail = last d values of x             ->  x
//! ```

use crate::error::ArimaError;

/// Computes the `d`-th order difference of `series`.
///
/// `d = 0` returns a copy of the input; otherwise the result has length
/// `n - d` and equals `difference(&difference(series, 1)?, d - 1)`.
///
/// # Errors
///
/// Returns [`ArimaError::InvalidOrder`] if `d >= series.len()`.
///
/// # Example
///
/// ```
/// use crimecast_arima::difference;
///
/// let d1 = difference(&[1.0, 4.0, 9.0, 16.0], 1).unwrap();
/// assert_eq!(d1, vec![3.0, 5.0, 7.0]);
/// let d2 = difference(&[1.0, 4.0, 9.0, 16.0], 2).unwrap();
/// assert_eq!(d2, vec![2.0, 2.0]);
/// ```
pub fn difference(series: &[f64], d: usize) -> Result<Vec<f64>, ArimaError> {
    if d > 0 && d >= series.len() {
        return Err(ArimaError::invalid_order(format!(
            "differencing order d={d} must be less than the series length n={}",
            series.len()
        )));
    }
    let mut out = series.to_vec();
    for _ in 0..d {
        out = out.windows(2).map(|w| w[1] - w[0]).collect();
    }
    Ok(out)
}

/// Undoes `d`-th order differencing going forward in time.
///
/// `seeds` are the `d` level observations immediately preceding the first
/// element of `differenced`. Returns the level values for the span covered
/// by `differenced` (same length). Used to map forecasts back to the
/// original scale with the last `d` observations as seeds.
///
/// Seeding with the *last* `d` observations therefore continues past the
/// end of the series; to recover a series from its differences and its
/// trailing values use [`reconstruct`].
///
/// # Errors
///
/// Returns [`ArimaError::InvalidOrder`] if `seeds.len() != d`.
///
/// # Example
///
/// ```
/// use crimecast_arima::{difference, integrate};
///
/// let x = [3.0, 5.0, 4.0, 8.0, 7.0];
/// let dx = difference(&x, 2).unwrap();
/// assert_eq!(integrate(&dx, &x[..2], 2).unwrap(), x[2..].to_vec());
/// ```
pub fn integrate(differenced: &[f64], seeds: &[f64], d: usize) -> Result<Vec<f64>, ArimaError> {
    check_seeds(seeds, d)?;
    if d == 0 {
        return Ok(differenced.to_vec());
    }

    // Last value of the (d-1)-th difference of the seeds anchors this level.
    let anchor = difference(seeds, d - 1)?[0];
    let mut level = anchor;
    let lower: Vec<f64> = differenced
        .iter()
        .map(|&v| {
            level += v;
            level
        })
        .collect();

    integrate(&lower, &seeds[1..], d - 1)
}

/// Undoes `d`-th order differencing going backward in time.
///
/// `tail` holds the last `d` observations of the original series. Returns
/// the full original series of length `differenced.len() + d`, so that
/// `reconstruct(&difference(x, d)?, &x[n - d..], d)` reproduces `x`.
///
/// # Errors
///
/// Returns [`ArimaError::InvalidOrder`] if `tail.len() != d`.
///
/// # Example
///
/// ```
/// use crimecast_arima::{difference, reconstruct};
///
/// let x = [880.0, 844.0, 776.0, 927.0, 1013.0];
/// let dx = difference(&x, 1).unwrap();
/// assert_eq!(reconstruct(&dx, &x[4..], 1).unwrap(), x.to_vec());
/// ```
pub fn reconstruct(differenced: &[f64], tail: &[f64], d: usize) -> Result<Vec<f64>, ArimaError> {
    check_seeds(tail, d)?;
    if d == 0 {
        return Ok(differenced.to_vec());
    }

    // The (d-1)-th difference series has one more element than `differenced`;
    // its last element is known from the tail.
    let anchor = difference(tail, d - 1)?[0];
    let mut lower = vec![0.0; differenced.len() + 1];
    lower[differenced.len()] = anchor;
    for i in (0..differenced.len()).rev() {
        lower[i] = lower[i + 1] - differenced[i];
    }

    reconstruct(&lower, &tail[1..], d - 1)
}

fn check_seeds(seeds: &[f64], d: usize) -> Result<(), ArimaError> {
    if seeds.len() != d {
        return Err(ArimaError::invalid_order(format!(
            "order d={d} needs exactly {d} seed values, got {}",
            seeds.len()
        )));
    }
    Ok(())
}
