//! Sample autocorrelation and partial autocorrelation.

/// Sample autocorrelations `r₀ … r_k` with `k = min(max_lag, n - 1)`.
///
/// Uses the biased estimator `r_k = Σ (x_t - x̄)(x_{t+k} - x̄) / Σ (x_t - x̄)²`.
/// Returns `None` for an empty or constant series.
pub fn acf(data: &[f64], max_lag: usize) -> Option<Vec<f64>> {
    let n = data.len();
    if n == 0 {
        return None;
    }
    let m = data.iter().sum::<f64>() / n as f64;
    let dev: Vec<f64> = data.iter().map(|x| x - m).collect();
    let c0: f64 = dev.iter().map(|d| d * d).sum();
    if c0 <= 0.0 {
        return None;
    }
    let k_max = max_lag.min(n - 1);
    Some(
        (0..=k_max)
            .map(|k| dev.iter().zip(&dev[k..]).map(|(a, b)| a * b).sum::<f64>() / c0)
            .collect(),
    )
}

/// Partial autocorrelations `φ₀₀ = 1, φ₁₁, …, φ_kk` via the Durbin-Levinson
/// recursion on [`acf`].
///
/// The recursion stops early if the prediction error variance reaches zero,
/// so the result may be shorter than `k + 1`.
pub fn pacf(data: &[f64], max_lag: usize) -> Option<Vec<f64>> {
    let r = acf(data, max_lag)?;
    let mut out = vec![1.0];
    let mut phi: Vec<f64> = Vec::new();
    let mut v = 1.0;
    for k in 1..r.len() {
        let num = r[k] - phi.iter().enumerate().map(|(j, p)| p * r[k - 1 - j]).sum::<f64>();
        let pkk = num / v;
        let prev = phi.clone();
        phi.push(pkk);
        for j in 0..k - 1 {
            phi[j] = prev[j] - pkk * prev[k - 2 - j];
        }
        v *= 1.0 - pkk * pkk;
        out.push(pkk);
        if v <= f64::EPSILON {
            break;
        }
    }
    Some(out)
}
