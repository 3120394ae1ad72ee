//! Multi-step forecasts with normal confidence bounds.
//!
//! Point forecasts extend the fitted ARMA recursion on the working
//! (differenced) scale with zero future innovations and are mapped back to
//! levels with [`integrate`](crate::integrate). The error variance at step
//! `h` is `σ² Σ_{j<h} ψⱼ²`, where `ψ` are the impulse-response weights of
//! the integrated process `φ(B)(1-B)^d X = θ(B) e`.

use crate::diff;
use crate::error::ArimaError;
use crate::fit::ArimaFit;

/// Two-sided 95% standard normal quantile.
pub const Z_95: f64 = 1.959964;

/// One forecast step on the original scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForecastStep {
    /// Calendar year being forecast.
    pub year: i32,
    /// Point forecast.
    pub point: f64,
    /// Lower 95% bound.
    pub lower: f64,
    /// Upper 95% bound.
    pub upper: f64,
}

impl ForecastStep {
    /// Width of the confidence interval (`upper - lower`).
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// An ordered sequence of forecast steps, one per horizon step.
#[derive(Clone, Debug, PartialEq)]
pub struct Forecast {
    steps: Vec<ForecastStep>,
}

impl Forecast {
    /// The forecast steps in horizon order.
    pub fn steps(&self) -> &[ForecastStep] {
        &self.steps
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false` for a forecast produced by [`ArimaFit::forecast`].
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Point forecasts only.
    pub fn points(&self) -> Vec<f64> {
        self.steps.iter().map(|s| s.point).collect()
    }

    /// Mean of the point forecasts.
    pub fn mean_point(&self) -> f64 {
        self.steps.iter().map(|s| s.point).sum::<f64>() / self.steps.len() as f64
    }
}

impl<'a> IntoIterator for &'a Forecast {
    type Item = &'a ForecastStep;
    type IntoIter = std::slice::Iter<'a, ForecastStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[tracing::instrument(skip(fit), fields(spec = %fit.spec()))]
pub(crate) fn forecast(fit: &ArimaFit, horizon: usize) -> Result<Forecast, ArimaError> {
    if horizon == 0 {
        return Err(ArimaError::InvalidHorizon { horizon });
    }
    let d = fit.spec().d();
    let mean = fit.mean();

    // Extend the recursion on the centred working scale.
    let mut w: Vec<f64> = fit.working_series().iter().map(|v| v - mean).collect();
    let mut e: Vec<f64> = fit.residuals().to_vec();
    let n = w.len();
    for t in n..n + horizon {
        let mut next = 0.0;
        for (i, phi) in fit.ar().iter().enumerate().take(t) {
            next += phi * w[t - 1 - i];
        }
        for (j, theta) in fit.ma().iter().enumerate().take(t) {
            next += theta * e[t - 1 - j];
        }
        w.push(next);
        e.push(0.0);
    }
    let differenced: Vec<f64> = w[n..].iter().map(|v| v + mean).collect();
    let points = diff::integrate(&differenced, fit.tail(), d)?;

    let psi = psi_weights(fit.ar(), fit.ma(), d, horizon);
    let sigma2 = fit.sigma2();
    let mut cumulative = 0.0;
    let steps: Vec<ForecastStep> = points
        .iter()
        .zip(psi.iter())
        .enumerate()
        .map(|(h, (&point, &psi_h))| {
            cumulative += psi_h * psi_h;
            let half_width = Z_95 * (sigma2 * cumulative).sqrt();
            ForecastStep {
                year: fit.last_year() + h as i32 + 1,
                point,
                lower: point - half_width,
                upper: point + half_width,
            }
        })
        .collect();

    if steps.iter().any(|s| !s.lower.is_finite() || !s.upper.is_finite()) {
        return Err(ArimaError::non_convergence("forecast is not finite"));
    }
    Ok(Forecast { steps })
}

/// First `count` impulse-response weights `ψ₀ = 1, ψ₁, …` of
/// `φ(B)(1-B)^d X = θ(B) e`.
pub(crate) fn psi_weights(ar: &[f64], ma: &[f64], d: usize, count: usize) -> Vec<f64> {
    // 1 - Σ φᵢ Bⁱ, then multiplied by (1 - B) d times
    let mut poly = Vec::with_capacity(ar.len() + d + 1);
    poly.push(1.0);
    poly.extend(ar.iter().map(|phi| -phi));
    for _ in 0..d {
        let mut next = vec![0.0; poly.len() + 1];
        for (k, c) in poly.iter().enumerate() {
            next[k] += c;
            next[k + 1] -= c;
        }
        poly = next;
    }
    let phi_star: Vec<f64> = poly[1..].iter().map(|c| -c).collect();

    let mut psi = Vec::with_capacity(count);
    for j in 0..count {
        if j == 0 {
            psi.push(1.0);
            continue;
        }
        let mut v = ma.get(j - 1).copied().unwrap_or(0.0);
        for (k, phi) in phi_star.iter().enumerate().take(j) {
            v += phi * psi[j - 1 - k];
        }
        psi.push(v);
    }
    psi
}
