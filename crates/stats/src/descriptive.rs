//! Moments, quantiles and the per-series summary table.

/// Average yearly count. An empty series averages to 0.0.
pub fn mean(values: &[f64]) -> f64 {
    match values.len() {
        0 => 0.0,
        n => values.iter().sum::<f64>() / n as f64,
    }
}

/// Squared deviations from the mean, summed.
fn centred_sum_sq(values: &[f64]) -> f64 {
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum()
}

/// Unbiased variance (divides by `n - 1`); 0.0 below two values.
pub fn variance(values: &[f64]) -> f64 {
    match values.len() {
        0 | 1 => 0.0,
        n => centred_sum_sq(values) / (n - 1) as f64,
    }
}

/// Variance dividing by `n`, the scale of an ARIMA(0,0,0) fit's `sigma2`.
pub fn population_variance(values: &[f64]) -> f64 {
    match values.len() {
        0 => 0.0,
        n => centred_sum_sq(values) / n as f64,
    }
}

/// Square root of [`variance`].
pub fn sd(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Quantile of ascending `sorted` values, interpolating linearly between
/// neighbouring ranks at position `(n - 1) p` (Hyndman-Fan type 7).
///
/// `None` for empty input.
pub fn quantile(sorted: &[f64], p: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let pos = last as f64 * p.clamp(0.0, 1.0);
    let below = pos.floor() as usize;
    let above = (below + 1).min(last);
    let frac = pos - below as f64;
    Some(sorted[below] * (1.0 - frac) + sorted[above] * frac)
}

/// Middle value of ascending `sorted` values; the two middle values are
/// averaged for an even count.
pub fn median(sorted: &[f64]) -> Option<f64> {
    quantile(sorted, 0.5)
}

/// Relative change from the first to the last value, in percent.
///
/// Returns `None` for fewer than two values or a zero first value.
pub fn change_percent(data: &[f64]) -> Option<f64> {
    let (&first, &last) = (data.first()?, data.last()?);
    if data.len() < 2 || first == 0.0 {
        return None;
    }
    Some((last - first) / first * 100.0)
}

/// Direction of a series judged by its end points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    /// Last value strictly above the first.
    Increasing,
    /// Last value at or below the first.
    Decreasing,
}

impl Trend {
    /// `Increasing` iff `last > first`; `None` for an empty slice.
    pub fn of(data: &[f64]) -> Option<Self> {
        let (first, last) = (data.first()?, data.last()?);
        Some(if last > first {
            Self::Increasing
        } else {
            Self::Decreasing
        })
    }

    /// Label used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Increasing => "Increasing",
            Self::Decreasing => "Decreasing",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary table of one series.
#[derive(Clone, Debug, PartialEq)]
pub struct Descriptives {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (N-1).
    pub sd: f64,
    /// Population standard deviation (N).
    pub population_sd: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl Descriptives {
    /// Computes the summary; `None` if `data` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use crimecast_stats::Descriptives;
    ///
    /// let d = Descriptives::compute(&[4.0, 1.0, 3.0, 2.0]).unwrap();
    /// assert_eq!(d.count, 4);
    /// assert_eq!(d.median, 2.5);
    /// assert_eq!((d.min, d.max), (1.0, 4.0));
    /// ```
    pub fn compute(data: &[f64]) -> Option<Self> {
        if data.is_empty() {
            return None;
        }
        let mut sorted = data.to_vec();
        sorted.sort_by(f64::total_cmp);
        Some(Self {
            count: data.len(),
            mean: mean(data),
            sd: sd(data),
            population_sd: population_variance(data).sqrt(),
            min: sorted[0],
            q25: quantile(&sorted, 0.25)?,
            median: median(&sorted)?,
            q75: quantile(&sorted, 0.75)?,
            max: *sorted.last()?,
        })
    }
}
