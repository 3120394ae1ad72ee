//! Serializable analysis results.

use crimecast_stats::Descriptives;
use serde::Serialize;

use crate::error::AnalysisError;

/// Result of one pipeline step that may fail for a given series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome<T> {
    Completed(T),
    Failed { reason: String },
}

impl<T> Outcome<T> {
    /// The completed value, if any.
    pub fn completed(&self) -> Option<&T> {
        match self {
            Outcome::Completed(v) => Some(v),
            Outcome::Failed { .. } => None,
        }
    }

    /// The failure reason, if any.
    pub fn failure(&self) -> Option<&str> {
        match self {
            Outcome::Completed(_) => None,
            Outcome::Failed { reason } => Some(reason),
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for Outcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(v) => Outcome::Completed(v),
            Err(e) => Outcome::Failed {
                reason: e.to_string(),
            },
        }
    }
}

/// Complete analysis of one `(region, category)` series.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesAnalysis {
    pub region: String,
    pub category: String,
    pub years: Vec<i32>,
    pub values: Vec<f64>,
    pub descriptives: Option<DescriptiveSummary>,
    /// "Increasing" or "Decreasing", judged by the end points.
    pub trend: String,
    /// Change from first to last year in percent; `None` when the first value is zero.
    pub change_percent: Option<f64>,
    /// Centred moving average; `None` where the window is incomplete.
    pub moving_average: Vec<Option<f64>>,
    pub acf: Option<Vec<f64>>,
    pub pacf: Option<Vec<f64>>,
    pub stationarity: Outcome<StationarityReport>,
    pub model: Outcome<ModelReport>,
}

/// Descriptive statistics of a series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptiveSummary {
    pub count: usize,
    pub mean: f64,
    pub sd: f64,
    pub population_sd: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl From<Descriptives> for DescriptiveSummary {
    fn from(d: Descriptives) -> Self {
        Self {
            count: d.count,
            mean: d.mean,
            sd: d.sd,
            population_sd: d.population_sd,
            min: d.min,
            q25: d.q25,
            median: d.median,
            q75: d.q75,
            max: d.max,
        }
    }
}

/// Augmented Dickey-Fuller outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationarityReport {
    pub statistic: f64,
    pub p_value: f64,
    pub used_lag: usize,
    pub nobs: usize,
    pub critical_values: std::collections::BTreeMap<String, f64>,
    pub is_stationary: bool,
}

/// Fitted ARIMA model and its forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelReport {
    /// `[p, d, q]`
    pub order: [usize; 3],
    pub ar: Vec<f64>,
    pub ma: Vec<f64>,
    pub mean: f64,
    pub sigma2: f64,
    pub log_likelihood: f64,
    pub aic: f64,
    pub bic: f64,
    pub residuals: Vec<f64>,
    pub forecast: Vec<ForecastPoint>,
}

impl ModelReport {
    /// Mean of the point forecasts.
    pub fn forecast_mean(&self) -> f64 {
        self.forecast.iter().map(|f| f.point).sum::<f64>() / self.forecast.len() as f64
    }
}

/// One forecast year with its 95% interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastPoint {
    pub year: i32,
    pub point: f64,
    pub lower: f64,
    pub upper: f64,
}

/// Crime index of one region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionIndex {
    pub region: String,
    pub base_year: i32,
    pub current_year: i32,
    /// Categories with a positive base-year count.
    pub categories_used: usize,
    pub index: Option<f64>,
    /// "SAFE", "MODERATE" or "NOT SAFE".
    pub status: Option<String>,
}

/// Serialize any analysis output to a pretty-printed JSON string.
pub fn to_json<T: Serialize + ?Sized>(output: &T) -> Result<String, AnalysisError> {
    serde_json::to_string_pretty(output).map_err(|e| AnalysisError::Serialization {
        reason: e.to_string(),
    })
}
