//! Analysis configuration.

use crimecast_arima::ArimaSpec;

use crate::error::AnalysisError;

/// Configuration for the per-series analysis pipeline.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    spec: ArimaSpec,
    horizon: usize,
    ma_window: usize,
    max_lag: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            spec: ArimaSpec::new(1, 1, 1),
            horizon: 3,
            ma_window: 3,
            max_lag: 10,
        }
    }
}

impl AnalysisConfig {
    /// Set the ARIMA order used for every series.
    pub fn with_spec(mut self, spec: ArimaSpec) -> Self {
        self.spec = spec;
        self
    }

    /// Set the number of forecast steps.
    pub fn with_horizon(mut self, horizon: usize) -> Self {
        self.horizon = horizon;
        self
    }

    /// Set the moving-average window.
    pub fn with_ma_window(mut self, window: usize) -> Self {
        self.ma_window = window;
        self
    }

    /// Set the largest ACF/PACF lag.
    pub fn with_max_lag(mut self, max_lag: usize) -> Self {
        self.max_lag = max_lag;
        self
    }

    pub fn spec(&self) -> ArimaSpec {
        self.spec
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }

    pub fn ma_window(&self) -> usize {
        self.ma_window
    }

    pub fn max_lag(&self) -> usize {
        self.max_lag
    }

    /// Checks that the horizon and moving-average window are positive.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.horizon == 0 {
            return Err(AnalysisError::InvalidConfig {
                reason: "forecast horizon must be at least 1".to_string(),
            });
        }
        if self.ma_window == 0 {
            return Err(AnalysisError::InvalidConfig {
                reason: "moving-average window must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = AnalysisConfig::default();
        assert_eq!(config.spec().order(), (1, 1, 1));
        assert_eq!(config.horizon(), 3);
        assert_eq!(config.ma_window(), 3);
        assert_eq!(config.max_lag(), 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = AnalysisConfig::default()
            .with_spec(ArimaSpec::new(2, 0, 1))
            .with_horizon(5)
            .with_ma_window(5)
            .with_max_lag(4);
        assert_eq!(config.spec().order(), (2, 0, 1));
        assert_eq!(config.horizon(), 5);
        assert_eq!(config.ma_window(), 5);
        assert_eq!(config.max_lag(), 4);
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let err = AnalysisConfig::default()
            .with_horizon(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidConfig { .. }));
    }

    #[test]
    fn test_zero_window_rejected() {
        assert!(AnalysisConfig::default().with_ma_window(0).validate().is_err());
    }
}
