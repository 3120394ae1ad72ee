//! Analysis error types.

/// Errors that can occur while configuring an analysis or writing reports.
///
/// Model failures of individual series are not errors at this level: they
/// are recorded in the series' [`Outcome`](crate::Outcome).
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// A configuration value is out of range.
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// JSON serialization failed.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },

    /// Writing a report failed.
    #[error("failed to write report: {reason}")]
    Write { reason: String },
}

impl From<csv::Error> for AnalysisError {
    fn from(e: csv::Error) -> Self {
        AnalysisError::Write {
            reason: e.to_string(),
        }
    }
}

impl From<std::io::Error> for AnalysisError {
    fn from(e: std::io::Error) -> Self {
        AnalysisError::Write {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_display() {
        let err = AnalysisError::InvalidConfig {
            reason: "horizon must be at least 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid configuration: horizon must be at least 1"
        );
    }

    #[test]
    fn test_serialization_display() {
        let err = AnalysisError::Serialization {
            reason: "invalid JSON".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("serialization error"));
        assert!(msg.contains("invalid JSON"));
    }

    #[test]
    fn test_from_io_error() {
        let err: AnalysisError = std::io::Error::other("disk full").into();
        assert!(matches!(err, AnalysisError::Write { .. }));
        assert!(err.to_string().contains("disk full"));
    }
}
