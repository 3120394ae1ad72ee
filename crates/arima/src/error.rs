//! Error types for the crimecast-arima crate.

/// Error type for all fallible operations in the crimecast-arima crate.
///
/// Every variant is a recoverable outcome: callers decide whether to skip the
/// series, retry with a different order, or surface the failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArimaError {
    /// Returned when the model order is incompatible with the series length.
    #[error("invalid order: {reason}")]
    InvalidOrder {
        /// What made the order unusable.
        reason: String,
    },

    /// Returned when the series has fewer observations than required.
    #[error("insufficient data: got {n} observations, need at least {min}")]
    InsufficientData {
        /// Number of observations provided.
        n: usize,
        /// Minimum number of observations required.
        min: usize,
    },

    /// Returned when the series contains non-finite values (NaN or infinity).
    #[error("series contains non-finite values")]
    NonFiniteData,

    /// Returned when estimation fails to reach a finite, admissible solution.
    #[error("estimation did not converge: {reason}")]
    NonConvergence {
        /// Why the estimate was rejected.
        reason: String,
    },

    /// Returned when a forecast is requested for a non-positive horizon.
    #[error("invalid forecast horizon {horizon}: must be at least 1")]
    InvalidHorizon {
        /// The rejected horizon.
        horizon: usize,
    },
}

impl ArimaError {
    pub(crate) fn invalid_order(reason: impl Into<String>) -> Self {
        Self::InvalidOrder {
            reason: reason.into(),
        }
    }

    pub(crate) fn non_convergence(reason: impl Into<String>) -> Self {
        Self::NonConvergence {
            reason: reason.into(),
        }
    }
}
