//! Error types for crimecast-dataset.

use std::path::PathBuf;

use crimecast_arima::ArimaError;

/// Error type for all fallible operations in the crimecast-dataset crate.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Returned when a data file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps a CSV parsing or I/O failure.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when a `(region, category)` pair is not in the table.
    #[error("no series for region '{region}', category '{category}'")]
    MissingSeries {
        /// Requested region.
        region: String,
        /// Requested category.
        category: String,
    },

    /// Returned when the same year appears twice for one series.
    #[error("duplicate year {year} for {region}/{category}")]
    DuplicateYear {
        /// Region of the offending series.
        region: String,
        /// Category of the offending series.
        category: String,
        /// Year seen more than once.
        year: i32,
    },

    /// Returned when the years of a series have a gap.
    #[error("years of {region}/{category} are not consecutive: expected {expected}, got {got}")]
    NonConsecutiveYears {
        /// Region of the offending series.
        region: String,
        /// Category of the offending series.
        category: String,
        /// Year that should have followed.
        expected: i32,
        /// Year actually found.
        got: i32,
    },

    /// Returned when a row's values cannot form a series.
    #[error("invalid series {region}/{category}: {reason}")]
    InvalidSeries {
        /// Region of the offending series.
        region: String,
        /// Category of the offending series.
        category: String,
        /// Why the values were rejected.
        reason: String,
    },
}

impl DatasetError {
    pub(crate) fn invalid_series(region: &str, category: &str, err: ArimaError) -> Self {
        Self::InvalidSeries {
            region: region.to_string(),
            category: category.to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<csv::Error> for DatasetError {
    fn from(e: csv::Error) -> Self {
        DatasetError::Csv {
            reason: e.to_string(),
        }
    }
}
