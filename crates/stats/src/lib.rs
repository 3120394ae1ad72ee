//! Statistical helper functions for crimecast.
//!
//! Everything here is plain arithmetic over `&[f64]`: the summaries printed
//! next to each model fit, the smoothing and correlogram values a plotting
//! layer draws, and the crime-index ratios used for the safety labels.

mod correlation;
mod descriptive;
mod index;
mod smoothing;

pub use correlation::{acf, pacf};
pub use descriptive::{
    Descriptives, Trend, change_percent, mean, median, population_variance, quantile, sd,
    variance,
};
pub use index::{SafetyStatus, crime_index, index_ratio};
pub use smoothing::moving_average;
