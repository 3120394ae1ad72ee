//! Annual observation series.

use crate::error::ArimaError;

/// An ordered sequence of annual observations.
///
/// The time index is implied: observation `i` belongs to year
/// `start_year + i`, so a `Series` can never contain gaps.
///
/// # Example
///
/// ```
/// use crimecast_arima::Series;
///
/// let series = Series::new(2001, vec![880.0, 844.0, 776.0]).unwrap();
/// assert_eq!(series.len(), 3);
/// assert_eq!(series.last_year(), 2003);
/// assert_eq!(series.years().collect::<Vec<_>>(), vec![2001, 2002, 2003]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    start_year: i32,
    values: Vec<f64>,
}

impl Series {
    /// Creates a series starting at `start_year`.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ArimaError::InsufficientData`] | `values` is empty |
    /// | [`ArimaError::NonFiniteData`] | any value is NaN or infinite |
    pub fn new(start_year: i32, values: Vec<f64>) -> Result<Self, ArimaError> {
        if values.is_empty() {
            return Err(ArimaError::InsufficientData { n: 0, min: 1 });
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ArimaError::NonFiniteData);
        }
        Ok(Self { start_year, values })
    }

    /// Returns the year of the first observation.
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Returns the year of the last observation.
    pub fn last_year(&self) -> i32 {
        self.start_year + self.values.len() as i32 - 1
    }

    /// Returns the observations in time order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of observations (always at least 1).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; present for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the year of each observation.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        (0..self.values.len() as i32).map(move |i| self.start_year + i)
    }
}
