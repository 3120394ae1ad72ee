//! Crime index: current-year counts relative to a base year.

/// Index of `current` relative to `base`, in percent; `None` unless
/// `base > 0`.
pub fn index_ratio(base: f64, current: f64) -> Option<f64> {
    (base > 0.0).then(|| current / base * 100.0)
}

/// Mean index over `(base, current)` pairs, skipping pairs with a
/// non-positive base. `None` when no pair is usable.
///
/// # Example
///
/// ```
/// use crimecast_stats::{SafetyStatus, crime_index};
///
/// let index = crime_index([(100.0, 90.0), (50.0, 60.0), (0.0, 7.0)]).unwrap();
/// assert_eq!(index, 105.0);
/// assert_eq!(SafetyStatus::from_index(index), SafetyStatus::Moderate);
/// ```
pub fn crime_index(pairs: impl IntoIterator<Item = (f64, f64)>) -> Option<f64> {
    let ratios: Vec<f64> = pairs
        .into_iter()
        .filter_map(|(base, current)| index_ratio(base, current))
        .collect();
    if ratios.is_empty() {
        return None;
    }
    Some(ratios.iter().sum::<f64>() / ratios.len() as f64)
}

/// Safety label derived from a crime index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SafetyStatus {
    /// Index below 100.
    Safe,
    /// Index in `[100, 120)`.
    Moderate,
    /// Index of 120 or more.
    NotSafe,
}

impl SafetyStatus {
    pub fn from_index(index: f64) -> Self {
        if index < 100.0 {
            Self::Safe
        } else if index < 120.0 {
            Self::Moderate
        } else {
            Self::NotSafe
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "SAFE",
            Self::Moderate => "MODERATE",
            Self::NotSafe => "NOT SAFE",
        }
    }
}

impl std::fmt::Display for SafetyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
