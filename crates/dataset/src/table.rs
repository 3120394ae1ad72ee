//! In-memory table of annual series keyed by region and category.

use std::collections::BTreeMap;

use crimecast_arima::Series;

use crate::error::DatasetError;

/// Identifies one series: a region (state) and a crime category.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeriesKey {
    pub region: String,
    pub category: String,
}

impl SeriesKey {
    pub fn new(region: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            category: category.into(),
        }
    }
}

impl std::fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.region, self.category)
    }
}

/// Annual series for a set of `(region, category)` pairs, iterated in key
/// order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CrimeTable {
    series: BTreeMap<SeriesKey, Series>,
}

impl CrimeTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a series, returning the one it replaced.
    pub fn insert(&mut self, key: SeriesKey, series: Series) -> Option<Series> {
        self.series.insert(key, series)
    }

    /// Looks up a series. An exact match wins; otherwise region and
    /// category are compared case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::MissingSeries`] if nothing matches.
    pub fn get(&self, region: &str, category: &str) -> Result<&Series, DatasetError> {
        self.entry(region, category).map(|(_, s)| s)
    }

    /// Like [`CrimeTable::get`], also returning the stored key with its
    /// original spelling.
    pub fn entry(
        &self,
        region: &str,
        category: &str,
    ) -> Result<(&SeriesKey, &Series), DatasetError> {
        let exact = SeriesKey::new(region, category);
        if let Some(found) = self.series.get_key_value(&exact) {
            return Ok(found);
        }
        self.series
            .iter()
            .find(|(k, _)| {
                k.region.eq_ignore_ascii_case(region) && k.category.eq_ignore_ascii_case(category)
            })
            .ok_or_else(|| DatasetError::MissingSeries {
                region: region.to_string(),
                category: category.to_string(),
            })
    }

    /// All series in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&SeriesKey, &Series)> {
        self.series.iter()
    }

    /// Number of series.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Distinct regions in order.
    pub fn regions(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.series.keys().map(|k| k.region.as_str()).collect();
        out.dedup();
        out
    }

    /// The `(category, series)` pairs of one region.
    pub fn region_series<'a>(
        &'a self,
        region: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a Series)> + 'a {
        self.series
            .iter()
            .filter(move |(k, _)| k.region == region)
            .map(|(k, s)| (k.category.as_str(), s))
    }

    /// Earliest and latest year covered by any series.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let first = self.series.values().map(Series::start_year).min()?;
        let last = self.series.values().map(Series::last_year).max()?;
        Some((first, last))
    }
}

impl FromIterator<(SeriesKey, Series)> for CrimeTable {
    fn from_iter<I: IntoIterator<Item = (SeriesKey, Series)>>(iter: I) -> Self {
        Self {
            series: iter.into_iter().collect(),
        }
    }
}
