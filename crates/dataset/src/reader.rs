//! Long-format CSV loading.
//!
//! ```text
//! region,category,year,count
//! Chhattisgarh,MURDER,2001,880
//! Chhattisgarh,MURDER,2002,844
//! ```
//!
//! Rows may come in any order. Each `(region, category)` must cover a run of
//! consecutive years with no duplicates.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use crimecast_arima::Series;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::DatasetError;
use crate::table::{CrimeTable, SeriesKey};

#[derive(Debug, Deserialize)]
struct Record {
    region: String,
    category: String,
    year: i32,
    count: f64,
}

/// Reads a long-format CSV file into a [`CrimeTable`].
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`DatasetError::FileNotFound`] | `path` does not exist |
/// | [`DatasetError::Csv`] | unreadable file, bad header or unparsable field |
/// | [`DatasetError::DuplicateYear`] | a year repeats within one series |
/// | [`DatasetError::NonConsecutiveYears`] | a series has a gap |
/// | [`DatasetError::InvalidSeries`] | a count is not finite |
pub fn read_csv(path: &Path) -> Result<CrimeTable, DatasetError> {
    if !path.exists() {
        return Err(DatasetError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
    let table = collect_records(reader)?;
    info!(path = %path.display(), series = table.len(), "loaded crime table");
    Ok(table)
}

/// Reads long-format CSV from any reader.
pub fn read_csv_from<R: Read>(input: R) -> Result<CrimeTable, DatasetError> {
    let reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(input);
    collect_records(reader)
}

fn collect_records<R: Read>(mut reader: csv::Reader<R>) -> Result<CrimeTable, DatasetError> {
    let mut grouped: BTreeMap<SeriesKey, BTreeMap<i32, f64>> = BTreeMap::new();
    for row in reader.deserialize() {
        let record: Record = row?;
        let key = SeriesKey::new(record.region, record.category);
        let years = grouped.entry(key.clone()).or_default();
        if years.insert(record.year, record.count).is_some() {
            return Err(DatasetError::DuplicateYear {
                region: key.region,
                category: key.category,
                year: record.year,
            });
        }
    }

    let mut table = CrimeTable::new();
    for (key, years) in grouped {
        let series = to_series(&key, &years)?;
        debug!(%key, n = series.len(), "series assembled");
        table.insert(key, series);
    }
    Ok(table)
}

fn to_series(key: &SeriesKey, years: &BTreeMap<i32, f64>) -> Result<Series, DatasetError> {
    let mut expected = None;
    for &year in years.keys() {
        match expected {
            Some(next) if year != next => {
                return Err(DatasetError::NonConsecutiveYears {
                    region: key.region.clone(),
                    category: key.category.clone(),
                    expected: next,
                    got: year,
                });
            }
            _ => expected = Some(year + 1),
        }
    }
    // empty groups are rejected by Series::new
    let start = years.keys().next().copied().unwrap_or_default();
    Series::new(start, years.values().copied().collect())
        .map_err(|e| DatasetError::invalid_series(&key.region, &key.category, e))
}
