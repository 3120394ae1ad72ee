//! Crime index per region: current-year counts relative to a base year,
//! averaged over categories.

use crimecast_arima::Series;
use crimecast_dataset::CrimeTable;
use crimecast_stats::{SafetyStatus, crime_index};
use tracing::debug;

use crate::output::RegionIndex;

fn value_at(series: &Series, year: i32) -> Option<f64> {
    let offset = usize::try_from(year.checked_sub(series.start_year())?).ok()?;
    series.values().get(offset).copied()
}

/// Crime index and safety label for every region of `table`.
///
/// Categories lacking either year, or with a non-positive base-year count,
/// are left out of a region's average. A region with no usable category gets
/// `index: None`.
pub fn crime_indices(table: &CrimeTable, base_year: i32, current_year: i32) -> Vec<RegionIndex> {
    table
        .regions()
        .into_iter()
        .map(|region| {
            let pairs: Vec<(f64, f64)> = table
                .region_series(region)
                .filter_map(|(_, s)| Some((value_at(s, base_year)?, value_at(s, current_year)?)))
                .filter(|(base, _)| *base > 0.0)
                .collect();
            let index = crime_index(pairs.iter().copied());
            debug!(region, ?index, categories = pairs.len(), "crime index");
            RegionIndex {
                region: region.to_string(),
                base_year,
                current_year,
                categories_used: pairs.len(),
                index,
                status: index.map(|i| SafetyStatus::from_index(i).to_string()),
            }
        })
        .collect()
}
