//! # crimecast-dataset
//!
//! Supplies annual crime-count series to the analysis layer, keyed by
//! `(region, category)`.
//!
//! * [`CrimeTable::builtin()`]: the bundled 2001-2012 counts.
//! * [`read_csv()`]: a long-format `region,category,year,count` file.

mod builtin;
mod error;
mod reader;
mod table;

pub use builtin::BUILTIN_START_YEAR;
pub use error::DatasetError;
pub use reader::{read_csv, read_csv_from};
pub use table::{CrimeTable, SeriesKey};
