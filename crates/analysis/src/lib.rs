//! # crimecast-analysis
//!
//! Feeds named series through the stationarity test, the ARIMA estimator
//! and the forecast engine, and formats the results for reporting.
//!
//! ```mermaid
//! graph LR
//!     T["CrimeTable"] -->|"analyze_table (rayon)"| A["Vec&lt;SeriesAnalysis&gt;"]
//!     A -->|"to_json"| J["JSON"]
//!     A -->|"SummaryReport::new"| S["SummaryReport"]
//!     S -->|"write_summary_csv"| C["CSV"]
//!     T -->|"crime_indices"| I["Vec&lt;RegionIndex&gt;"]
//! ```

mod config;
mod error;
mod index;
mod output;
mod pipeline;
mod summary;

pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use index::crime_indices;
pub use output::{
    DescriptiveSummary, ForecastPoint, ModelReport, Outcome, RegionIndex, SeriesAnalysis,
    StationarityReport, to_json,
};
pub use pipeline::{analyze_series, analyze_table};
pub use summary::{SummaryReport, SummaryRow, summary_rows, write_summary_csv};
