//! One-row-per-series summary report.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::AnalysisError;
use crate::output::SeriesAnalysis;

/// Summary of one series' analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub region: String,
    pub category: String,
    pub mean: f64,
    pub trend: String,
    /// Mean of the point forecasts; `None` when the fit failed.
    pub forecast_mean: Option<f64>,
    pub change_percent: Option<f64>,
    pub aic: Option<f64>,
    pub bic: Option<f64>,
    pub adf_p_value: Option<f64>,
    /// `"ok"` or `"failed: <reason>"`.
    pub status: String,
}

impl SummaryRow {
    fn from_analysis(a: &SeriesAnalysis) -> Self {
        let model = a.model.completed();
        let status = match a.model.failure() {
            None => "ok".to_string(),
            Some(reason) => format!("failed: {reason}"),
        };
        Self {
            region: a.region.clone(),
            category: a.category.clone(),
            mean: crimecast_stats::mean(&a.values),
            trend: a.trend.clone(),
            forecast_mean: model.map(|m| m.forecast_mean()),
            change_percent: a.change_percent,
            aic: model.map(|m| m.aic),
            bic: model.map(|m| m.bic),
            adf_p_value: a.stationarity.completed().map(|s| s.p_value),
            status,
        }
    }
}

/// Summary rows plus the year span the column headers describe.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    /// First and last observed year over all series.
    pub span: Option<(i32, i32)>,
    pub horizon: usize,
    pub rows: Vec<SummaryRow>,
}

/// Collapses analyses into summary rows, keeping their order.
pub fn summary_rows(analyses: &[SeriesAnalysis]) -> Vec<SummaryRow> {
    analyses.iter().map(SummaryRow::from_analysis).collect()
}

impl SummaryReport {
    pub fn new(analyses: &[SeriesAnalysis], horizon: usize) -> Self {
        let first = analyses.iter().filter_map(|a| a.years.first()).min();
        let last = analyses.iter().filter_map(|a| a.years.last()).max();
        Self {
            span: first.zip(last).map(|(f, l)| (*f, *l)),
            horizon,
            rows: summary_rows(analyses),
        }
    }

    /// CSV column headers, e.g. `Mean (2001-2012)` and
    /// `Forecast 2013-2015 (Avg)`.
    pub fn headers(&self) -> Vec<String> {
        let (mean, forecast) = match self.span {
            Some((first, last)) => (
                format!("Mean ({first}-{last})"),
                format!(
                    "Forecast {}-{} (Avg)",
                    last + 1,
                    last + self.horizon as i32
                ),
            ),
            None => ("Mean".to_string(), "Forecast (Avg)".to_string()),
        };
        vec![
            "State".to_string(),
            "Crime".to_string(),
            mean,
            "Trend".to_string(),
            forecast,
            "Change %".to_string(),
            "AIC".to_string(),
            "BIC".to_string(),
            "ADF p-value".to_string(),
            "Status".to_string(),
        ]
    }

    /// Writes the report as CSV. Missing values are empty cells.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), AnalysisError> {
        let mut out = csv::Writer::from_writer(writer);
        out.write_record(self.headers())?;
        for row in &self.rows {
            out.write_record([
                row.region.clone(),
                row.category.clone(),
                cell(Some(row.mean)),
                row.trend.clone(),
                cell(row.forecast_mean),
                cell(row.change_percent),
                cell(row.aic),
                cell(row.bic),
                cell(row.adf_p_value),
                row.status.clone(),
            ])?;
        }
        out.flush()?;
        Ok(())
    }
}

fn cell(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.4}")).unwrap_or_default()
}

/// Writes `report` as CSV to `path`, replacing any existing file.
pub fn write_summary_csv(report: &SummaryReport, path: &Path) -> Result<(), AnalysisError> {
    let file = std::fs::File::create(path)?;
    report.write_csv(std::io::BufWriter::new(file))?;
    info!(path = %path.display(), rows = report.rows.len(), "summary report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{ForecastPoint, ModelReport, Outcome, StationarityReport};

    fn analysis(region: &str, model: Outcome<ModelReport>) -> SeriesAnalysis {
        SeriesAnalysis {
            region: region.to_string(),
            category: "MURDER".to_string(),
            years: vec![2001, 2002, 2003],
            values: vec![10.0, 20.0, 30.0],
            descriptives: None,
            trend: "Increasing".to_string(),
            change_percent: Some(200.0),
            moving_average: vec![None, Some(20.0), None],
            acf: None,
            pacf: None,
            stationarity: Outcome::Completed(StationarityReport {
                statistic: -1.0,
                p_value: 0.5,
                used_lag: 0,
                nobs: 2,
                critical_values: Default::default(),
                is_stationary: false,
            }),
            model,
        }
    }

    fn model() -> ModelReport {
        ModelReport {
            order: [0, 1, 0],
            ar: vec![],
            ma: vec![],
            mean: 0.0,
            sigma2: 1.0,
            log_likelihood: -2.0,
            aic: 6.0,
            bic: 5.5,
            residuals: vec![10.0, 10.0],
            forecast: vec![
                ForecastPoint {
                    year: 2004,
                    point: 30.0,
                    lower: 28.0,
                    upper: 32.0,
                },
                ForecastPoint {
                    year: 2005,
                    point: 32.0,
                    lower: 29.0,
                    upper: 35.0,
                },
            ],
        }
    }

    #[test]
    fn rows_for_completed_and_failed_fits() {
        let analyses = vec![
            analysis("Goa", Outcome::Completed(model())),
            analysis(
                "Assam",
                Outcome::Failed {
                    reason: "estimation did not converge: flat".to_string(),
                },
            ),
        ];
        let rows = summary_rows(&analyses);
        assert_eq!(rows[0].status, "ok");
        assert_eq!(rows[0].forecast_mean, Some(31.0));
        assert_eq!(rows[0].mean, 20.0);
        assert_eq!(rows[1].status, "failed: estimation did not converge: flat");
        assert_eq!(rows[1].aic, None);
        assert_eq!(rows[1].adf_p_value, Some(0.5));
    }

    #[test]
    fn headers_follow_year_span() {
        let report = SummaryReport::new(&[analysis("Goa", Outcome::Completed(model()))], 2);
        let headers = report.headers();
        assert_eq!(headers[2], "Mean (2001-2003)");
        assert_eq!(headers[4], "Forecast 2004-2005 (Avg)");
        assert_eq!(headers.len(), 10);
    }

    #[test]
    fn csv_has_empty_cells_for_failed_fits() {
        let report = SummaryReport::new(
            &[analysis(
                "Assam",
                Outcome::Failed {
                    reason: "bad".to_string(),
                },
            )],
            3,
        );
        let mut buf = Vec::new();
        report.write_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "State,Crime,Mean (2001-2003),Trend,Forecast 2004-2006 (Avg),Change %,AIC,BIC,ADF p-value,Status"
        );
        assert_eq!(
            lines[1],
            "Assam,MURDER,20.0000,Increasing,,200.0000,,,0.5000,failed: bad"
        );
    }

    #[test]
    fn empty_report_uses_plain_headers() {
        let report = SummaryReport::new(&[], 3);
        assert_eq!(report.headers()[2], "Mean");
        assert!(report.rows.is_empty());
    }
}
