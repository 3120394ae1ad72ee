//! Integration tests: the full pipeline over the bundled table.

use crimecast_analysis::{
    AnalysisConfig, SummaryReport, analyze_table, crime_indices, to_json, write_summary_csv,
};
use crimecast_arima::ArimaSpec;
use crimecast_dataset::CrimeTable;

#[test]
fn every_series_is_analyzed_in_key_order() {
    let table = CrimeTable::builtin().unwrap();
    let analyses = analyze_table(&table, &AnalysisConfig::default());
    assert_eq!(analyses.len(), 36);

    let keys: Vec<(String, String)> = analyses
        .iter()
        .map(|a| (a.region.clone(), a.category.clone()))
        .collect();
    let expected: Vec<(String, String)> = table
        .iter()
        .map(|(k, _)| (k.region.clone(), k.category.clone()))
        .collect();
    assert_eq!(keys, expected);

    let fitted = analyses.iter().filter(|a| a.model.completed().is_some()).count();
    assert!(fitted >= 30, "only {fitted}/36 series fitted");
}

#[test]
fn failures_stay_per_series() {
    // AR order far beyond what 12 observations allow: every fit fails,
    // descriptive output is still produced.
    let config = AnalysisConfig::default().with_spec(ArimaSpec::new(12, 1, 0));
    let table = CrimeTable::builtin().unwrap();
    let analyses = analyze_table(&table, &config);
    assert_eq!(analyses.len(), 36);
    for a in &analyses {
        assert!(a.model.failure().unwrap().contains("invalid order"));
        assert!(a.descriptives.is_some());
        assert!(a.stationarity.completed().is_some());
    }
}

#[test]
fn summary_csv_written_to_disk() {
    let table = CrimeTable::builtin().unwrap();
    let config = AnalysisConfig::default();
    let analyses = analyze_table(&table, &config);
    let report = SummaryReport::new(&analyses, config.horizon());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Crime_Analysis_Summary_Report.csv");
    write_summary_csv(&report, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 37);
    assert!(lines[0].starts_with("State,Crime,Mean (2001-2012),Trend,Forecast 2013-2015 (Avg)"));
    assert!(
        lines
            .iter()
            .any(|l| l.starts_with("Chhattisgarh,MURDER,1005.0000,Increasing,"))
    );
}

#[test]
fn analysis_serializes_to_json() {
    let table = CrimeTable::builtin().unwrap();
    let analyses = analyze_table(&table, &AnalysisConfig::default());
    let json = to_json(&analyses[0..2]).unwrap();
    assert!(json.contains("\"region\": \"Chhattisgarh\""));
    assert!(json.contains("\"moving_average\""));
    assert!(json.contains("\"stationarity\""));
    assert!(json.contains("\"status\""));
}

#[test]
fn crime_indices_for_builtin_table() {
    let table = CrimeTable::builtin().unwrap();
    let indices = crime_indices(&table, 2001, 2012);
    assert_eq!(indices.len(), 6);
    for idx in &indices {
        let value = idx.index.unwrap();
        let status = idx.status.as_deref().unwrap();
        match status {
            "SAFE" => assert!(value < 100.0),
            "MODERATE" => assert!((100.0..120.0).contains(&value)),
            "NOT SAFE" => assert!(value >= 120.0),
            other => panic!("unexpected status {other}"),
        }
    }
}
