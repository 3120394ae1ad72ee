//! Integration test: loading tables from CSV files on disk.

use std::io::Write;
use std::path::Path;

use crimecast_dataset::{CrimeTable, DatasetError, read_csv};

#[test]
fn read_csv_file_not_found() {
    let err = read_csv(Path::new("/tmp/crimecast_test_nonexistent.csv")).unwrap_err();
    assert!(
        matches!(err, DatasetError::FileNotFound { .. }),
        "expected FileNotFound, got {err:?}",
    );
}

#[test]
fn builtin_table_survives_a_csv_round_trip() {
    let builtin = CrimeTable::builtin().unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "region,category,year,count").unwrap();
    for (key, series) in builtin.iter() {
        for (year, value) in series.years().zip(series.values()) {
            writeln!(file, "{},{},{},{}", key.region, key.category, year, value).unwrap();
        }
    }
    file.flush().unwrap();

    let loaded = read_csv(file.path()).unwrap();
    assert_eq!(loaded, builtin);
}

#[test]
fn multiple_series_with_different_spans() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "region,category,year,count\n\
         Goa,MURDER,1999,40\n\
         Goa,MURDER,2000,42\n\
         Kerala,THEFT,2010,900\n\
         Goa,MURDER,2001,39\n"
    )
    .unwrap();
    file.flush().unwrap();

    let table = read_csv(file.path()).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.year_span(), Some((1999, 2010)));
    assert_eq!(table.get("Goa", "MURDER").unwrap().last_year(), 2001);
    assert_eq!(table.regions(), vec!["Goa", "Kerala"]);
}
