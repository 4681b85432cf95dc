use std::fs;

use polars::prelude::DataType;
use survey_ingest::{IngestError, ReadOptions, read_csv};

#[test]
fn reads_csv_with_header_and_inferred_types() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("survey.csv");
    fs::write(&path, "Age,Gender\n25,Female\n44,Male\n").unwrap();

    let df = read_csv(&path, &ReadOptions::default()).unwrap();
    assert_eq!(df.height(), 2);
    assert_eq!(df.width(), 2);
    assert!(matches!(
        df.column("Age").unwrap().dtype(),
        DataType::Int64 | DataType::Int32
    ));
}

#[test]
fn type_inference_can_be_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("survey.csv");
    fs::write(&path, "Age,Gender\n25,Female\n").unwrap();

    let options = ReadOptions::default().with_inferred_types(false);
    let df = read_csv(&path, &options).unwrap();
    assert_eq!(df.column("Age").unwrap().dtype(), &DataType::String);
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");

    let err = read_csv(&path, &ReadOptions::default()).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn header_only_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    fs::write(&path, "Age,Gender\n").unwrap();

    let err = read_csv(&path, &ReadOptions::default()).unwrap_err();
    assert!(matches!(err, IngestError::EmptyCsv { .. }));
}
