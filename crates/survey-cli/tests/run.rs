use std::fs;
use std::path::Path;

use survey_cli::cli::RunArgs;
use survey_cli::commands::run_survey;
use survey_model::SurveyLayout;

/// Write a small survey CSV with the full declared column set.
fn write_survey_csv(path: &Path) {
    let layout = SurveyLayout::default();
    let mut header = vec![
        "Age".to_string(),
        "Gender".to_string(),
        "Country".to_string(),
        "work_interfere".to_string(),
    ];
    header.extend(layout.categorical_columns.iter().cloned());

    let rows = [
        ("25", "Female", "United States", "Yes"),
        ("150", "Male", "Canada", "No"),
        ("30", "m", "Canada", "No"),
        ("8", "unknown", "Canada", "NA"),
    ];
    let mut contents = header.join(",");
    contents.push('\n');
    for (age, gender, country, treatment) in rows {
        let mut cells = vec![
            age.to_string(),
            gender.to_string(),
            country.to_string(),
            "Sometimes".to_string(),
        ];
        for column in &layout.categorical_columns {
            if column == &layout.treatment_column {
                cells.push(treatment.to_string());
            } else {
                cells.push("Yes".to_string());
            }
        }
        contents.push_str(&cells.join(","));
        contents.push('\n');
    }
    fs::write(path, contents).unwrap();
}

fn run_args(input: &Path, output_dir: &Path) -> RunArgs {
    RunArgs {
        input: Some(input.to_path_buf()),
        config: None,
        output_dir: Some(output_dir.to_path_buf()),
        partitions: 1,
        no_header: false,
        mappings_out: None,
        no_infer_types: false,
        lossy_utf8: false,
    }
}

#[test]
fn run_writes_the_treatment_summary() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("survey.csv");
    write_survey_csv(&input);
    let output_dir = dir.path().join("out");

    let result = run_survey(&run_args(&input, &output_dir)).unwrap();

    assert_eq!(result.report.rows_in, 4);
    assert_eq!(result.report.rows_dropped_unresolved_age, 1);
    assert_eq!(result.report.rows_out, 3);
    assert_eq!(result.part_files.len(), 1);
    assert_eq!(result.summary_rows, 3);

    let contents = fs::read_to_string(&result.part_files[0]).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines[0],
        "StandardizedGender,AgeGroup,treatment_index,count"
    );
    // Survivors: the sentinel treatment answer became absent and encodes to
    // the reserved index; the absent-gender group sorts first.
    assert_eq!(lines[1], ",Child,2,1");
    assert_eq!(lines[2], "Female,Adult,1,1");
    assert_eq!(lines[3], "Male,Adult,0,1");
}

#[test]
fn run_exports_the_mapping_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("survey.csv");
    write_survey_csv(&input);
    let output_dir = dir.path().join("out");
    let mappings = dir.path().join("mappings.json");

    let mut args = run_args(&input, &output_dir);
    args.mappings_out = Some(mappings.clone());
    let result = run_survey(&args).unwrap();
    assert_eq!(result.mappings_path.as_deref(), Some(mappings.as_path()));

    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&mappings).unwrap()).unwrap();
    assert_eq!(parsed["treatment"]["0"], "No");
    assert_eq!(parsed["treatment"]["1"], "Yes");
    assert_eq!(parsed["benefits"]["0"], "Yes");
}

#[test]
fn config_file_supplies_missing_paths() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("survey.csv");
    write_survey_csv(&input);
    let output_dir = dir.path().join("from-config");
    let config_path = dir.path().join("config.json");
    fs::write(
        &config_path,
        format!(
            r#"{{"master_url": "local", "app_name": "survey", "memory": "1g",
                "file_path": {:?}, "output_directory": {:?}}}"#,
            input.display().to_string(),
            output_dir.display().to_string()
        ),
    )
    .unwrap();

    let args = RunArgs {
        input: None,
        config: Some(config_path),
        output_dir: None,
        partitions: 1,
        no_header: false,
        mappings_out: None,
        no_infer_types: false,
        lossy_utf8: false,
    };
    let result = run_survey(&args).unwrap();
    assert_eq!(result.output_dir, output_dir);
    assert!(output_dir.join("part-00000.csv").exists());
}

#[test]
fn existing_destination_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("survey.csv");
    write_survey_csv(&input);
    let output_dir = dir.path().join("out");
    fs::create_dir_all(&output_dir).unwrap();

    let err = run_survey(&run_args(&input, &output_dir)).unwrap_err();
    assert!(err.to_string().contains("write summary"));
}
