use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, anyhow, ensure};
use comfy_table::Table;
use tracing::{debug, info, info_span};

use survey_ingest::{ReadOptions, TextEncoding, profile_columns, read_csv};
use survey_model::{MappingCatalog, SurveyLayout};
use survey_report::{SUMMARY_COUNT_COLUMN, WriteOptions, summarize_treatment, write_summary};
use survey_transform::run_pipeline;

use crate::cli::{InspectArgs, RunArgs};
use crate::config::{JobConfig, load_config};
use crate::summary::apply_table_style;
use crate::types::RunResult;

pub fn run_survey(args: &RunArgs) -> Result<RunResult> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => JobConfig::default(),
    };
    let input = args
        .input
        .clone()
        .or_else(|| config.input_path.clone())
        .ok_or_else(|| anyhow!("no input path given (argument or config input_path)"))?;
    let output_dir = args
        .output_dir
        .clone()
        .or_else(|| config.output_directory.clone())
        .unwrap_or_else(|| default_output_dir(&input));
    let job_name = config
        .app_name
        .clone()
        .unwrap_or_else(|| "survey-summary".to_string());

    let job_span = info_span!("job", name = %job_name);
    let _job_guard = job_span.enter();
    if config.master_url.is_some() || config.memory.is_some() {
        debug!(
            master_url = config.master_url.as_deref(),
            memory = config.memory.as_deref(),
            "execution settings accepted for an external engine"
        );
    }

    let layout = SurveyLayout::default();
    let read_options = read_options(args.no_infer_types, args.lossy_utf8);

    // =========================================================================
    // Stage 1: Ingest
    // =========================================================================
    let ingest_start = Instant::now();
    let df = read_csv(&input, &read_options).context("read survey csv")?;
    info!(
        rows = df.height(),
        columns = df.width(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    for profile in profile_columns(&df).context("profile columns")? {
        debug!(
            column = %profile.name,
            missing = profile.null_count,
            distinct = profile.distinct.len(),
            "column profile"
        );
    }

    // =========================================================================
    // Stage 2: Transform
    // =========================================================================
    let transform_start = Instant::now();
    let (cleaned, catalog, report) =
        run_pipeline(df, &layout).context("transform survey table")?;
    debug!(
        duration_ms = transform_start.elapsed().as_millis(),
        "transform stage finished"
    );

    // =========================================================================
    // Stage 3: Aggregate and write
    // =========================================================================
    let summary = summarize_treatment(&cleaned, &layout).context("aggregate treatment summary")?;
    let total: i64 = summary
        .column(SUMMARY_COUNT_COLUMN)
        .context("summary count column")?
        .i64()
        .context("summary count dtype")?
        .into_iter()
        .map(|count| count.unwrap_or(0))
        .sum();
    ensure!(
        total as usize == cleaned.height(),
        "summary counts ({total}) do not match cleaned row count ({})",
        cleaned.height()
    );

    let write_options = WriteOptions::default()
        .with_partitions(args.partitions)
        .with_header(!args.no_header);
    let part_files =
        write_summary(&summary, &output_dir, &write_options).context("write summary")?;

    let mappings_path = match &args.mappings_out {
        Some(path) => {
            write_mappings(path, &catalog)?;
            Some(path.clone())
        }
        None => None,
    };

    Ok(RunResult {
        input,
        output_dir,
        part_files,
        summary_rows: summary.height(),
        report,
        catalog,
        mappings_path,
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let read_options = read_options(args.no_infer_types, args.lossy_utf8);
    let df = read_csv(&args.input, &read_options).context("read survey csv")?;
    let profiles = profile_columns(&df).context("profile columns")?;

    let mut table = Table::new();
    table.set_header(vec!["Column", "Missing", "Distinct values"]);
    apply_table_style(&mut table);
    for profile in profiles {
        table.add_row(vec![
            profile.name,
            profile.null_count.to_string(),
            profile.distinct.join(", "),
        ]);
    }
    println!("Rows: {}", df.height());
    println!("{table}");
    Ok(())
}

pub fn run_columns() -> Result<()> {
    let layout = SurveyLayout::default();
    let mut table = Table::new();
    table.set_header(vec!["Categorical column", "Encoded column"]);
    apply_table_style(&mut table);
    for column in &layout.categorical_columns {
        table.add_row(vec![
            column.clone(),
            SurveyLayout::encoded_column_name(column),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn read_options(no_infer_types: bool, lossy_utf8: bool) -> ReadOptions {
    let encoding = if lossy_utf8 {
        TextEncoding::LossyUtf8
    } else {
        TextEncoding::Utf8
    };
    ReadOptions::default()
        .with_inferred_types(!no_infer_types)
        .with_encoding(encoding)
}

fn default_output_dir(input: &Path) -> PathBuf {
    input
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join("summary")
}

fn write_mappings(path: &Path, catalog: &MappingCatalog) -> Result<()> {
    let file = fs::File::create(path)
        .with_context(|| format!("create mappings file {}", path.display()))?;
    serde_json::to_writer_pretty(file, &catalog.to_index_maps())
        .context("serialize mapping catalog")?;
    info!(path = %path.display(), columns = catalog.len(), "mapping catalog written");
    Ok(())
}
