use std::path::PathBuf;

use survey_model::MappingCatalog;
use survey_transform::TransformReport;

/// Outcome of a full pipeline run.
#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub part_files: Vec<PathBuf>,
    pub summary_rows: usize,
    pub report: TransformReport,
    pub catalog: MappingCatalog,
    pub mappings_path: Option<PathBuf>,
}
