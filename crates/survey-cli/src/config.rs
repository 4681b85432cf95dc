//! JSON job configuration.
//!
//! Mirrors the job config handed to the surrounding driver: execution
//! target, job name, and per-worker memory budget are accepted and logged,
//! but the in-process engine does not consume them. Command-line values
//! take precedence over file values.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Job configuration loaded from a JSON file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct JobConfig {
    /// Execution target of an external table engine, if any.
    pub master_url: Option<String>,
    /// Job name used in log spans.
    pub app_name: Option<String>,
    /// Per-worker memory budget of an external table engine, if any.
    pub memory: Option<String>,
    /// Path to the survey CSV file.
    #[serde(alias = "file_path")]
    pub input_path: Option<PathBuf>,
    /// Destination directory for summary part files.
    pub output_directory: Option<PathBuf>,
}

/// Load a job configuration file.
pub fn load_config(path: &Path) -> Result<JobConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let config = serde_json::from_str(&contents)
        .with_context(|| format!("parse config {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_driver_config_shape() {
        let config: JobConfig = serde_json::from_str(
            r#"{
                "master_url": "local",
                "app_name": "survey",
                "memory": "1g",
                "file_path": "data/survey.csv",
                "output_directory": "out"
            }"#,
        )
        .unwrap();
        assert_eq!(config.app_name.as_deref(), Some("survey"));
        assert_eq!(config.input_path, Some(PathBuf::from("data/survey.csv")));
        assert_eq!(config.output_directory, Some(PathBuf::from("out")));
    }

    #[test]
    fn missing_fields_default_to_none() {
        let config: JobConfig = serde_json::from_str("{}").unwrap();
        assert!(config.input_path.is_none());
        assert!(config.master_url.is_none());
    }
}
