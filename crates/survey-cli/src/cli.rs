//! CLI argument definitions for the survey summary tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "survey-summary",
    version,
    about = "Survey Summary - Clean a survey dataset and summarize treatment",
    long_about = "Clean and normalize a tabular survey dataset, encode its\n\
                  categorical columns with recoverable label mappings, and\n\
                  write an aggregated treatment summary as CSV part files."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a survey CSV, encode its categoricals, and write the summary.
    Run(RunArgs),

    /// Profile a survey CSV: per-column missing counts and distinct values.
    Inspect(InspectArgs),

    /// List the declared categorical columns and their encoded names.
    Columns,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the survey CSV file (or set input_path in the config file).
    #[arg(value_name = "SURVEY_CSV")]
    pub input: Option<PathBuf>,

    /// JSON job config file; command-line values take precedence.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Destination directory for summary part files
    /// (default: <input dir>/summary).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Number of summary part files to write.
    #[arg(long = "partitions", value_name = "N", default_value_t = 1)]
    pub partitions: usize,

    /// Omit the header row from written part files.
    #[arg(long = "no-header")]
    pub no_header: bool,

    /// Write the label mapping catalog as JSON.
    #[arg(long = "mappings-out", value_name = "PATH")]
    pub mappings_out: Option<PathBuf>,

    /// Read every input column as text instead of inferring types.
    #[arg(long = "no-infer-types")]
    pub no_infer_types: bool,

    /// Read the input as lossy UTF-8 instead of strict.
    #[arg(long = "lossy-utf8")]
    pub lossy_utf8: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to the survey CSV file.
    #[arg(value_name = "SURVEY_CSV")]
    pub input: PathBuf,

    /// Read every input column as text instead of inferring types.
    #[arg(long = "no-infer-types")]
    pub no_infer_types: bool,

    /// Read the input as lossy UTF-8 instead of strict.
    #[arg(long = "lossy-utf8")]
    pub lossy_utf8: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
