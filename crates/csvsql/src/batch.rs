//! Batch conversion of a directory of CSV files.
//!
//! Files are converted one at a time in file-name order. A failure in one file
//! is logged and recorded in the [`BatchSummary`]; only problems outside a
//! single file (unreadable input directory, output location) stop the run.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::converter::{Conversion, ConvertConfig, Converter, SkipReason};
use crate::error::{CsvSqlError, Result};
use crate::input::{derive_table_name, list_source_files};
use crate::sql::STATEMENT_SEPARATOR;

/// Default input directory for per-file mode.
pub const DEFAULT_INPUT_DIR: &str = "./csv_files";
/// Default output directory for per-file mode.
pub const DEFAULT_OUTPUT_DIR: &str = "./sql_file_done";
/// Default input directory for combined mode.
pub const DEFAULT_COMBINED_INPUT_DIR: &str = "./csv";
/// Default output file for combined mode.
pub const DEFAULT_COMBINED_OUTPUT: &str = "./combined.sql";
/// Default source file extension.
pub const DEFAULT_EXTENSION: &str = "csv";

/// Where generated SQL goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum OutputMode {
    /// One `<table>.sql` file per source, in `output_dir` (created if absent).
    PerFile { output_dir: PathBuf },
    /// Every statement block concatenated into `output_file`.
    Combined { output_file: PathBuf },
}

/// Configuration for a batch run.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Directory holding the source files.
    pub input_dir: PathBuf,
    /// Source file extension, without the dot.
    pub extension: String,
    /// Output destination.
    pub output: OutputMode,
    /// Per-file conversion settings.
    pub convert: ConvertConfig,
}

impl BatchConfig {
    /// Per-file mode between two directories.
    pub fn per_file(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            output: OutputMode::PerFile {
                output_dir: output_dir.into(),
            },
            convert: ConvertConfig::default(),
        }
    }

    /// Combined mode into a single file.
    pub fn combined(input_dir: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            output: OutputMode::Combined {
                output_file: output_file.into(),
            },
            convert: ConvertConfig::default(),
        }
    }

    /// Set the conversion settings.
    pub fn with_convert(mut self, convert: ConvertConfig) -> Self {
        self.convert = convert;
        self
    }

    /// Set the source file extension.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self::per_file(DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR)
    }
}

/// What happened to one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    /// Statements written to their own file.
    Written {
        output: PathBuf,
        rows: usize,
        dropped_rows: usize,
    },
    /// Statements appended to the combined output.
    Combined { rows: usize, dropped_rows: usize },
    /// No usable content.
    Skipped { reason: SkipReason },
    /// Conversion or write failed.
    Failed { error: String },
}

/// Per-file entry in a [`BatchSummary`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileOutcome {
    /// Source file path.
    pub source: PathBuf,
    /// Derived table name.
    pub table_name: String,
    /// Outcome.
    #[serde(flatten)]
    pub status: FileStatus,
}

/// Result of a batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Output destination.
    pub output: OutputMode,
    /// Per-file outcomes in processing order.
    pub files: Vec<FileOutcome>,
    /// Whether the combined output file was written. Always false in per-file mode.
    #[serde(default)]
    pub combined_written: bool,
}

impl BatchSummary {
    /// Number of files that produced SQL.
    pub fn converted(&self) -> usize {
        self.files
            .iter()
            .filter(|f| {
                matches!(
                    f.status,
                    FileStatus::Written { .. } | FileStatus::Combined { .. }
                )
            })
            .count()
    }

    /// Number of files skipped for lack of content.
    pub fn skipped(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.status, FileStatus::Skipped { .. }))
            .count()
    }

    /// Number of files that failed.
    pub fn failed(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.status, FileStatus::Failed { .. }))
            .count()
    }

    /// Total rows dropped across all files.
    pub fn dropped_rows(&self) -> usize {
        self.files
            .iter()
            .map(|f| match f.status {
                FileStatus::Written { dropped_rows, .. } | FileStatus::Combined { dropped_rows, .. } => {
                    dropped_rows
                }
                _ => 0,
            })
            .sum()
    }

    /// Serialize the summary as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Runs a batch conversion.
pub struct BatchRunner {
    config: BatchConfig,
    converter: Converter,
}

impl BatchRunner {
    /// Create a runner for the given configuration.
    pub fn new(config: BatchConfig) -> Self {
        let converter = Converter::with_config(config.convert.clone());
        Self { config, converter }
    }

    /// Convert every matching file in the input directory.
    pub fn run(&self) -> Result<BatchSummary> {
        let files = list_source_files(&self.config.input_dir, &self.config.extension)?;
        if files.is_empty() {
            warn!(dir = %self.config.input_dir.display(), "No source files found");
        }

        match &self.config.output {
            OutputMode::PerFile { output_dir } => self.run_per_file(&files, output_dir),
            OutputMode::Combined { output_file } => self.run_combined(&files, output_file),
        }
    }

    fn run_per_file(&self, files: &[PathBuf], output_dir: &Path) -> Result<BatchSummary> {
        fs::create_dir_all(output_dir).map_err(|e| CsvSqlError::io(output_dir, e))?;

        let mut written_tables: HashSet<String> = HashSet::new();
        let mut outcomes = Vec::with_capacity(files.len());

        for path in files {
            let table_name = self.announce(path);
            let status = match self.converter.convert_file(path, &table_name) {
                Ok(report) => match &report.conversion {
                    Conversion::Empty { reason } => skipped(path, *reason),
                    Conversion::SchemaOnly { sql } | Conversion::SchemaAndData { sql } => {
                        let output = output_dir.join(format!("{}.sql", table_name));
                        if !written_tables.insert(table_name.clone()) {
                            warn!(table = %table_name, output = %output.display(), "Table already written in this batch, overwriting");
                        }
                        match write_sql(&output, sql) {
                            Ok(()) => {
                                info!(output = %output.display(), "SQL written");
                                FileStatus::Written {
                                    output,
                                    rows: report.rows_accepted,
                                    dropped_rows: report.rows_dropped(),
                                }
                            }
                            Err(e) => failed(path, &e),
                        }
                    }
                },
                Err(e) => failed(path, &e),
            };

            outcomes.push(FileOutcome {
                source: path.clone(),
                table_name,
                status,
            });
        }

        Ok(BatchSummary {
            output: self.config.output.clone(),
            files: outcomes,
            combined_written: false,
        })
    }

    fn run_combined(&self, files: &[PathBuf], output_file: &Path) -> Result<BatchSummary> {
        let mut blocks: Vec<String> = Vec::new();
        let mut outcomes = Vec::with_capacity(files.len());

        for path in files {
            let table_name = self.announce(path);
            let status = match self.converter.convert_file(path, &table_name) {
                Ok(report) => match &report.conversion {
                    Conversion::Empty { reason } => skipped(path, *reason),
                    Conversion::SchemaOnly { sql } | Conversion::SchemaAndData { sql } => {
                        blocks.push(sql.clone());
                        FileStatus::Combined {
                            rows: report.rows_accepted,
                            dropped_rows: report.rows_dropped(),
                        }
                    }
                },
                Err(e) => failed(path, &e),
            };

            outcomes.push(FileOutcome {
                source: path.clone(),
                table_name,
                status,
            });
        }

        let combined_written = if blocks.is_empty() {
            warn!("No valid SQL content generated.");
            false
        } else {
            if let Some(parent) = output_file.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| CsvSqlError::io(parent, e))?;
            }
            write_sql(output_file, &blocks.join(STATEMENT_SEPARATOR))?;
            info!(output = %output_file.display(), "All SQL scripts combined");
            true
        };

        Ok(BatchSummary {
            output: self.config.output.clone(),
            files: outcomes,
            combined_written,
        })
    }

    fn announce(&self, path: &Path) -> String {
        let table_name = derive_table_name(path);
        info!(file = %path.display(), "Processing");
        info!(table = %table_name, "Extracted table name");
        table_name
    }
}

fn skipped(path: &Path, reason: SkipReason) -> FileStatus {
    warn!(file = %path.display(), %reason, "Skipping file as it has no valid content");
    FileStatus::Skipped { reason }
}

fn failed(path: &Path, err: &CsvSqlError) -> FileStatus {
    error!(file = %path.display(), error = %err, "Error processing file");
    FileStatus::Failed {
        error: err.to_string(),
    }
}

fn write_sql(path: &Path, sql: &str) -> Result<()> {
    let mut contents = String::with_capacity(sql.len() + 1);
    contents.push_str(sql);
    contents.push('\n');
    fs::write(path, contents).map_err(|e| CsvSqlError::io(path, e))
}
