//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use csvsql::batch::{
    DEFAULT_COMBINED_INPUT_DIR, DEFAULT_COMBINED_OUTPUT, DEFAULT_EXTENSION, DEFAULT_INPUT_DIR,
    DEFAULT_OUTPUT_DIR,
};
use csvsql::{ConvertConfig, CsvSqlError, Dialect, ParserConfig};

/// csvsql: turn a directory of CSV files into SQL scripts
#[derive(Parser)]
#[command(name = "csvsql")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write one <table>.sql file per CSV file
    Convert {
        /// Directory containing CSV files
        #[arg(value_name = "INPUT_DIR", default_value = DEFAULT_INPUT_DIR)]
        input: PathBuf,

        /// Directory for the generated SQL files (created if absent)
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        output: PathBuf,

        #[command(flatten)]
        options: ConvertOptions,
    },

    /// Write the statements for every CSV file into a single SQL file
    Combine {
        /// Directory containing CSV files
        #[arg(value_name = "INPUT_DIR", default_value = DEFAULT_COMBINED_INPUT_DIR)]
        input: PathBuf,

        /// Combined output file
        #[arg(short, long, default_value = DEFAULT_COMBINED_OUTPUT)]
        output: PathBuf,

        #[command(flatten)]
        options: ConvertOptions,
    },
}

/// Options shared by both output modes.
#[derive(Args, Clone, Debug)]
pub struct ConvertOptions {
    /// SQL dialect (mysql, ansi)
    #[arg(long, default_value = "mysql")]
    pub dialect: Dialect,

    /// Skip type inference and declare every column as VARCHAR(255)
    #[arg(long)]
    pub no_infer: bool,

    /// Write empty fields as NULL instead of ''
    #[arg(long)]
    pub empty_as_null: bool,

    /// Maximum rows per INSERT statement
    #[arg(long, value_name = "ROWS")]
    pub batch_size: Option<usize>,

    /// Field delimiter
    #[arg(short, long, default_value = ",")]
    pub delimiter: char,

    /// Source file extension
    #[arg(short, long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Print the batch summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl ConvertOptions {
    /// Build the library conversion settings.
    pub fn to_config(&self) -> csvsql::Result<ConvertConfig> {
        if !self.delimiter.is_ascii() {
            return Err(CsvSqlError::Config(format!(
                "Delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            )));
        }
        if self.batch_size == Some(0) {
            return Err(CsvSqlError::Config(
                "--batch-size must be at least 1".to_string(),
            ));
        }

        Ok(ConvertConfig {
            parser: ParserConfig {
                delimiter: self.delimiter as u8,
                empty_as_null: self.empty_as_null,
                ..ParserConfig::default()
            },
            infer_types: !self.no_infer,
            dialect: self.dialect,
            insert_batch_size: self.batch_size,
        })
    }
}
