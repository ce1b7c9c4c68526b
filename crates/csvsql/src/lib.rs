//! csvsql: turn a directory of CSV exports into SQL scripts.
//!
//! Each CSV file becomes one table. The table name comes from the file name,
//! the columns from the header row, and the column types from the values.
//! Output is plain text: a `CREATE TABLE IF NOT EXISTS` statement followed by
//! a bulk `INSERT` when the file has data rows. Nothing is executed against a
//! database.
//!
//! # Example
//!
//! ```
//! use csvsql::{Conversion, Converter};
//!
//! let csv = "id,name\n1,O'Brien\n2,Smith\n";
//! let report = Converter::new().convert_reader(csv.as_bytes(), "people").unwrap();
//!
//! assert!(matches!(report.conversion, Conversion::SchemaAndData { .. }));
//! assert!(report.conversion.sql().unwrap().contains("'O''Brien'"));
//! ```
//!
//! Whole directories go through [`batch::BatchRunner`].

pub mod accumulator;
pub mod batch;
pub mod error;
pub mod inference;
pub mod input;
pub mod schema;
pub mod sql;

mod converter;

pub use crate::converter::{Conversion, ConversionReport, ConvertConfig, Converter, SkipReason};
pub use accumulator::{RowAccumulator, RowWarning};
pub use batch::{BatchConfig, BatchRunner, BatchSummary, FileOutcome, FileStatus, OutputMode};
pub use error::{CsvSqlError, Result};
pub use input::{derive_table_name, ParserConfig};
pub use schema::{Column, ColumnType, Dialect, TableDescriptor};
