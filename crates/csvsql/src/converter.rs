//! File conversion: header, rows, statements.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ByteRecord, StringRecord};
use serde::{Deserialize, Serialize};
use tracing::{info_span, warn};

use crate::accumulator::{RowAccumulator, RowWarning};
use crate::error::{CsvSqlError, Result};
use crate::input::{decode_record, FieldMap, Parser, ParserConfig};
use crate::schema::{Column, Dialect};
use crate::sql::StatementGenerator;

/// Configuration for converting one source.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// CSV reader configuration.
    pub parser: ParserConfig,
    /// Infer column types. When false every column is text.
    pub infer_types: bool,
    /// Target SQL dialect.
    pub dialect: Dialect,
    /// Maximum rows per INSERT statement (None = one statement).
    pub insert_batch_size: Option<usize>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            infer_types: true,
            dialect: Dialect::default(),
            insert_batch_size: None,
        }
    }
}

/// Why a source produced no table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The header row had no fields.
    EmptyHeader,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::EmptyHeader => write!(f, "no headers found"),
        }
    }
}

/// Outcome of converting one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Conversion {
    /// No usable table.
    Empty { reason: SkipReason },
    /// A CREATE TABLE statement only; no rows were accepted.
    SchemaOnly { sql: String },
    /// A CREATE TABLE statement followed by INSERT statements.
    SchemaAndData { sql: String },
}

impl Conversion {
    /// The generated SQL, if any.
    pub fn sql(&self) -> Option<&str> {
        match self {
            Conversion::Empty { .. } => None,
            Conversion::SchemaOnly { sql } | Conversion::SchemaAndData { sql } => Some(sql),
        }
    }

    /// Returns true if no table was produced.
    pub fn is_empty(&self) -> bool {
        matches!(self, Conversion::Empty { .. })
    }
}

/// Result of converting one source, with row-level diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionReport {
    /// Table name the statements target.
    pub table_name: String,
    /// The conversion outcome.
    pub conversion: Conversion,
    /// Resolved columns, empty when no table was produced.
    pub columns: Vec<Column>,
    /// Number of rows in the data statement.
    pub rows_accepted: usize,
    /// Rows dropped for having the wrong number of fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub row_warnings: Vec<RowWarning>,
}

impl ConversionReport {
    fn empty(table_name: &str, reason: SkipReason) -> Self {
        Self {
            table_name: table_name.to_string(),
            conversion: Conversion::Empty { reason },
            columns: Vec::new(),
            rows_accepted: 0,
            row_warnings: Vec::new(),
        }
    }

    /// Number of dropped rows.
    pub fn rows_dropped(&self) -> usize {
        self.row_warnings.len()
    }
}

/// Converts CSV sources into SQL statement blocks.
///
/// The converter works on any byte stream. File handling is a thin wrapper
/// in [`Converter::convert_file`].
#[derive(Debug, Clone)]
pub struct Converter {
    config: ConvertConfig,
    parser: Parser,
    generator: StatementGenerator,
}

impl Converter {
    /// Create a converter with default configuration.
    pub fn new() -> Self {
        Self::with_config(ConvertConfig::default())
    }

    /// Create a converter with custom configuration.
    pub fn with_config(config: ConvertConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        let generator = StatementGenerator::new()
            .with_dialect(config.dialect)
            .with_insert_batch_size(config.insert_batch_size);

        Self {
            config,
            parser,
            generator,
        }
    }

    /// Convert a CSV stream into statements for `table_name`.
    ///
    /// A stream error aborts the conversion with [`CsvSqlError::Read`]. A stream
    /// without header fields is not an error: it yields [`Conversion::Empty`].
    /// Field bytes that are not valid UTF-8 are replaced with U+FFFD and the
    /// row is kept.
    pub fn convert_reader<R: Read>(&self, input: R, table_name: &str) -> Result<ConversionReport> {
        let _span = info_span!("convert", table = table_name).entered();

        let mut reader = self.parser.reader(input);
        let headers = self.parser.read_headers(&mut reader)?;

        let Some(mut accumulator) =
            RowAccumulator::new(table_name, headers.clone(), self.config.infer_types)
        else {
            warn!("No headers found");
            return Ok(ConversionReport::empty(table_name, SkipReason::EmptyHeader));
        };

        let empty_as_null = self.parser.config().empty_as_null;
        let mut raw = ByteRecord::new();
        let mut record = StringRecord::new();
        while reader.read_byte_record(&mut raw)? {
            let line = raw.position().map(|p| p.line());
            if decode_record(&raw, &mut record) {
                warn!(line, "Invalid UTF-8 in row, replaced with U+FFFD");
            }
            let fields = FieldMap::from_record(&headers, &record, empty_as_null);
            accumulator.accept(&fields, line);
        }

        let has_rows = accumulator.has_rows();
        if !has_rows {
            warn!("No data rows found. Only CREATE TABLE will be generated.");
        }

        let (table, row_warnings) = accumulator.finish();
        let sql = self.generator.generate(&table);
        let conversion = if has_rows {
            Conversion::SchemaAndData { sql }
        } else {
            Conversion::SchemaOnly { sql }
        };

        Ok(ConversionReport {
            table_name: table.name,
            conversion,
            rows_accepted: table.rows.len(),
            columns: table.columns,
            row_warnings,
        })
    }

    /// Convert a file on disk.
    pub fn convert_file(&self, path: impl AsRef<Path>, table_name: &str) -> Result<ConversionReport> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| CsvSqlError::io(path, e))?;
        self.convert_reader(BufReader::new(file), table_name)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
