//! Row accumulation for one source file.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::inference::TypeTally;
use crate::input::FieldMap;
use crate::schema::{Column, ColumnType, Row, TableDescriptor};
use crate::sql::escape_literal;

/// A data row dropped because its width differs from the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowWarning {
    /// 1-based line of the row in the source, when known.
    pub line: Option<u64>,
    /// Number of header columns.
    pub expected: usize,
    /// Number of fields in the row.
    pub actual: usize,
}

impl std::fmt::Display for RowWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(
                f,
                "line {}: expected {} fields, found {}",
                line, self.expected, self.actual
            ),
            None => write!(f, "expected {} fields, found {}", self.expected, self.actual),
        }
    }
}

/// Collects the columns and accepted rows of one table.
///
/// The column list is fixed when the accumulator is created. Each accepted row
/// is escaped immediately and its raw values feed the per-column type tally.
#[derive(Debug)]
pub struct RowAccumulator {
    table_name: String,
    columns: Vec<Column>,
    tallies: Vec<TypeTally>,
    rows: Vec<Row>,
    warnings: Vec<RowWarning>,
    infer_types: bool,
}

impl RowAccumulator {
    /// Start a table from its header fields.
    ///
    /// Returns `None` when there are no header fields.
    pub fn new(table_name: impl Into<String>, headers: Vec<String>, infer_types: bool) -> Option<Self> {
        if headers.is_empty() {
            return None;
        }

        let columns: Vec<Column> = headers
            .into_iter()
            .enumerate()
            .map(|(position, name)| Column::new(name, position))
            .collect();
        let tallies = vec![TypeTally::new(); columns.len()];

        Some(Self {
            table_name: table_name.into(),
            columns,
            tallies,
            rows: Vec::new(),
            warnings: Vec::new(),
            infer_types,
        })
    }

    /// Validate and append one data row.
    ///
    /// Rows whose field count differs from the column count are dropped and
    /// recorded as a [`RowWarning`]. Returns whether the row was accepted.
    pub fn accept(&mut self, fields: &FieldMap<'_>, line: Option<u64>) -> bool {
        if fields.field_count() != self.columns.len() {
            let warning = RowWarning {
                line,
                expected: self.columns.len(),
                actual: fields.field_count(),
            };
            warn!(table = %self.table_name, "Column count mismatch, skipping row ({})", warning);
            self.warnings.push(warning);
            return false;
        }

        let mut values = Vec::with_capacity(self.columns.len());
        for (column, tally) in self.columns.iter().zip(self.tallies.iter_mut()) {
            let value = fields.get(&column.name);
            if self.infer_types {
                tally.observe(value);
            }
            values.push(escape_literal(value));
        }
        self.rows.push(Row::new(values));
        true
    }

    /// Number of accepted rows so far.
    pub fn accepted(&self) -> usize {
        self.rows.len()
    }

    /// Number of dropped rows so far.
    pub fn dropped(&self) -> usize {
        self.warnings.len()
    }

    /// Returns true if at least one row was accepted.
    pub fn has_rows(&self) -> bool {
        !self.rows.is_empty()
    }

    /// Resolve column types and hand over the finished table.
    pub fn finish(self) -> (TableDescriptor, Vec<RowWarning>) {
        let infer_types = self.infer_types;
        let columns = self
            .columns
            .into_iter()
            .zip(self.tallies.iter())
            .map(|(column, tally)| {
                let resolved = if infer_types {
                    tally.resolve()
                } else {
                    ColumnType::Text
                };
                debug!(column = %column.name, column_type = ?resolved, "Resolved column type");
                column.with_type(resolved)
            })
            .collect();

        (
            TableDescriptor::new(self.table_name, columns, self.rows),
            self.warnings,
        )
    }
}
