//! Table descriptor: one output table built from one source file.

use serde::{Deserialize, Serialize};

use super::column::Column;

/// One accepted data row, already rendered as SQL literals in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub values: Vec<String>,
}

impl Row {
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    /// Render as a parenthesized tuple, e.g. `('1', 'x')`.
    pub fn to_tuple(&self) -> String {
        format!("({})", self.values.join(", "))
    }
}

/// In-memory representation of one output table.
///
/// Built by the row accumulator and consumed once by the statement generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDescriptor {
    /// Table name derived from the source file name.
    pub name: String,
    /// Columns in header order.
    pub columns: Vec<Column>,
    /// Accepted rows in source order.
    pub rows: Vec<Row>,
}

impl TableDescriptor {
    /// Create a table descriptor.
    pub fn new(name: impl Into<String>, columns: Vec<Column>, rows: Vec<Row>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows,
        }
    }

    /// Get all column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Get a column by name.
    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of accepted rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if at least one data row was accepted.
    pub fn has_rows(&self) -> bool {
        !self.rows.is_empty()
    }
}
