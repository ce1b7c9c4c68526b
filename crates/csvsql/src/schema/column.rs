//! Column definition.

use serde::{Deserialize, Serialize};

use super::types::ColumnType;

/// A table column derived from one header field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name as it will appear in SQL.
    pub name: String,
    /// Zero-based position in the header.
    pub position: usize,
    /// Resolved type. Text until inference says otherwise.
    pub column_type: ColumnType,
}

impl Column {
    /// Create a text column at the given position.
    pub fn new(name: impl Into<String>, position: usize) -> Self {
        Self {
            name: name.into(),
            position,
            column_type: ColumnType::Text,
        }
    }

    /// Set the resolved type.
    pub fn with_type(mut self, column_type: ColumnType) -> Self {
        self.column_type = column_type;
        self
    }
}
