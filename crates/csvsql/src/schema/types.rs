//! Column types and SQL dialects.

use serde::{Deserialize, Serialize};

/// Inferred data type for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Whole numbers that fit in 64 bits.
    Integer,
    /// Numbers with a fractional part.
    Float,
    /// Date or date-time values.
    Timestamp,
    /// Anything else. Also the fallback when there is no evidence.
    Text,
}

impl ColumnType {
    /// The narrowest type that holds values of both `self` and `other`.
    ///
    /// Integer widens to Float; every other disagreement widens to Text.
    pub fn widen(self, other: ColumnType) -> ColumnType {
        match (self, other) {
            (a, b) if a == b => a,
            (ColumnType::Integer, ColumnType::Float) | (ColumnType::Float, ColumnType::Integer) => {
                ColumnType::Float
            }
            _ => ColumnType::Text,
        }
    }
}

impl Default for ColumnType {
    fn default() -> Self {
        ColumnType::Text
    }
}

/// Width of the fallback text column.
pub const TEXT_WIDTH: usize = 255;

/// Target SQL flavor for identifiers and type keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// Backtick-quoted identifiers, `INT`, `FLOAT` and `DATETIME`.
    #[default]
    MySql,
    /// Double-quoted identifiers, `INTEGER`, `DOUBLE PRECISION` and `TIMESTAMP`.
    Ansi,
}

impl Dialect {
    /// SQL type keyword for a column type.
    pub fn type_name(&self, column_type: ColumnType) -> String {
        match (self, column_type) {
            (Dialect::MySql, ColumnType::Integer) => "INT".to_string(),
            (Dialect::MySql, ColumnType::Float) => "FLOAT".to_string(),
            (Dialect::MySql, ColumnType::Timestamp) => "DATETIME".to_string(),
            (Dialect::Ansi, ColumnType::Integer) => "INTEGER".to_string(),
            (Dialect::Ansi, ColumnType::Float) => "DOUBLE PRECISION".to_string(),
            (Dialect::Ansi, ColumnType::Timestamp) => "TIMESTAMP".to_string(),
            (_, ColumnType::Text) => format!("VARCHAR({})", TEXT_WIDTH),
        }
    }

    /// Quote an identifier, doubling any embedded quote character.
    pub fn quote_identifier(&self, name: &str) -> String {
        let quote = match self {
            Dialect::MySql => '`',
            Dialect::Ansi => '"',
        };
        let mut out = String::with_capacity(name.len() + 2);
        out.push(quote);
        for ch in name.chars() {
            if ch == quote {
                out.push(quote);
            }
            out.push(ch);
        }
        out.push(quote);
        out
    }
}

impl std::str::FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(Dialect::MySql),
            "ansi" | "postgres" | "postgresql" | "sqlite" => Ok(Dialect::Ansi),
            _ => Err(format!("Unknown dialect: {}. Use mysql or ansi.", s)),
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::MySql => write!(f, "mysql"),
            Dialect::Ansi => write!(f, "ansi"),
        }
    }
}
