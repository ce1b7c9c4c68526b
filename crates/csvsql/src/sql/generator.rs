//! CREATE TABLE and INSERT statement generation.

use crate::schema::{Dialect, Row, TableDescriptor};

/// Separator between statements in a block.
pub const STATEMENT_SEPARATOR: &str = "\n\n";

/// Renders a [`TableDescriptor`] as SQL text.
#[derive(Debug, Clone, Default)]
pub struct StatementGenerator {
    dialect: Dialect,
    insert_batch_size: Option<usize>,
}

impl StatementGenerator {
    /// Create a generator for the default dialect with one INSERT per table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SQL dialect.
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Split the data statement into INSERTs of at most `size` rows.
    ///
    /// `None` or zero keeps a single INSERT.
    pub fn with_insert_batch_size(mut self, size: Option<usize>) -> Self {
        self.insert_batch_size = size.filter(|&n| n > 0);
        self
    }

    /// The `CREATE TABLE IF NOT EXISTS` statement, one column per line.
    pub fn schema_statement(&self, table: &TableDescriptor) -> String {
        let columns: Vec<String> = table
            .columns
            .iter()
            .map(|c| {
                format!(
                    "  {} {}",
                    self.dialect.quote_identifier(&c.name),
                    self.dialect.type_name(c.column_type)
                )
            })
            .collect();

        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n{}\n);",
            self.dialect.quote_identifier(&table.name),
            columns.join(",\n")
        )
    }

    /// INSERT statements for all accepted rows, in source order.
    ///
    /// Empty when the table has no rows.
    pub fn data_statements(&self, table: &TableDescriptor) -> Vec<String> {
        if !table.has_rows() {
            return Vec::new();
        }

        let column_list: Vec<String> = table
            .columns
            .iter()
            .map(|c| self.dialect.quote_identifier(&c.name))
            .collect();
        let prefix = format!(
            "INSERT INTO {} ({})\nVALUES\n",
            self.dialect.quote_identifier(&table.name),
            column_list.join(", ")
        );

        let batch_size = self.insert_batch_size.unwrap_or(table.rows.len());
        table
            .rows
            .chunks(batch_size)
            .map(|batch| insert_statement(&prefix, batch))
            .collect()
    }

    /// The schema statement followed by any data statements.
    pub fn generate(&self, table: &TableDescriptor) -> String {
        let mut statements = vec![self.schema_statement(table)];
        statements.extend(self.data_statements(table));
        statements.join(STATEMENT_SEPARATOR)
    }
}

fn insert_statement(prefix: &str, rows: &[Row]) -> String {
    let tuples: Vec<String> = rows.iter().map(Row::to_tuple).collect();
    format!("{}{};", prefix, tuples.join(",\n"))
}
