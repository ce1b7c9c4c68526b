//! Per-column reconciliation of value types.

use crate::schema::ColumnType;

use super::value::infer_value;

/// Accumulates type evidence for one column using widen-on-conflict.
///
/// Every present value is observed, so the resolved type holds for all rows.
/// Missing values carry no evidence. A column with no evidence resolves to
/// [`ColumnType::Text`].
#[derive(Debug, Clone, Default)]
pub struct TypeTally {
    current: Option<ColumnType>,
    observed: usize,
    nulls: usize,
}

impl TypeTally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one field value.
    pub fn observe(&mut self, value: Option<&str>) {
        let Some(value) = value else {
            self.nulls += 1;
            return;
        };
        self.observed += 1;

        // Text absorbs everything
        if self.current == Some(ColumnType::Text) {
            return;
        }

        let detected = infer_value(value);
        self.current = Some(match self.current {
            Some(current) => current.widen(detected),
            None => detected,
        });
    }

    /// The reconciled column type.
    pub fn resolve(&self) -> ColumnType {
        self.current.unwrap_or(ColumnType::Text)
    }

    /// Number of non-null values observed.
    pub fn observed(&self) -> usize {
        self.observed
    }

    /// Number of null values observed.
    pub fn nulls(&self) -> usize {
        self.nulls
    }
}
