//! Ordered per-row field mapping.

use csv::StringRecord;
use indexmap::IndexMap;

/// One data row keyed by header name, in header order.
///
/// Headers without a value in the record are absent from the map, which the
/// escaper renders as `NULL`. `field_count` keeps the raw width of the record
/// so short and long rows can both be detected.
#[derive(Debug, Clone)]
pub struct FieldMap<'a> {
    fields: IndexMap<&'a str, Option<&'a str>>,
    field_count: usize,
}

impl<'a> FieldMap<'a> {
    /// Pair each header with the value at the same position.
    pub fn from_record(headers: &'a [String], record: &'a StringRecord, empty_as_null: bool) -> Self {
        let fields = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| {
                let value = if empty_as_null && value.is_empty() {
                    None
                } else {
                    Some(value)
                };
                (header.as_str(), value)
            })
            .collect();

        Self {
            fields,
            field_count: record.len(),
        }
    }

    /// Value for a header. `None` when the header is absent or the value is null.
    pub fn get(&self, header: &str) -> Option<&'a str> {
        self.fields.get(header).copied().flatten()
    }

    /// Number of fields in the source record.
    pub fn field_count(&self) -> usize {
        self.field_count
    }

    /// Number of headers that received a value slot.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no header received a value slot.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate `(header, value)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, Option<&'a str>)> + '_ {
        self.fields.iter().map(|(k, v)| (*k, *v))
    }
}
