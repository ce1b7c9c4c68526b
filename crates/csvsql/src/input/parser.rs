//! CSV reader setup and header normalization.

use std::borrow::Cow;
use std::collections::HashSet;
use std::io::Read;

use csv::{ByteRecord, StringRecord};
use tracing::warn;

use crate::error::Result;

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Field delimiter.
    pub delimiter: u8,
    /// Quote character.
    pub quote: u8,
    /// Render empty fields as NULL instead of `''`.
    pub empty_as_null: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            empty_as_null: false,
        }
    }
}

/// Opens CSV streams with a header row.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Wrap a byte stream in a CSV reader.
    ///
    /// Rows of any width are let through; arity is checked by the caller.
    pub fn reader<R: Read>(&self, input: R) -> csv::Reader<R> {
        csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .quote(self.config.quote)
            .has_headers(true)
            .flexible(true)
            .from_reader(input)
    }

    /// Read the header row, renaming blank and duplicate names so every
    /// column key is a unique, non-empty identifier.
    ///
    /// An empty vector means the stream had no header fields.
    pub fn read_headers<R: Read>(&self, reader: &mut csv::Reader<R>) -> Result<Vec<String>> {
        let raw = reader.byte_headers()?;
        let mut decoded = StringRecord::with_capacity(raw.as_slice().len(), raw.len());
        if decode_record(raw, &mut decoded) {
            warn!("Header contains invalid UTF-8, replaced with U+FFFD");
        }
        Ok(dedup_headers(decoded.iter()))
    }
}

/// Decode a raw record into `record`, replacing invalid UTF-8 with U+FFFD.
///
/// Returns true if any field needed a replacement.
pub(crate) fn decode_record(raw: &ByteRecord, record: &mut StringRecord) -> bool {
    record.clear();
    let mut replaced = false;
    for field in raw.iter() {
        let text = String::from_utf8_lossy(field);
        replaced |= matches!(text, Cow::Owned(_));
        record.push_field(&text);
    }
    record.set_position(raw.position().cloned());
    replaced
}

/// Name blank headers `column_<n>` (1-based position) and rename repeated
/// names to `<name>_2`, `<name>_3`, and so on.
pub(crate) fn dedup_headers<'a>(raw: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let raw: Vec<&str> = raw.into_iter().collect();
    let mut seen: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut headers = Vec::with_capacity(raw.len());

    for (position, raw_name) in raw.into_iter().enumerate() {
        let name: Cow<'_, str> = if raw_name.trim().is_empty() {
            let generated = format!("column_{}", position + 1);
            warn!(position = position + 1, renamed = %generated, "Blank header renamed");
            Cow::Owned(generated)
        } else {
            Cow::Borrowed(raw_name)
        };

        let mut candidate = name.to_string();
        let mut suffix = 2;
        while seen.contains(&candidate) {
            candidate = format!("{}_{}", name, suffix);
            suffix += 1;
        }
        if candidate != name {
            warn!(header = %name, renamed = %candidate, "Duplicate header renamed");
        }
        seen.insert(candidate.clone());
        headers.push(candidate);
    }

    headers
}
