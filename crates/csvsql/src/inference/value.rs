//! Per-value type classification.

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::schema::ColumnType;

// Year-first dates only. Values are emitted as quoted literals, so every
// accepted shape must be one that DATETIME/TIMESTAMP columns take as-is.
static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}[-/]\d{1,2}[-/]\d{1,2}").unwrap());

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S%.f",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Classify a single raw field value.
///
/// The whole trimmed value must parse for a numeric or temporal result;
/// anything else, including the empty string, is [`ColumnType::Text`].
pub fn infer_value(value: &str) -> ColumnType {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return ColumnType::Text;
    }

    if let Some(numeric) = classify_numeric(trimmed) {
        return numeric;
    }

    if is_timestamp(trimmed) {
        return ColumnType::Timestamp;
    }

    ColumnType::Text
}

fn classify_numeric(value: &str) -> Option<ColumnType> {
    if value.parse::<i64>().is_ok() {
        return Some(ColumnType::Integer);
    }

    let parsed = value.parse::<f64>().ok().filter(|v| v.is_finite())?;

    // "1.0" and "1e3" have no fractional component
    if parsed.fract() == 0.0 && parsed >= i64::MIN as f64 && parsed < i64::MAX as f64 {
        Some(ColumnType::Integer)
    } else {
        Some(ColumnType::Float)
    }
}

fn is_timestamp(value: &str) -> bool {
    if !DATE_SHAPE.is_match(value) {
        return false;
    }

    DATETIME_FORMATS
        .iter()
        .any(|fmt| NaiveDateTime::parse_from_str(value, fmt).is_ok())
        || DATE_FORMATS
            .iter()
            .any(|fmt| NaiveDate::parse_from_str(value, fmt).is_ok())
}
