//! SQL literal rendering.

/// Keyword emitted for a missing value.
pub const NULL_LITERAL: &str = "NULL";

/// Render a field value as a SQL literal.
///
/// `None` becomes the unquoted `NULL` keyword. Present values are wrapped in
/// single quotes with every embedded single quote doubled; no other character
/// is touched.
pub fn escape_literal(value: Option<&str>) -> String {
    match value {
        None => NULL_LITERAL.to_string(),
        Some(v) => {
            let mut out = String::with_capacity(v.len() + 2);
            out.push('\'');
            for ch in v.chars() {
                if ch == '\'' {
                    out.push('\'');
                }
                out.push(ch);
            }
            out.push('\'');
            out
        }
    }
}

/// Reverse [`escape_literal`] for a quoted literal.
///
/// Returns `None` for `NULL` or anything that is not a well-formed literal.
pub fn unescape_literal(literal: &str) -> Option<String> {
    let inner = literal.strip_prefix('\'')?.strip_suffix('\'')?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch == '\'' {
            // A lone quote inside the literal would have ended it
            if chars.next() != Some('\'') {
                return None;
            }
        }
        out.push(ch);
    }
    Some(out)
}
