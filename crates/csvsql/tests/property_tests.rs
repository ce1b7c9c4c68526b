//! Property-based tests for csvsql.
//!
//! These cover the escaper round trip, type inference on arbitrary input,
//! table-name derivation, and row counts through a full conversion.
//!
//! ```bash
//! PROPTEST_CASES=10000 cargo test -p csvsql --test property_tests
//! ```

use proptest::prelude::*;

use csvsql::inference::{infer_value, TypeTally};
use csvsql::sql::{escape_literal, unescape_literal};
use csvsql::{derive_table_name, ColumnType, Converter};

// =============================================================================
// Test Strategies
// =============================================================================

/// Strings heavy in quotes, backslashes, and control characters.
fn tricky_string() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,30}",
        "['\\\\\"\n\r\t ]{0,20}",
        ".{0,40}",
    ]
}

/// Values that look like the kinds of things found in CSV exports.
fn cell_value() -> impl Strategy<Value = String> {
    prop_oneof![
        "-?[0-9]{1,10}",
        "-?[0-9]{1,6}\\.[0-9]{1,4}",
        "20[0-9]{2}-(0[1-9]|1[0-2])-(0[1-9]|1[0-9]|2[0-8])",
        "[a-zA-Z]{1,12}",
    ]
}

proptest! {
    #[test]
    fn escape_round_trips(value in tricky_string()) {
        let literal = escape_literal(Some(&value));
        prop_assert_eq!(unescape_literal(&literal), Some(value));
    }

    #[test]
    fn escape_has_only_doubled_quotes_inside(value in tricky_string()) {
        let literal = escape_literal(Some(&value));
        let inner = &literal[1..literal.len() - 1];
        // Collapsing escaped pairs leaves no quote behind
        prop_assert!(!inner.replace("''", "").contains('\''));
        prop_assert_eq!(inner.matches('\'').count(), value.matches('\'').count() * 2);
    }

    #[test]
    fn infer_value_never_panics(value in ".*") {
        let _ = infer_value(&value);
    }

    #[test]
    fn integers_infer_as_integer(n in any::<i64>()) {
        prop_assert_eq!(infer_value(&n.to_string()), ColumnType::Integer);
    }

    #[test]
    fn any_text_value_makes_column_text(
        values in prop::collection::vec(cell_value(), 0..10),
        word in "[a-zA-Z]{1,12}",
        position in 0usize..10,
    ) {
        // Purely alphabetic words never parse as numbers or dates
        prop_assume!(word.parse::<f64>().is_err());
        let mut values = values;
        let position = position.min(values.len());
        values.insert(position, word);

        let mut tally = TypeTally::new();
        for v in &values {
            tally.observe(Some(v));
        }
        prop_assert_eq!(tally.resolve(), ColumnType::Text);
    }

    #[test]
    fn table_name_is_prefix_of_stem(stem in "[a-z][a-z0-9_]{0,20}") {
        let name = derive_table_name(format!("{}.csv", stem));
        prop_assert!(stem.starts_with(&name));
        prop_assert!(!name.is_empty());
        if let Some(idx) = stem.rfind('_') {
            if idx > 0 {
                prop_assert_eq!(name, stem[..idx].to_string());
            }
        } else {
            prop_assert_eq!(name, stem);
        }
    }

    #[test]
    fn accepted_plus_dropped_equals_rows(
        rows in prop::collection::vec(prop::collection::vec("[a-z0-9]{1,5}", 1..4), 0..20),
    ) {
        let mut content = String::from("a,b\n");
        for row in &rows {
            content.push_str(&row.join(","));
            content.push('\n');
        }

        let report = Converter::new().convert_reader(content.as_bytes(), "t").unwrap();
        let expected_good = rows.iter().filter(|r| r.len() == 2).count();

        prop_assert_eq!(report.rows_accepted, expected_good);
        prop_assert_eq!(report.rows_accepted + report.rows_dropped(), rows.len());
        prop_assert_eq!(report.conversion.sql().is_some(), true);
    }

    #[test]
    fn conversion_is_deterministic(
        rows in prop::collection::vec((cell_value(), cell_value()), 0..15),
    ) {
        let mut content = String::from("x,y\n");
        for (x, y) in &rows {
            content.push_str(&format!("{},{}\n", x, y));
        }

        let converter = Converter::new();
        let first = converter.convert_reader(content.as_bytes(), "t").unwrap();
        let second = converter.convert_reader(content.as_bytes(), "t").unwrap();
        prop_assert_eq!(first.conversion, second.conversion);
    }
}
