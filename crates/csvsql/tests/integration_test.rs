//! Integration tests for csvsql.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use csvsql::{
    BatchConfig, BatchRunner, ColumnType, Conversion, ConvertConfig, Converter, CsvSqlError,
    Dialect, FileStatus, SkipReason,
};

/// Helper to create an input directory with the given files.
fn create_input_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for (name, content) in files {
        fs::write(dir.path().join(name), content).expect("Failed to write input file");
    }
    dir
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("Failed to read output")
}

// =============================================================================
// Single Source Conversion
// =============================================================================

#[test]
fn test_header_only_produces_schema_only() {
    let report = Converter::new()
        .convert_reader("id,name\n".as_bytes(), "people")
        .expect("Conversion failed");

    assert_eq!(
        report.conversion,
        Conversion::SchemaOnly {
            sql: "CREATE TABLE IF NOT EXISTS `people` (\n  `id` VARCHAR(255),\n  `name` VARCHAR(255)\n);"
                .to_string()
        }
    );
}

#[test]
fn test_quotes_escaped_in_header_order() {
    let report = Converter::new()
        .convert_reader("id,name\n1,O'Brien\n2,Smith\n".as_bytes(), "people")
        .expect("Conversion failed");

    let expected = "CREATE TABLE IF NOT EXISTS `people` (\n  `id` INT,\n  `name` VARCHAR(255)\n);\n\n\
                    INSERT INTO `people` (`id`, `name`)\nVALUES\n('1', 'O''Brien'),\n('2', 'Smith');";
    assert_eq!(report.conversion.sql(), Some(expected));
}

#[test]
fn test_wide_row_dropped_others_kept_in_order() {
    let report = Converter::new()
        .convert_reader("a,b\nx1,y1\nx2,y2,z2\nx3,y3\n".as_bytes(), "t")
        .expect("Conversion failed");

    let sql = report.conversion.sql().expect("Expected SQL");
    assert!(sql.contains("('x1', 'y1'),\n('x3', 'y3');"));
    assert!(!sql.contains("x2"));
    assert_eq!(report.rows_dropped(), 1);
}

#[test]
fn test_mixed_column_resolves_to_text() {
    let report = Converter::new()
        .convert_reader("code\n42\nABC\nDEF\n".as_bytes(), "codes")
        .expect("Conversion failed");

    assert_eq!(report.columns[0].column_type, ColumnType::Text);
}

#[test]
fn test_inferred_types() {
    let content = "id,price,created,label\n\
                   1,9.99,2024-01-15,apple\n\
                   2,10,2024-02-01 10:00:00,banana\n";
    let report = Converter::new()
        .convert_reader(content.as_bytes(), "items")
        .expect("Conversion failed");

    let types: Vec<ColumnType> = report.columns.iter().map(|c| c.column_type).collect();
    assert_eq!(
        types,
        vec![
            ColumnType::Integer,
            ColumnType::Float,
            ColumnType::Timestamp,
            ColumnType::Text
        ]
    );

    let sql = report.conversion.sql().unwrap();
    assert!(sql.contains("`price` FLOAT"));
    assert!(sql.contains("`created` DATETIME"));
}

#[test]
fn test_text_only_mode() {
    let config = ConvertConfig {
        infer_types: false,
        ..ConvertConfig::default()
    };
    let report = Converter::with_config(config)
        .convert_reader("id\n1\n2\n".as_bytes(), "t")
        .expect("Conversion failed");

    assert_eq!(report.columns[0].column_type, ColumnType::Text);
}

#[test]
fn test_ansi_dialect_with_batches() {
    let config = ConvertConfig {
        dialect: Dialect::Ansi,
        insert_batch_size: Some(2),
        ..ConvertConfig::default()
    };
    let report = Converter::with_config(config)
        .convert_reader("n\n1\n2\n3\n".as_bytes(), "nums")
        .expect("Conversion failed");

    let sql = report.conversion.sql().unwrap();
    assert_eq!(sql.matches("INSERT INTO \"nums\" (\"n\")").count(), 2);
    assert!(sql.contains("\"n\" INTEGER"));
    assert!(sql.ends_with("VALUES\n('3');"));
}

#[test]
fn test_duplicate_headers_kept_as_separate_columns() {
    let report = Converter::new()
        .convert_reader("id,id\n1,2\n".as_bytes(), "dup")
        .expect("Conversion failed");

    let sql = report.conversion.sql().unwrap();
    assert!(sql.contains("INSERT INTO `dup` (`id`, `id_2`)"));
    assert!(sql.contains("('1', '2')"));
}

// =============================================================================
// Batch: Per-File Mode
// =============================================================================

#[test]
fn test_per_file_batch() {
    let input = create_input_dir(&[
        ("orders_2024.csv", "id,item\n1,pen\n"),
        ("report.csv", "title\n"),
        ("empty_1.csv", ""),
        ("readme.txt", "not a csv"),
    ]);
    let output = TempDir::new().unwrap();
    let output_dir = output.path().join("sql");

    let summary = BatchRunner::new(BatchConfig::per_file(input.path(), &output_dir))
        .run()
        .expect("Batch failed");

    assert_eq!(summary.files.len(), 3);
    assert_eq!(summary.converted(), 2);
    assert_eq!(summary.skipped(), 1);
    assert_eq!(summary.failed(), 0);

    let orders = read(&output_dir.join("orders.sql"));
    assert!(orders.starts_with("CREATE TABLE IF NOT EXISTS `orders`"));
    assert!(orders.ends_with("('1', 'pen');\n"));

    let report = read(&output_dir.join("report.sql"));
    assert!(!report.contains("INSERT"));

    assert!(!output_dir.join("empty.sql").exists());
    let skipped = summary
        .files
        .iter()
        .find(|f| f.table_name == "empty")
        .unwrap();
    assert_eq!(
        skipped.status,
        FileStatus::Skipped {
            reason: SkipReason::EmptyHeader
        }
    );
}

#[test]
fn test_per_file_batch_keeps_rows_with_invalid_utf8() {
    let input = TempDir::new().unwrap();
    fs::write(
        input.path().join("people_1.csv"),
        b"id,name\n1,Smith\n2,Ren\xe9\n3,Jones\n",
    )
    .unwrap();
    let output = TempDir::new().unwrap();

    let summary = BatchRunner::new(BatchConfig::per_file(input.path(), output.path()))
        .run()
        .expect("Batch failed");

    assert_eq!(summary.failed(), 0);
    assert!(matches!(
        summary.files[0].status,
        FileStatus::Written { rows: 3, dropped_rows: 0, .. }
    ));
    let people = read(&output.path().join("people.sql"));
    assert!(people.contains("('2', 'Ren\u{FFFD}')"));
}

// Reading offset 0 of a process's own memory file fails with EIO, which
// gives a regular file whose contents cannot be read.
#[cfg(target_os = "linux")]
#[test]
fn test_per_file_batch_continues_after_read_failure() {
    let input = TempDir::new().unwrap();
    std::os::unix::fs::symlink("/proc/self/mem", input.path().join("bad.csv")).unwrap();
    fs::write(input.path().join("good.csv"), "id\n1\n").unwrap();
    let output = TempDir::new().unwrap();

    let summary = BatchRunner::new(BatchConfig::per_file(input.path(), output.path()))
        .run()
        .expect("Batch failed");

    assert_eq!(summary.failed(), 1);
    assert_eq!(summary.converted(), 1);
    assert!(matches!(summary.files[0].status, FileStatus::Failed { .. }));
    assert!(output.path().join("good.sql").exists());
    assert!(!output.path().join("bad.sql").exists());
}

#[test]
fn test_missing_input_directory_aborts() {
    let root = TempDir::new().unwrap();
    let result = BatchRunner::new(BatchConfig::per_file(
        root.path().join("missing"),
        root.path().join("out"),
    ))
    .run();

    assert!(matches!(result, Err(CsvSqlError::InputDirectory { .. })));
}

// =============================================================================
// Batch: Combined Mode
// =============================================================================

#[test]
fn test_combined_batch_in_file_name_order() {
    let input = create_input_dir(&[
        ("b_x.csv", "n\n2\n"),
        ("a_x.csv", "n\n1\n"),
        ("c_x.csv", ""),
    ]);
    let output = TempDir::new().unwrap();
    let output_file = output.path().join("combined.sql");

    let summary = BatchRunner::new(BatchConfig::combined(input.path(), &output_file))
        .run()
        .expect("Batch failed");

    assert!(summary.combined_written);
    assert_eq!(summary.converted(), 2);
    assert_eq!(summary.skipped(), 1);

    let combined = read(&output_file);
    let a = combined.find("CREATE TABLE IF NOT EXISTS `a`").unwrap();
    let b = combined.find("CREATE TABLE IF NOT EXISTS `b`").unwrap();
    assert!(a < b);
    assert!(!combined.contains("`c`"));
    assert!(combined.contains("('1');\n\nCREATE TABLE IF NOT EXISTS `b`"));
}

#[test]
fn test_combined_batch_with_no_content_writes_nothing() {
    let input = create_input_dir(&[("only_1.csv", "")]);
    let output = TempDir::new().unwrap();
    let output_file = output.path().join("combined.sql");

    let summary = BatchRunner::new(BatchConfig::combined(input.path(), &output_file))
        .run()
        .expect("Batch failed");

    assert!(!summary.combined_written);
    assert!(!output_file.exists());
}

#[test]
fn test_batch_is_idempotent() {
    let input = create_input_dir(&[
        ("orders_1.csv", "id,total\n1,9.5\n2,3\n"),
        ("users_1.csv", "id,name\n1,O'Brien\n"),
    ]);
    let output = TempDir::new().unwrap();
    let first = output.path().join("first.sql");
    let second = output.path().join("second.sql");

    BatchRunner::new(BatchConfig::combined(input.path(), &first))
        .run()
        .unwrap();
    BatchRunner::new(BatchConfig::combined(input.path(), &second))
        .run()
        .unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_custom_extension() {
    let input = create_input_dir(&[("data_1.tsv", "a\tb\n1\t2\n"), ("skip_1.csv", "a\n1\n")]);
    let output = TempDir::new().unwrap();

    let mut config = BatchConfig::per_file(input.path(), output.path()).with_extension("tsv");
    config.convert.parser.delimiter = b'\t';

    let summary = BatchRunner::new(config).run().unwrap();
    assert_eq!(summary.files.len(), 1);
    assert!(read(&output.path().join("data.sql")).contains("('1', '2')"));
}
