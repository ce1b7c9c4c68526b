//! Example: Convert a single CSV file and print the SQL.
//!
//! Usage:
//!   cargo run --example convert -- <file_path>
//!
//! Example:
//!   cargo run --example convert -- csv_files/orders_2024.csv

use std::env;
use std::path::Path;

use csvsql::{derive_table_name, Conversion, Converter};

fn main() -> csvsql::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example convert -- <file_path>");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example convert -- csv_files/orders_2024.csv");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let table_name = derive_table_name(path);
    let report = Converter::new().convert_file(path, &table_name)?;

    let separator = "-".repeat(60);
    eprintln!("{}", separator);
    eprintln!("Table: {}", report.table_name);
    for col in &report.columns {
        eprintln!("  {:20} {:?}", col.name, col.column_type);
    }
    eprintln!(
        "Rows: {} accepted, {} dropped",
        report.rows_accepted,
        report.rows_dropped()
    );
    for warning in &report.row_warnings {
        eprintln!("  skipped {}", warning);
    }
    eprintln!("{}", separator);

    match &report.conversion {
        Conversion::Empty { reason } => eprintln!("No SQL generated: {}", reason),
        Conversion::SchemaOnly { sql } | Conversion::SchemaAndData { sql } => println!("{}", sql),
    }

    Ok(())
}
