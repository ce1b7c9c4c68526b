//! Human-readable batch summary.

use colored::Colorize;
use csvsql::{BatchSummary, FileStatus};

pub fn print(summary: &BatchSummary, verbose: bool) {
    if verbose {
        println!();
        for file in &summary.files {
            let name = file
                .source
                .file_name()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            match &file.status {
                FileStatus::Written {
                    output,
                    rows,
                    dropped_rows,
                } => println!(
                    "  {} {:30} {} {} ({} rows, {} dropped)",
                    "✓".green(),
                    name,
                    "→".dimmed(),
                    output.display(),
                    rows,
                    dropped_rows
                ),
                FileStatus::Combined { rows, dropped_rows } => println!(
                    "  {} {:30} {} ({} rows, {} dropped)",
                    "✓".green(),
                    name,
                    file.table_name.cyan(),
                    rows,
                    dropped_rows
                ),
                FileStatus::Skipped { reason } => {
                    println!("  {} {:30} skipped: {}", "•".yellow(), name, reason)
                }
                FileStatus::Failed { error } => {
                    println!("  {} {:30} {}", "✗".red(), name, error.red())
                }
            }
        }
    }

    println!();
    println!(
        "Processed {} files ({} converted, {} skipped, {} failed)",
        summary.files.len().to_string().white().bold(),
        summary.converted().to_string().green(),
        summary.skipped().to_string().yellow(),
        summary.failed().to_string().red()
    );

    let dropped = summary.dropped_rows();
    if dropped > 0 {
        println!(
            "{} {} row(s) dropped for column count mismatch",
            "Note:".yellow(),
            dropped
        );
    }
}
