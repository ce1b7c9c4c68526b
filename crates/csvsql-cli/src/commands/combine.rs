//! Combine command - every CSV file into one SQL script.

use std::path::PathBuf;

use colored::Colorize;
use csvsql::{BatchConfig, BatchRunner};

use crate::cli::ConvertOptions;

use super::summary;

pub fn run(
    input: PathBuf,
    output: PathBuf,
    options: ConvertOptions,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !input.is_dir() {
        return Err(format!("Input directory not found: {}", input.display()).into());
    }

    let config = BatchConfig::combined(&input, &output)
        .with_extension(options.extension.clone())
        .with_convert(options.to_config()?);

    if !options.json {
        println!(
            "{} {} {} {}",
            "Combining".cyan().bold(),
            input.display().to_string().white(),
            "→".dimmed(),
            output.display().to_string().white()
        );
    }

    let result = BatchRunner::new(config).run()?;

    if options.json {
        println!("{}", result.to_json()?);
        return Ok(());
    }

    summary::print(&result, verbose);
    println!();
    if result.combined_written {
        println!(
            "{} {}",
            "All SQL scripts combined into".green().bold(),
            output.display().to_string().white()
        );
    } else {
        println!("{}", "No valid SQL content generated.".yellow());
    }

    Ok(())
}
