//! Convert command - one SQL file per CSV file.

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

    let config = BatchConfig::per_file(&input, &output)
        .with_extension(options.extension.clone())
        .with_convert(options.to_config()?);

    if !options.json {
        println!(
            "{} {} {} {}",
            "Converting".cyan().bold(),
            input.display().to_string().white(),
            "→".dimmed(),
            output.display().to_string().white()
        );
    }

    let result = BatchRunner::new(config).run()?;

    if options.json {
        println!("{}", result.to_json()?);
    } else {
        summary::print(&result, verbose);
    }

    Ok(())
}
