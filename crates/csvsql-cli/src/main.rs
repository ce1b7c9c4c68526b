//! csvsql CLI - convert CSV directories into SQL scripts.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Convert {
            input,
            output,
            options,
        } => commands::convert::run(input, output, options, cli.verbose),

        Commands::Combine {
            input,
            output,
            options,
        } => commands::combine::run(input, output, options, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Progress and warnings go to stderr; `RUST_LOG` overrides the level.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
