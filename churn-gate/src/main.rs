// churn-gate/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::Settings;

fn main() {
    // Setup Logging (Tracing) on stderr; stdout carries the report.
    // RUST_LOG=debug churn-gate validate ... to see every check
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Wide reports keep file paths and row messages on one line.
    let _ = miette::set_hook(Box::new(|_| {
        Box::new(miette::MietteHandlerOpts::new().width(200).build())
    }));

    let cli = Cli::parse();

    let outcome = match cli.command {
        // --- USE CASE: VALIDATE DATASET ---
        Commands::Validate {
            data,
            checker,
            format,
        } => Settings::resolve(cli.config, checker, format)
            .and_then(|settings| commands::validate::execute(data, settings)),

        // --- USE CASE: LIST CHECKS ---
        Commands::Checks { checker } => Settings::resolve(cli.config, checker, None)
            .and_then(commands::checks::execute)
            .map(|_| true),
    };

    match outcome {
        Ok(true) => {}
        Ok(false) => {
            // Failed checks: non-zero exit for CI/CD
            std::process::exit(1);
        }
        Err(report) => {
            // Debug rendering carries the diagnostic code and help text.
            eprintln!("\n💥 CRITICAL ERROR: {:?}", report);
            std::process::exit(2);
        }
    }
}
