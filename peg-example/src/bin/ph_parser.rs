//! Reads a process-hitting model and prints it.
//!
//! ```text
//! ph-parser model.ph                  # summary
//! ph-parser model.ph --format ph      # normalized .ph text
//! ph-parser model.ph --format dot -vv # Graphviz, with debug logging
//! ```

use clap::{Parser, ValueEnum};
use peg_example::load_model;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Parse and validate a process-hitting (.ph) model.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Model file to read.
    file: PathBuf,

    /// What to print once the model is loaded.
    #[arg(long, value_enum, default_value_t = Format::Summary)]
    format: Format,

    /// Log more (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Summary,
    Ph,
    Dot,
}

/// Maps `-v` occurrences onto a log filter.
fn filter_for(verbose: u8) -> EnvFilter {
    EnvFilter::new(match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    })
}

/// Installs a stderr subscriber; `log` records from the library are bridged
/// into it. A subscriber that is already set wins.
fn init_logging(verbose: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let model = match load_model(&cli.file) {
        Ok(model) => model,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    match cli.format {
        Format::Summary => print!("{}", model.summary()),
        Format::Ph => print!("{}", model),
        Format::Dot => print!("{}", model.to_dot()),
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_follows_verbosity() {
        assert_eq!(filter_for(0).to_string(), "warn");
        assert_eq!(filter_for(1).to_string(), "info");
        assert_eq!(filter_for(2).to_string(), "debug");
        assert_eq!(filter_for(7).to_string(), "trace");
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging(1);
        init_logging(3);
        log::info!("bridged through the subscriber");
    }
}
