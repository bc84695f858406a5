//! Real-type example checks
//!
//! Entry point for the `type-check` binary. Parses CLI arguments, runs the
//! example suites and prints the report.

use clap::Parser;
use env_logger::Env;
use type_check::{suites, Cli, Harness, StdioWriter};

fn init_logging(default_filter: &str) {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.default_log_filter());

    let mut harness = Harness::new(cli.config(), StdioWriter);
    suites::run_all(&mut harness)?;
    let report = harness.finish()?;

    if cli.strict {
        report.require_success()?;
    }
    Ok(())
}
