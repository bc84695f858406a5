//! Command line arguments

use clap::Parser;

use crate::harness::HarnessConfig;

/// Run the real-type example checks
#[derive(Debug, Parser)]
#[command(name = "type-check", version)]
pub struct Cli {
    /// Only run blocks with this name (repeatable)
    #[arg(short, long = "block", value_name = "NAME")]
    pub blocks: Vec<String>,

    /// Do not print passing checks
    #[arg(short, long)]
    pub quiet: bool,

    /// Exit with an error when any check fails
    #[arg(long)]
    pub strict: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Harness settings selected by these arguments
    pub fn config(&self) -> HarnessConfig {
        HarnessConfig {
            blocks: self.blocks.clone(),
            quiet: self.quiet,
        }
    }

    /// Log filter used when `RUST_LOG` is unset
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
