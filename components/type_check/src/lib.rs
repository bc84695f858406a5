//! Example harness for real-type classification
//!
//! Provides the check runner, the sample values and the example suites
//! behind the `type-check` binary.
//!
//! # Example
//!
//! ```
//! use type_check::{suites, CaptureWriter, Harness, HarnessConfig};
//!
//! let mut harness = Harness::new(HarnessConfig::default(), CaptureWriter::new());
//! suites::run_all(&mut harness).unwrap();
//! let report = harness.finish().unwrap();
//! assert!(report.is_success());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod harness;
pub mod samples;
pub mod suites;

pub use cli::Cli;
pub use error::{HarnessError, HarnessResult};
pub use harness::{
    are_equal, json_kind, CaptureWriter, Harness, HarnessConfig, Outcome, Report, ReportWriter,
    StdioWriter,
};
