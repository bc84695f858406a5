//! Error types for the example harness

use thiserror::Error;

/// Harness errors
///
/// A failing check is not an error; it is recorded in the report. These
/// cover the cases where the run itself cannot continue.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A checked value could not be serialized for comparison
    #[error("could not serialize checked value: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A sample value could not be built
    #[error("could not build sample value: {0}")]
    Sample(#[from] core_types::TagError),

    /// The report could not be written
    #[error("could not write report: {0}")]
    Io(#[from] std::io::Error),

    /// Checks failed and the run was strict
    #[error("{0} check(s) failed")]
    Failures(usize),
}

/// Result type for harness operations
pub type HarnessResult<T> = Result<T, HarnessError>;
