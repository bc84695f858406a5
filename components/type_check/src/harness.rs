//! Check runner and report
//!
//! Checks are grouped into named blocks. Each check serializes the actual
//! and expected values to JSON and compares the two trees; the outcome is
//! printed as an `[OK]` or `[FAIL]` line and recorded in the [`Report`].
//! A failing check never stops the run.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use log::{debug, info, warn};
use serde::Serialize;
use serde_json::Value as Json;

use crate::error::{HarnessError, HarnessResult};

/// Destination for report lines
pub trait ReportWriter {
    /// Write a regular report line
    fn out(&mut self, line: &str) -> io::Result<()>;

    /// Write a failure detail line
    fn err(&mut self, line: &str) -> io::Result<()>;
}

/// Writes regular lines to stdout and failure details to stderr
#[derive(Debug, Default)]
pub struct StdioWriter;

impl ReportWriter for StdioWriter {
    fn out(&mut self, line: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{}", line)
    }

    fn err(&mut self, line: &str) -> io::Result<()> {
        writeln!(io::stderr().lock(), "{}", line)
    }
}

/// Captures every line, in order, into a shared buffer
#[derive(Debug, Clone, Default)]
pub struct CaptureWriter {
    lines: Rc<RefCell<Vec<String>>>,
}

impl CaptureWriter {
    /// Create an empty capture buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines captured so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl ReportWriter for CaptureWriter {
    fn out(&mut self, line: &str) -> io::Result<()> {
        self.lines.borrow_mut().push(line.to_string());
        Ok(())
    }

    fn err(&mut self, line: &str) -> io::Result<()> {
        self.lines.borrow_mut().push(line.to_string());
        Ok(())
    }
}

/// Harness settings
#[derive(Debug, Clone, Default)]
pub struct HarnessConfig {
    /// Blocks to run; empty runs every block
    pub blocks: Vec<String>,
    /// Suppress `[OK]` lines
    pub quiet: bool,
}

impl HarnessConfig {
    /// Whether checks in `name` should run
    pub fn runs_block(&self, name: &str) -> bool {
        self.blocks.is_empty() || self.blocks.iter().any(|b| b == name)
    }
}

/// Result of a single check
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    /// Block the check ran in
    pub block: String,
    /// Description of what was checked
    pub what: String,
    /// Whether actual matched expected
    pub passed: bool,
    /// Expected value, serialized
    pub expected: Json,
    /// Actual value, serialized
    pub actual: Json,
}

/// All outcomes of a run
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    outcomes: Vec<Outcome>,
}

impl Report {
    /// Every recorded outcome, in run order
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Outcomes that did not pass
    pub fn failures(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    /// Number of passing checks
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    /// Number of failing checks
    pub fn failed(&self) -> usize {
        self.failures().count()
    }

    /// True when no check failed
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// `Err(Failures(n))` when any check failed, for strict runs
    pub fn require_success(&self) -> HarnessResult<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(HarnessError::Failures(self.failed()))
        }
    }
}

/// The JSON kind of a serialized value, the analogue of `typeof`.
pub fn json_kind(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

/// Equality used by every check: same JSON kind and equal JSON trees.
///
/// Non-finite numbers serialize to `null`, so checks compare tags and
/// booleans rather than raw NaN or Infinity values.
///
/// ```
/// use serde_json::json;
/// use type_check::are_equal;
///
/// assert!(are_equal(&json!(["boolean", 3]), &json!(["boolean", 3])));
/// assert!(!are_equal(&json!("true"), &json!(true)));
/// ```
pub fn are_equal(actual: &Json, expected: &Json) -> bool {
    json_kind(actual) == json_kind(expected) && actual == expected
}

/// Runs checks and writes the report
pub struct Harness<W: ReportWriter> {
    config: HarnessConfig,
    writer: W,
    block: String,
    outcomes: Vec<Outcome>,
}

impl<W: ReportWriter> Harness<W> {
    /// Create a harness writing to `writer`
    pub fn new(config: HarnessConfig, writer: W) -> Self {
        Self {
            config,
            writer,
            block: String::new(),
            outcomes: Vec::new(),
        }
    }

    /// Start a new block. Checks that follow belong to it.
    pub fn block(&mut self, name: &str) -> HarnessResult<()> {
        self.block = name.to_string();
        if !self.config.runs_block(name) {
            debug!("skipping block '{}'", name);
            return Ok(());
        }
        debug!("starting block '{}'", name);
        self.writer.out(&format!("# {}", name))?;
        self.writer.out("")?;
        Ok(())
    }

    /// Compare `actual` against `expected` and record the outcome.
    ///
    /// Returns whether the check passed. Checks in a skipped block are not
    /// evaluated and report `true`.
    pub fn check<A, E>(&mut self, what: &str, actual: &A, expected: &E) -> HarnessResult<bool>
    where
        A: Serialize + ?Sized,
        E: Serialize + ?Sized,
    {
        if !self.config.runs_block(&self.block) {
            return Ok(true);
        }

        let actual = serde_json::to_value(actual)?;
        let expected = serde_json::to_value(expected)?;
        let passed = are_equal(&actual, &expected);

        if passed {
            if !self.config.quiet {
                self.writer.out(&format!("  [OK] {}", what))?;
                self.writer.out("")?;
            }
        } else {
            warn!(
                "check '{}' in block '{}' failed: expected {} {}, got {} {}",
                what,
                self.block,
                json_kind(&expected),
                expected,
                json_kind(&actual),
                actual
            );
            self.writer.err(&format!("  [FAIL] {}", what))?;
            self.writer.err("  Expected:")?;
            self.writer.err(&format!("  {}", expected))?;
            self.writer.err("  Actual:")?;
            self.writer.err(&format!("  {}", actual))?;
            self.writer.out("")?;
        }

        self.outcomes.push(Outcome {
            block: self.block.clone(),
            what: what.to_string(),
            passed,
            expected,
            actual,
        });
        Ok(passed)
    }

    /// Write the summary line and hand back the report
    pub fn finish(mut self) -> HarnessResult<Report> {
        let report = Report {
            outcomes: std::mem::take(&mut self.outcomes),
        };
        let summary = format!("{} passed, {} failed", report.passed(), report.failed());
        info!("{}", summary);
        self.writer.out(&summary)?;
        Ok(report)
    }
}
