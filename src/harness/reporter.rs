//! Run reporting
//!
//! The runner uses a `RunReporter` trait to separate reporting from execution. Two formats ship:
//! - `ConsoleReporter`: human-readable, prints both normalized texts of a mismatch for manual diffing
//! - `JsonReporter`: one JSON document per run, for CI tooling

use std::io::{self, Write};
use std::time::Duration;

use miette::Diagnostic;
use quill_text::line_diff;
use serde_json::{Value, json};

use super::case::{CaseOutcome, CaseReport, RunSummary, TestCase};

// ============================================================================
// Run Reporter Trait
// ============================================================================

/// Trait for reporting run progress and results.
pub trait RunReporter {
    /// Called once the case list is known
    fn on_run_start(&mut self, _case_count: usize) -> io::Result<()> {
        Ok(())
    }

    /// Called before a case's artifact is launched
    fn on_case_start(&mut self, _case: &TestCase) -> io::Result<()> {
        Ok(())
    }

    /// Called when a case has a verdict
    fn on_case_complete(&mut self, report: &CaseReport) -> io::Result<()>;

    /// Called after the last case
    fn on_run_complete(&mut self, summary: &RunSummary) -> io::Result<()>;
}

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const BOLD_RED: &str = "\x1b[1;31m";
const BOLD_GREEN: &str = "\x1b[1;32m";
const RESET: &str = "\x1b[0m";

// ============================================================================
// Console Reporter
// ============================================================================

/// Human-readable reporter.
pub struct ConsoleReporter<W: Write> {
    out: W,
    verbose: bool,
    color: bool,
}

impl ConsoleReporter<io::Sink> {
    /// Reporter that discards everything (useful for library callers that only want the summary)
    pub fn silent() -> Self {
        Self::new(io::sink(), false)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, verbose: bool) -> Self {
        Self {
            out,
            verbose,
            color: false,
        }
    }

    /// Enable or disable ANSI colors
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.color {
            format!("{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

impl<W: Write> RunReporter for ConsoleReporter<W> {
    fn on_run_start(&mut self, case_count: usize) -> io::Result<()> {
        if self.verbose {
            writeln!(self.out, "[*] running {} case(s)", case_count)?;
        }
        Ok(())
    }

    fn on_case_complete(&mut self, report: &CaseReport) -> io::Result<()> {
        let name = &report.case.name;
        match &report.outcome {
            CaseOutcome::Passed => {
                if self.verbose {
                    let status = self.paint("passed", GREEN);
                    writeln!(self.out, "[+] {} {} ({}ms)", name, status, report.duration.as_millis())?;
                }
            }
            CaseOutcome::Mismatch(mismatch) => {
                let status = self.paint("check failed", RED);
                writeln!(self.out, "[!] {} {}", name, status)?;
                writeln!(self.out, "[*] Expected:")?;
                writeln!(self.out, "{}", mismatch.expected)?;
                writeln!(self.out, "[*] Got:")?;
                writeln!(self.out, "{}", mismatch.actual)?;
                writeln!(self.out, "[*] First difference on line {}:", mismatch.first_difference)?;
                write!(self.out, "{}", line_diff(&mismatch.expected, &mismatch.actual))?;
            }
            CaseOutcome::Errored(error) => {
                let status = self.paint("errored", YELLOW);
                writeln!(self.out, "[!] {} {}: {}", name, status, error)?;
                if let Some(help) = error.help() {
                    writeln!(self.out, "    help: {}", help)?;
                }
            }
        }
        Ok(())
    }

    fn on_run_complete(&mut self, summary: &RunSummary) -> io::Result<()> {
        let mut parts = Vec::new();
        if summary.passed > 0 {
            parts.push(format!("{} passed", summary.passed));
        }
        if summary.failed > 0 {
            parts.push(format!("{} failed", summary.failed));
        }
        if summary.errored > 0 {
            parts.push(format!("{} errored", summary.errored));
        }
        if parts.is_empty() {
            parts.push("no cases run".to_string());
        }

        let line = format!(
            "====== {} in {:.2}s ======",
            parts.join(", "),
            summary.duration.as_secs_f64()
        );
        let color = if summary.is_success() { BOLD_GREEN } else { BOLD_RED };
        writeln!(self.out, "{}", self.paint(&line, color))?;
        self.out.flush()
    }
}

// ============================================================================
// JSON Reporter
// ============================================================================

/// Collects case records and writes a single JSON document when the run completes.
pub struct JsonReporter<W: Write> {
    out: W,
    cases: Vec<Value>,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, cases: Vec::new() }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn case_record(report: &CaseReport) -> Value {
    let mut record = json!({
        "name": report.case.name,
        "executable": report.case.executable.display().to_string(),
        "golden": report.case.golden.display().to_string(),
        "exit_code": report.exit_code,
        "duration_ms": millis(report.duration),
    });

    let details = match &report.outcome {
        CaseOutcome::Passed => json!({ "status": "passed" }),
        CaseOutcome::Mismatch(mismatch) => json!({
            "status": "failed",
            "expected": mismatch.expected,
            "actual": mismatch.actual,
            "first_difference": mismatch.first_difference,
        }),
        CaseOutcome::Errored(error) => json!({
            "status": "errored",
            "error": error.to_string(),
            "code": error.code().map(|c| c.to_string()),
        }),
    };

    if let (Value::Object(record), Value::Object(details)) = (&mut record, details) {
        record.extend(details);
    }
    record
}

impl<W: Write> RunReporter for JsonReporter<W> {
    fn on_case_complete(&mut self, report: &CaseReport) -> io::Result<()> {
        self.cases.push(case_record(report));
        Ok(())
    }

    fn on_run_complete(&mut self, summary: &RunSummary) -> io::Result<()> {
        let document = json!({
            "summary": {
                "total": summary.total,
                "passed": summary.passed,
                "failed": summary.failed,
                "errored": summary.errored,
                "success": summary.is_success(),
                "duration_ms": millis(summary.duration),
            },
            "cases": std::mem::take(&mut self.cases),
        });
        serde_json::to_writer_pretty(&mut self.out, &document)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
