//! Test cases and their outcomes

use std::path::{Path, PathBuf};
use std::time::Duration;

use quill_text::{first_difference, normalize};

use super::config::{GOLDEN_EXTENSION, HarnessConfig};
use super::interfaces::HarnessError;

/// A named pairing of a prebuilt artifact and its golden file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub name: String,
    pub executable: PathBuf,
    pub golden: PathBuf,
}

impl TestCase {
    /// Locate the artifact and golden file of `name` under `root`.
    pub fn resolve(name: &str, root: &Path, config: &HarnessConfig) -> Self {
        let executable = root
            .join(&config.build_dir)
            .join(format!("{}{}", name, config.exe_suffix));
        let golden = root
            .join(&config.expected_dir)
            .join(format!("{}.{}", name, GOLDEN_EXTENSION));

        Self {
            name: name.to_string(),
            executable,
            golden,
        }
    }
}

/// Normalized texts of a failed comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub expected: String,
    pub actual: String,
    /// 1-based line of the first disagreement
    pub first_difference: usize,
}

/// Verdict for one case
#[derive(Debug)]
pub enum CaseOutcome {
    Passed,
    Mismatch(Mismatch),
    Errored(HarnessError),
}

impl CaseOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, CaseOutcome::Passed)
    }
}

/// Compare raw golden text with raw captured output after normalizing both.
pub fn compare(expected: &str, actual: &str) -> CaseOutcome {
    let expected = normalize(expected);
    let actual = normalize(actual);

    match first_difference(&expected, &actual) {
        None => CaseOutcome::Passed,
        Some(line) => CaseOutcome::Mismatch(Mismatch {
            expected,
            actual,
            first_difference: line,
        }),
    }
}

/// Everything known about one executed case
#[derive(Debug)]
pub struct CaseReport {
    pub case: TestCase,
    pub outcome: CaseOutcome,
    /// Recorded for reporting only; never part of the verdict
    pub exit_code: Option<i32>,
    pub duration: Duration,
}

/// Summary of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
    pub duration: Duration,
}

impl RunSummary {
    pub fn from_reports(reports: &[CaseReport], duration: Duration) -> Self {
        let mut summary = RunSummary {
            total: reports.len(),
            duration,
            ..RunSummary::default()
        };
        for report in reports {
            match report.outcome {
                CaseOutcome::Passed => summary.passed += 1,
                CaseOutcome::Mismatch(_) => summary.failed += 1,
                CaseOutcome::Errored(_) => summary.errored += 1,
            }
        }
        summary
    }

    /// `true` when no case failed or errored
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.errored == 0
    }
}
