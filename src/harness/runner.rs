//! Golden-output runner
//!
//! Runs every configured case in order, never stopping early. Per-case failures (missing artifact, launch
//! error, missing golden, output mismatch) are recorded as that case's outcome and the run moves on.
//!
//! The run happens inside the harness root; the caller's working directory is restored afterwards on every
//! exit path.

use std::io;
use std::time::Instant;

use super::case::{CaseOutcome, CaseReport, RunSummary, TestCase, compare};
use super::config::HarnessConfig;
use super::interfaces::{ArtifactExecutor, FsGoldenSource, GoldenSource, HarnessError, ProcessExecutor};
use super::reporter::RunReporter;
use super::workdir::WorkingDirGuard;

/// Per-case reports plus the summary of a finished run.
#[derive(Debug)]
pub struct SuiteReport {
    pub reports: Vec<CaseReport>,
    pub summary: RunSummary,
}

/// Drives cases through an executor and a golden source.
pub struct SuiteRunner<E = ProcessExecutor, G = FsGoldenSource> {
    executor: E,
    golden: G,
}

impl SuiteRunner {
    /// Runner that spawns real processes and reads golden files from disk
    pub fn new() -> Self {
        Self::with_components(ProcessExecutor, FsGoldenSource)
    }
}

impl Default for SuiteRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ArtifactExecutor, G: GoldenSource> SuiteRunner<E, G> {
    pub fn with_components(executor: E, golden: G) -> Self {
        Self { executor, golden }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Run every case of `config`.
    ///
    /// Only an unreachable harness root ends a run before its first case. Every case runs even when the
    /// reporter fails; the reporter is not called again after its first error, which is returned once the run
    /// is over.
    #[tracing::instrument(skip_all, fields(root = %config.root.display(), case_count = config.cases.len()))]
    pub fn run(&self, config: &HarnessConfig, reporter: &mut dyn RunReporter) -> Result<SuiteReport, HarnessError> {
        let start_time = Instant::now();
        let guard = WorkingDirGuard::enter(&config.root)?;
        let cases = config.test_cases(guard.dir());
        let mut sink = ReportSink::new(reporter);

        tracing::info!(cases = cases.len(), "starting golden-output run");
        sink.emit(|r| r.on_run_start(cases.len()));

        let mut reports = Vec::with_capacity(cases.len());
        for case in cases {
            sink.emit(|r| r.on_case_start(&case));
            let report = self.run_case(case);
            sink.emit(|r| r.on_case_complete(&report));
            reports.push(report);
        }

        let summary = RunSummary::from_reports(&reports, start_time.elapsed());
        sink.emit(|r| r.on_run_complete(&summary));
        tracing::info!(
            passed = summary.passed,
            failed = summary.failed,
            errored = summary.errored,
            "golden-output run finished"
        );

        drop(guard);
        match sink.error {
            Some(error) => Err(HarnessError::Report(error)),
            None => Ok(SuiteReport { reports, summary }),
        }
    }

    /// Run a single case and turn whatever happens into a report.
    #[tracing::instrument(skip_all, fields(case = %case.name))]
    pub fn run_case(&self, case: TestCase) -> CaseReport {
        let start_time = Instant::now();
        let (outcome, exit_code) = self.evaluate(&case);

        match &outcome {
            CaseOutcome::Errored(error) => tracing::warn!(error = %error, "case errored"),
            CaseOutcome::Mismatch(mismatch) => {
                tracing::debug!(line = mismatch.first_difference, "output differs from golden file")
            }
            CaseOutcome::Passed => {}
        }

        CaseReport {
            case,
            outcome,
            exit_code,
            duration: start_time.elapsed(),
        }
    }

    // The exit code survives a golden-file error: the artifact did run.
    fn evaluate(&self, case: &TestCase) -> (CaseOutcome, Option<i32>) {
        tracing::debug!(executable = %case.executable.display(), "launching artifact");
        let captured = match self.executor.execute(&case.executable) {
            Ok(captured) => captured,
            Err(error) => return (CaseOutcome::Errored(error), None),
        };
        tracing::debug!(exit_code = ?captured.exit_code, bytes = captured.stdout.len(), "artifact finished");

        let outcome = match self.golden.read_golden(&case.golden) {
            Ok(expected) => compare(&expected, &captured.stdout),
            Err(error) => CaseOutcome::Errored(error),
        };
        (outcome, captured.exit_code)
    }
}

/// Forwards events to a reporter until it first fails, then keeps that error.
struct ReportSink<'a> {
    reporter: &'a mut dyn RunReporter,
    error: Option<io::Error>,
}

impl<'a> ReportSink<'a> {
    fn new(reporter: &'a mut dyn RunReporter) -> Self {
        Self { reporter, error: None }
    }

    fn emit(&mut self, event: impl FnOnce(&mut dyn RunReporter) -> io::Result<()>) {
        if self.error.is_some() {
            return;
        }
        if let Err(error) = event(&mut *self.reporter) {
            tracing::error!(error = %error, "reporter failed; remaining cases still run");
            self.error = Some(error);
        }
    }
}

/// Run `config` with the default process executor and filesystem golden source.
pub fn run_suite(config: &HarnessConfig, reporter: &mut dyn RunReporter) -> Result<SuiteReport, HarnessError> {
    SuiteRunner::new().run(config, reporter)
}
