//! Golden-output verification harness
//!
//! Runs prebuilt Quill example binaries, captures their stdout and compares it against checked-in golden
//! files after normalization (see the `quill_text` crate).
//!
//! ## Modules
//!
//! - `config` - Layout conventions and the case list
//! - `case` - Test cases, outcomes and run summaries
//! - `interfaces` - Executor / golden-source traits and the error type
//! - `reporter` - Console and JSON reporters
//! - `runner` - Sequential run loop
//! - `workdir` - Working-directory guard

pub mod case;
pub mod config;
pub mod interfaces;
pub mod reporter;
pub mod runner;
pub mod workdir;

pub use case::{CaseOutcome, CaseReport, Mismatch, RunSummary, TestCase, compare};
pub use config::HarnessConfig;
pub use interfaces::{ArtifactExecutor, CapturedOutput, FsGoldenSource, GoldenSource, HarnessError, ProcessExecutor};
pub use reporter::{ConsoleReporter, JsonReporter, RunReporter};
pub use runner::{SuiteReport, SuiteRunner, run_suite};
pub use workdir::WorkingDirGuard;
