#![forbid(unsafe_code)]
//! Quill golden-output verification harness
//!
//! Runs the prebuilt Quill example programs, captures their standard output and compares it with checked-in
//! golden files. Output canonicalization lives in the `quill_text` crate; this crate provides the runner,
//! reporters and the `quill-verify` CLI.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod harness;
pub mod version;

pub use harness::{
    CaseOutcome, ConsoleReporter, HarnessConfig, HarnessError, JsonReporter, SuiteReport, SuiteRunner, run_suite,
};
pub use quill_text::normalize;
