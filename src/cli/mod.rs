//! CLI module for the Quill golden-output harness
//!
//! ## Usage
//!
//! - `quill-verify` - run the default cases (`clear`, `types`) under `./tests`
//! - `quill-verify types --root path/to/tests` - run selected cases under another root
//! - `quill-verify --format json` - emit a machine-readable report
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

use crate::harness::config::{DEFAULT_BUILD_DIR, DEFAULT_EXE_SUFFIX, DEFAULT_EXPECTED_DIR, DEFAULT_ROOT};
use crate::harness::HarnessConfig;
use crate::version::QUILL_VERIFY_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Process exit code of `quill-verify`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Failure of a CLI command: what to print on stderr and what to exit with.
///
/// `run()` prints a non-empty message and exits with the code. An empty message marks a failure the report
/// has already described (failed or errored cases), so only the exit code is set.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create an error with an explicit exit code. `verify` passes an empty message for failures the report
    /// already printed.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Failure with exit code 1.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result of a CLI command.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable, prints both texts of every mismatch
    Console,
    /// One JSON document on stdout
    Json,
}

/// Run prebuilt Quill examples and compare their stdout with golden files
#[derive(Parser, Debug)]
#[command(name = "quill-verify")]
#[command(version = QUILL_VERIFY_VERSION)]
#[command(about = "Run prebuilt Quill examples and compare their stdout with golden files", long_about = None)]
pub struct Cli {
    /// Cases to run (default: clear, types)
    #[arg(value_name = "CASE")]
    pub cases: Vec<String>,

    /// Harness root; build and expected-output directories live under it
    #[arg(long, value_name = "DIR", default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// Directory of prebuilt examples, relative to the root
    #[arg(long = "build-dir", value_name = "DIR", default_value = DEFAULT_BUILD_DIR)]
    pub build_dir: PathBuf,

    /// Directory of golden files, relative to the root
    #[arg(long = "expected-dir", value_name = "DIR", default_value = DEFAULT_EXPECTED_DIR)]
    pub expected_dir: PathBuf,

    /// Suffix appended to a case name to find its executable
    #[arg(long = "exe-suffix", value_name = "SUFFIX", default_value = DEFAULT_EXE_SUFFIX)]
    pub exe_suffix: String,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    pub format: ReportFormat,

    /// Verbose output (also report passing cases)
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable ANSI colors
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl Cli {
    /// Build the harness configuration described by the arguments.
    pub fn harness_config(&self) -> HarnessConfig {
        HarnessConfig::new()
            .with_root(&self.root)
            .with_build_dir(&self.build_dir)
            .with_expected_dir(&self.expected_dir)
            .with_exe_suffix(self.exe_suffix.as_str())
            .with_cases(self.cases.iter().cloned())
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.harness_config();
    let color = !cli.no_color && io::stdout().is_terminal();
    commands::verify(&config, cli.format, cli.verbose, color)
}

// ============================================================================
// Tests
// ============================================================================
