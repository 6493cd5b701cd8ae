//! Harness I/O boundary interfaces
//!
//! This module defines trait-based abstractions for the two operations that touch the outside world:
//! - Artifact execution (spawn a prebuilt example, capture its stdout)
//! - Golden loading (read the expected-output file)
//!
//! The runner only talks to these traits, so it can be driven by stubs in tests. The default implementations
//! spawn real processes and read real files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use miette::Diagnostic;
use thiserror::Error;

/// Errors that occur while running a single case (or entering the harness root).
///
/// None of these abort a run: per-case errors are recorded as that case's outcome.
#[derive(Debug, Error, Diagnostic)]
pub enum HarnessError {
    #[error("executable not found: {}", path.display())]
    #[diagnostic(
        code(quill_verify::missing_executable),
        help("build the examples first; the harness only runs prebuilt artifacts")
    )]
    MissingExecutable { path: PathBuf },

    #[error("golden file not found: {}", path.display())]
    #[diagnostic(
        code(quill_verify::missing_golden),
        help("add the expected stdout of this case to the expected-output directory")
    )]
    MissingGolden { path: PathBuf },

    #[error("failed to launch {}: {source}", path.display())]
    #[diagnostic(code(quill_verify::launch))]
    Launch {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read golden file {}: {source}", path.display())]
    #[diagnostic(
        code(quill_verify::read_golden),
        help("golden files must be UTF-8 text")
    )]
    ReadGolden {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot enter harness root {}: {source}", path.display())]
    #[diagnostic(code(quill_verify::working_dir), help("pass --root pointing at the harness directory"))]
    WorkingDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write report: {0}")]
    #[diagnostic(code(quill_verify::report))]
    Report(#[from] io::Error),
}

/// What a finished artifact left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedOutput {
    /// Standard output, decoded lossily as UTF-8
    pub stdout: String,
    /// Exit code, `None` when the process was killed by a signal
    pub exit_code: Option<i32>,
}

// ============================================================================
// Artifact Executor Interface
// ============================================================================

/// Run a prebuilt artifact and capture what it printed.
///
/// Implementations must not interpret the exit status: the verdict of a case depends on its output only.
pub trait ArtifactExecutor {
    /// Run `executable` with no arguments and no stdin.
    fn execute(&self, executable: &Path) -> Result<CapturedOutput, HarnessError>;
}

// ============================================================================
// Golden Source Interface
// ============================================================================

/// Load the expected output of a case.
pub trait GoldenSource {
    fn read_golden(&self, path: &Path) -> Result<String, HarnessError>;
}

// ============================================================================
// Default Implementations
// ============================================================================

/// Spawns the artifact as a child process and waits for it.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessExecutor;

impl ArtifactExecutor for ProcessExecutor {
    fn execute(&self, executable: &Path) -> Result<CapturedOutput, HarnessError> {
        if !executable.is_file() {
            return Err(HarnessError::MissingExecutable {
                path: executable.to_path_buf(),
            });
        }

        // stderr is captured so it does not interleave with the report, then dropped.
        let output = Command::new(executable)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| match source.kind() {
                io::ErrorKind::NotFound => HarnessError::MissingExecutable {
                    path: executable.to_path_buf(),
                },
                _ => HarnessError::Launch {
                    path: executable.to_path_buf(),
                    source,
                },
            })?;

        Ok(CapturedOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            exit_code: output.status.code(),
        })
    }
}

/// Reads golden files from disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsGoldenSource;

impl GoldenSource for FsGoldenSource {
    fn read_golden(&self, path: &Path) -> Result<String, HarnessError> {
        if !path.is_file() {
            return Err(HarnessError::MissingGolden {
                path: path.to_path_buf(),
            });
        }

        fs::read_to_string(path).map_err(|source| HarnessError::ReadGolden {
            path: path.to_path_buf(),
            source,
        })
    }
}
