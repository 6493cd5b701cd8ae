//! Command implementations for the CLI

use std::io;

use crate::harness::{ConsoleReporter, HarnessConfig, JsonReporter, run_suite};

use super::{CliError, CliResult, ExitCode, ReportFormat};

/// Run the golden-output suite described by `config` and report in `format`.
///
/// Returns a failure exit code (with an empty message, the report already said everything) when any case
/// failed or errored.
pub fn verify(config: &HarnessConfig, format: ReportFormat, verbose: bool, color: bool) -> CliResult<ExitCode> {
    let stdout = io::stdout().lock();

    let result = match format {
        ReportFormat::Console => {
            let mut reporter = ConsoleReporter::new(stdout, verbose).with_color(color);
            run_suite(config, &mut reporter)
        }
        ReportFormat::Json => {
            let mut reporter = JsonReporter::new(stdout);
            run_suite(config, &mut reporter)
        }
    };

    let suite = result.map_err(|e| CliError::failure(format!("Error: {}", e)))?;

    if suite.summary.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Err(CliError::new("", ExitCode::FAILURE))
    }
}
