//! Scoped change of the process working directory.

use std::env;
use std::path::{Path, PathBuf};

use super::interfaces::HarnessError;

/// Switches the working directory on construction and switches back on drop.
///
/// Restoration happens on every exit path, including early returns and unwinding. The working directory is
/// process-global, so two guards must not be alive on different threads at once.
#[derive(Debug)]
pub struct WorkingDirGuard {
    previous: PathBuf,
    current: PathBuf,
}

impl WorkingDirGuard {
    /// Enter `dir`, resolved against the current working directory when relative.
    pub fn enter(dir: &Path) -> Result<Self, HarnessError> {
        let working_dir_error = |source| HarnessError::WorkingDir {
            path: dir.to_path_buf(),
            source,
        };

        let previous = env::current_dir().map_err(working_dir_error)?;
        let current = previous.join(dir);
        env::set_current_dir(&current).map_err(working_dir_error)?;
        tracing::debug!(from = %previous.display(), to = %current.display(), "entered harness root");

        Ok(Self { previous, current })
    }

    /// Absolute path of the directory entered.
    pub fn dir(&self) -> &Path {
        &self.current
    }

    /// Directory that will be restored on drop.
    pub fn previous(&self) -> &Path {
        &self.previous
    }
}

impl Drop for WorkingDirGuard {
    fn drop(&mut self) {
        match env::set_current_dir(&self.previous) {
            Ok(()) => tracing::debug!(to = %self.previous.display(), "restored working directory"),
            Err(e) => tracing::error!(
                to = %self.previous.display(),
                error = %e,
                "failed to restore working directory"
            ),
        }
    }
}
