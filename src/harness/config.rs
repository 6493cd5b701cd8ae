//! Harness layout configuration
//!
//! The harness finds everything by convention under one root directory:
//!
//! ```text
//! <root>/<build_dir>/<case><exe_suffix>     prebuilt example
//! <root>/<expected_dir>/<case>.txt         golden stdout
//! ```

use std::path::{Path, PathBuf};

use super::case::TestCase;

/// Cases run when none are named explicitly.
pub const DEFAULT_CASES: &[&str] = &["clear", "types"];
pub const DEFAULT_ROOT: &str = "tests";
pub const DEFAULT_BUILD_DIR: &str = "build";
pub const DEFAULT_EXPECTED_DIR: &str = "outputs";
/// The examples are cross-built for Windows, so artifacts carry `.exe` on every host.
pub const DEFAULT_EXE_SUFFIX: &str = ".exe";
/// Extension of golden files.
pub const GOLDEN_EXTENSION: &str = "txt";

/// Harness configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Directory the run happens in; relative paths resolve against the caller's working directory
    pub root: PathBuf,
    /// Directory holding the prebuilt examples, relative to `root`
    pub build_dir: PathBuf,
    /// Directory holding the golden files, relative to `root`
    pub expected_dir: PathBuf,
    /// Appended to the case name to form the artifact file name
    pub exe_suffix: String,
    /// Case names, run in this order
    pub cases: Vec<String>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            build_dir: PathBuf::from(DEFAULT_BUILD_DIR),
            expected_dir: PathBuf::from(DEFAULT_EXPECTED_DIR),
            exe_suffix: DEFAULT_EXE_SUFFIX.to_string(),
            cases: DEFAULT_CASES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl HarnessConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the harness root
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Set the build-output directory
    pub fn with_build_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.build_dir = dir.into();
        self
    }

    /// Set the expected-output directory
    pub fn with_expected_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.expected_dir = dir.into();
        self
    }

    /// Set the executable suffix (use `""` for extensionless artifacts)
    pub fn with_exe_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.exe_suffix = suffix.into();
        self
    }

    /// Replace the case list. An empty list keeps the defaults.
    pub fn with_cases<I, S>(mut self, cases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cases: Vec<String> = cases.into_iter().map(Into::into).collect();
        if !cases.is_empty() {
            self.cases = cases;
        }
        self
    }

    /// Resolve every configured case against `root`.
    pub fn test_cases(&self, root: &Path) -> Vec<TestCase> {
        self.cases.iter().map(|name| TestCase::resolve(name, root, self)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_layout() {
        let config = HarnessConfig::default();
        assert_eq!(config.root, PathBuf::from("tests"));
        assert_eq!(config.build_dir, PathBuf::from("build"));
        assert_eq!(config.expected_dir, PathBuf::from("outputs"));
        assert_eq!(config.exe_suffix, ".exe");
    }

    #[test]
    fn test_default_config_cases() {
        let config = HarnessConfig::default();
        assert_eq!(config.cases, vec!["clear", "types"]);
    }

    #[test]
    fn test_builder_chain() {
        let config = HarnessConfig::new()
            .with_root("/srv/quill")
            .with_build_dir("bin")
            .with_expected_dir("golden")
            .with_exe_suffix("")
            .with_cases(["hello"]);
        assert_eq!(config.root, PathBuf::from("/srv/quill"));
        assert_eq!(config.build_dir, PathBuf::from("bin"));
        assert_eq!(config.expected_dir, PathBuf::from("golden"));
        assert_eq!(config.exe_suffix, "");
        assert_eq!(config.cases, vec!["hello"]);
    }

    #[test]
    fn test_with_empty_cases_keeps_defaults() {
        let config = HarnessConfig::new().with_cases(Vec::<String>::new());
        assert_eq!(config.cases, vec!["clear", "types"]);
    }

    #[test]
    fn test_cases_preserve_order() {
        let config = HarnessConfig::new().with_cases(["types", "clear", "types"]);
        let names: Vec<_> = config
            .test_cases(Path::new("/h"))
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["types", "clear", "types"]);
    }
}
