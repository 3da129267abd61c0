//! Harness configuration.
//!
//! Everything the harness treats as ambient in a shell session - where the
//! test cases live, which executables to invoke - is collected into one value
//! built at startup and passed into the driver. The defaults reproduce the
//! conventional layout: a `tests` directory next to the harness, the
//! interpreter built as `./jvm`, and the host toolchain on `PATH`.

use std::path::PathBuf;

/// File extension of test case sources.
pub const SOURCE_EXT: &str = "java";

/// File extension of compiled artifacts, same base name as the source.
pub const ARTIFACT_EXT: &str = "class";

/// Resolved configuration for one harness run.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Directory whose immediate subdirectories are the test cases
    pub test_root: PathBuf,
    /// External compiler, invoked with bare source file names
    pub compiler: String,
    /// The interpreter under test, invoked on the entry-point artifact
    pub interpreter: PathBuf,
    /// Trusted reference runtime, invoked with a classpath argument
    pub reference: String,
    /// Logical name of the entry-point unit
    pub entry_point: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            test_root: PathBuf::from("tests"),
            compiler: "javac".to_string(),
            interpreter: PathBuf::from("./jvm"),
            reference: "java".to_string(),
            entry_point: "Main".to_string(),
        }
    }
}

impl HarnessConfig {
    /// Path of the entry-point artifact inside a test case directory.
    pub fn entry_artifact(&self, case_dir: &std::path::Path) -> PathBuf {
        case_dir.join(format!("{}.{}", self.entry_point, ARTIFACT_EXT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_defaults_match_conventional_layout() {
        let config = HarnessConfig::default();
        assert_eq!(config.test_root, Path::new("tests"));
        assert_eq!(config.compiler, "javac");
        assert_eq!(config.interpreter, Path::new("./jvm"));
        assert_eq!(config.reference, "java");
        assert_eq!(config.entry_point, "Main");
    }

    #[test]
    fn test_entry_artifact_path() {
        let config = HarnessConfig::default();
        assert_eq!(
            config.entry_artifact(Path::new("tests/hello")),
            Path::new("tests/hello/Main.class")
        );
    }
}
