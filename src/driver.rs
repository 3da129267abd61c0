//! Test discovery and the per-case pipeline.
//!
//! Strictly sequential: each case is compiled, run under both runtimes,
//! compared and reported before the next begins. The only suspension points
//! are the blocking waits on child processes.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cache;
use crate::compile;
use crate::config::HarnessConfig;
use crate::error::{HarnessError, Result};
use crate::exec::Launcher;
use crate::report::{ConsoleReporter, Outcome, compare};
use crate::run::{Runner, run_case};

/// Enumerate test cases: the immediate subdirectories of the test root,
/// sorted by name so report order is stable across filesystems.
pub fn discover_cases(test_root: &Path) -> Result<Vec<PathBuf>> {
    let discovery_error = |source| HarnessError::Discovery {
        path: test_root.to_path_buf(),
        source,
    };

    let mut cases = Vec::new();
    for entry in fs::read_dir(test_root).map_err(discovery_error)? {
        let path = entry.map_err(discovery_error)?.path();
        if path.is_dir() {
            cases.push(path);
        }
    }
    cases.sort();
    Ok(cases)
}

/// Run one test case end to end: compile if stale, run under test, run the
/// reference, compare, report.
pub fn run_case_pipeline<W: Write>(
    launcher: &dyn Launcher,
    config: &HarnessConfig,
    case_dir: &Path,
    reporter: &mut ConsoleReporter<W>,
) -> Result<Outcome> {
    reporter.on_case_start(case_dir)?;

    let sources = cache::source_files(case_dir)?;
    if cache::needs_compile(&sources)? {
        compile::compile_case(launcher, config, case_dir, &sources)?;
    }

    let actual = run_case(launcher, config, Runner::UnderTest, case_dir)?;
    let expected = run_case(launcher, config, Runner::Reference, case_dir)?;

    let outcome = compare(&actual, &expected);
    reporter.on_case_complete(outcome, &actual, &expected)?;
    Ok(outcome)
}

/// Run every discovered test case in order.
pub fn run_suite<W: Write>(
    launcher: &dyn Launcher,
    config: &HarnessConfig,
    reporter: &mut ConsoleReporter<W>,
) -> Result<()> {
    let cases = discover_cases(&config.test_root)?;
    tracing::debug!(root = %config.test_root.display(), cases = cases.len(), "discovered test cases");

    for case_dir in &cases {
        run_case_pipeline(launcher, config, case_dir, reporter)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("jvmdiff_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_discovery_keeps_directories_only_sorted() {
        let root = scratch_dir("discover");
        fs::create_dir(root.join("zeta")).unwrap();
        fs::create_dir(root.join("alpha")).unwrap();
        fs::write(root.join("stray.txt"), "not a case").unwrap();

        let cases = discover_cases(&root).unwrap();
        let names: Vec<_> = cases
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["alpha", "zeta"]);

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn test_missing_test_root_is_discovery_error() {
        let root = std::env::temp_dir().join(format!("jvmdiff_no_such_root_{}", std::process::id()));
        let err = discover_cases(&root).unwrap_err();
        assert!(matches!(err, HarnessError::Discovery { .. }));
    }
}
