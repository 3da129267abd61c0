//! The two program runners and their captured outcomes.
//!
//! Both runners share one contract: launch an external process for a test
//! case, block until it exits, and fold the observed streams into a
//! `RunOutcome`. A run that exits zero captures raw stdout; a nonzero exit
//! captures raw stderr as a tagged failure. A crash in either runtime is
//! ordinary comparison input, never a harness error.

use std::path::Path;

use crate::config::HarnessConfig;
use crate::error::Result;
use crate::exec::{CommandSpec, Launcher};

/// Byte-exact record of one process invocation's observable output.
///
/// Success and failure are kept as distinct variants rather than the classic
/// marker-prefixed byte string, so a program whose stdout happens to begin
/// with a failure marker cannot masquerade as a crashed run. The marker form
/// is reproduced only when rendering for display ([`rendered`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Exit code zero: raw stdout bytes
    Success(Vec<u8>),
    /// Nonzero exit: raw stderr bytes
    Failure(Vec<u8>),
}

/// Which runtime executes the test program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Runner {
    /// The interpreter being validated, addressed at the entry-point artifact
    UnderTest,
    /// The trusted runtime, addressed via classpath and logical entry point
    Reference,
}

impl Runner {
    /// Display prefix for a failed run. The two runners carry different
    /// markers so their failures stay textually distinguishable even when
    /// the error text coincides.
    pub fn failure_marker(self) -> &'static [u8] {
        match self {
            Runner::UnderTest => b"failed to run: ",
            Runner::Reference => b"java failed to run: ",
        }
    }

    /// Command line for running a test case under this runtime. Both forms
    /// must resolve to the same logical program.
    fn command(self, config: &HarnessConfig, case_dir: &Path) -> CommandSpec {
        match self {
            Runner::UnderTest => {
                CommandSpec::new(&config.interpreter).arg(config.entry_artifact(case_dir))
            }
            Runner::Reference => CommandSpec::new(&config.reference)
                .arg("-classpath")
                .arg(case_dir)
                .arg(&config.entry_point),
        }
    }
}

/// Run one test case under the given runtime and capture the outcome.
pub fn run_case(
    launcher: &dyn Launcher,
    config: &HarnessConfig,
    runner: Runner,
    case_dir: &Path,
) -> Result<RunOutcome> {
    let captured = launcher.run_captured(&runner.command(config, case_dir))?;
    if captured.success {
        Ok(RunOutcome::Success(captured.stdout))
    } else {
        tracing::debug!(
            case = %case_dir.display(),
            ?runner,
            status = ?captured.status,
            "runner exited nonzero"
        );
        Ok(RunOutcome::Failure(captured.stderr))
    }
}

/// Render an outcome in the marker-prefixed byte form used for display.
pub fn rendered(runner: Runner, outcome: &RunOutcome) -> Vec<u8> {
    match outcome {
        RunOutcome::Success(stdout) => stdout.clone(),
        RunOutcome::Failure(stderr) => {
            let mut bytes = runner.failure_marker().to_vec();
            bytes.extend_from_slice(stderr);
            bytes
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_under_test_command_addresses_entry_artifact() {
        let config = HarnessConfig::default();
        let spec = Runner::UnderTest.command(&config, Path::new("tests/hello"));
        assert_eq!(spec.program, "./jvm");
        assert_eq!(spec.args, [PathBuf::from("tests/hello/Main.class")]);
        assert_eq!(spec.cwd, None);
    }

    #[test]
    fn test_reference_command_uses_classpath() {
        let config = HarnessConfig::default();
        let spec = Runner::Reference.command(&config, Path::new("tests/hello"));
        assert_eq!(spec.program, "java");
        assert_eq!(spec.args, ["-classpath", "tests/hello", "Main"]);
    }

    #[test]
    fn test_rendered_success_is_raw_stdout() {
        let outcome = RunOutcome::Success(b"hello\n".to_vec());
        assert_eq!(rendered(Runner::UnderTest, &outcome), b"hello\n");
        assert_eq!(rendered(Runner::Reference, &outcome), b"hello\n");
    }

    #[test]
    fn test_rendered_failure_carries_runner_marker() {
        let outcome = RunOutcome::Failure(b"boom\n".to_vec());
        assert_eq!(
            rendered(Runner::UnderTest, &outcome),
            b"failed to run: boom\n"
        );
        assert_eq!(
            rendered(Runner::Reference, &outcome),
            b"java failed to run: boom\n"
        );
    }
}
