//! Process launcher seam.
//!
//! All child processes go through the `Launcher` trait so the pipeline can be
//! exercised in tests with a mock that records invocations and returns canned
//! output, without a Java toolchain present.
//!
//! The default implementation blocks on child completion with no timeout: a
//! non-terminating test program stalls the whole suite. Known limitation.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use crate::error::{HarnessError, Result};

/// A fully described child process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: OsString,
    pub args: Vec<OsString>,
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }
}

/// Captured result of one child process.
#[derive(Debug, Clone)]
pub struct Captured {
    /// Exit code, `None` if terminated by a signal
    pub status: Option<i32>,
    pub success: bool,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

/// Spawns child processes and waits for them to finish.
pub trait Launcher {
    /// Run to completion, capturing stdout and stderr as raw bytes.
    fn run_captured(&self, spec: &CommandSpec) -> Result<Captured>;

    /// Run to completion with stdio inherited from the harness.
    /// Returns whether the child exited successfully.
    fn run_streamed(&self, spec: &CommandSpec) -> Result<bool>;
}

/// Default launcher over blocking `std::process::Command`.
pub struct ProcessLauncher;

impl ProcessLauncher {
    fn command(spec: &CommandSpec) -> Command {
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args);
        if let Some(dir) = &spec.cwd {
            cmd.current_dir(dir);
        }
        cmd
    }

    fn spawn_error(spec: &CommandSpec, source: std::io::Error) -> HarnessError {
        HarnessError::Spawn {
            program: spec.program.to_string_lossy().into_owned(),
            source,
        }
    }
}

impl Launcher for ProcessLauncher {
    fn run_captured(&self, spec: &CommandSpec) -> Result<Captured> {
        tracing::debug!(program = %spec.program.to_string_lossy(), "spawning (captured)");
        let output = Self::command(spec)
            .output()
            .map_err(|e| Self::spawn_error(spec, e))?;

        Ok(Captured {
            status: output.status.code(),
            success: output.status.success(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }

    fn run_streamed(&self, spec: &CommandSpec) -> Result<bool> {
        tracing::debug!(program = %spec.program.to_string_lossy(), "spawning (streamed)");
        let status = Self::command(spec)
            .status()
            .map_err(|e| Self::spawn_error(spec, e))?;

        Ok(status.success())
    }
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;

    #[test]
    fn test_run_captured_collects_stdout() {
        let spec = CommandSpec::new("echo").arg("hello");
        let captured = ProcessLauncher.run_captured(&spec).unwrap();
        assert!(captured.success);
        assert_eq!(captured.status, Some(0));
        assert_eq!(captured.stdout, b"hello\n");
        assert!(captured.stderr.is_empty());
    }

    #[test]
    fn test_run_captured_reports_exit_code() {
        let spec = CommandSpec::new("sh").arg("-c").arg("echo oops >&2; exit 3");
        let captured = ProcessLauncher.run_captured(&spec).unwrap();
        assert!(!captured.success);
        assert_eq!(captured.status, Some(3));
        assert_eq!(captured.stderr, b"oops\n");
    }

    #[test]
    fn test_run_captured_respects_cwd() {
        let spec = CommandSpec::new("pwd").current_dir("/");
        let captured = ProcessLauncher.run_captured(&spec).unwrap();
        assert_eq!(captured.stdout, b"/\n");
    }

    #[test]
    fn test_missing_executable_is_spawn_error() {
        let spec = CommandSpec::new("jvmdiff-no-such-binary");
        let err = ProcessLauncher.run_captured(&spec).unwrap_err();
        assert!(matches!(err, HarnessError::Spawn { .. }));
    }
}
