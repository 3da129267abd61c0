//! Command-line interface.
//!
//! With no flags, `jvmdiff` runs every test case under `tests/` with the
//! conventional toolchain (`javac`, `./jvm`, `java`). Flags only override
//! those defaults. The harness exit code reflects harness-level failures
//! (unreadable test root, missing executables), not per-case pass/fail:
//! test results are reported as printed text only. Known limitation.
//!
//! Command functions return `CliResult<T>` instead of calling
//! `process::exit`. Only the top-level `run()` function handles errors and
//! exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::config::HarnessConfig;
use crate::driver;
use crate::exec::ProcessLauncher;
use crate::report::ConsoleReporter;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
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

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Differential test harness for the jvm interpreter
#[derive(Parser, Debug)]
#[command(name = "jvmdiff")]
#[command(version = VERSION)]
#[command(about = "Differential test harness for the jvm interpreter", long_about = None)]
pub struct Cli {
    /// Directory whose subdirectories are the test cases
    #[arg(long = "test-root", value_name = "DIR", default_value = "tests")]
    pub test_root: PathBuf,

    /// External compiler executable
    #[arg(long, value_name = "EXE", default_value = "javac")]
    pub compiler: String,

    /// Interpreter-under-test executable
    #[arg(long, value_name = "EXE", default_value = "./jvm")]
    pub interpreter: PathBuf,

    /// Trusted reference runtime executable
    #[arg(long, value_name = "EXE", default_value = "java")]
    pub reference: String,

    /// Logical name of the entry-point unit
    #[arg(long = "entry-point", value_name = "NAME", default_value = "Main")]
    pub entry_point: String,
}

impl Cli {
    fn into_config(self) -> HarnessConfig {
        HarnessConfig {
            test_root: self.test_root,
            compiler: self.compiler,
            interpreter: self.interpreter,
            reference: self.reference,
            entry_point: self.entry_point,
        }
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

/// Execute the suite and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.into_config();
    let mut reporter = ConsoleReporter::new(io::stdout());

    driver::run_suite(&ProcessLauncher, &config, &mut reporter)
        .map_err(|e| CliError::failure(format!("Error: {}", e)))?;

    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// Tests
// ============================================================================
