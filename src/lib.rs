//! Differential test harness for the `jvm` bytecode interpreter.
//!
//! Each subdirectory of the test root is one test case: a set of `.java`
//! sources with a conventional `Main` entry point. The harness compiles them
//! with `javac` when the `.class` artifacts are stale, runs the program under
//! both the interpreter under test and the host `java` runtime, and reports
//! whether the two outputs are byte-for-byte identical.
//!
//! The compiler, the interpreter and the reference runtime are opaque
//! external executables; the harness only looks at their exit status and
//! captured output streams.
//!
//! ## Modules
//!
//! - `config` - executable names and test root, resolved at startup
//! - `cache` - mtime-based staleness check for compiled artifacts
//! - `exec` - process launcher seam (mockable in tests)
//! - `compile` - compiler invocation for stale test directories
//! - `run` - the two program runners and their captured outcomes
//! - `report` - output comparison and console reporting
//! - `driver` - test discovery and the per-case pipeline
//! - `cli` - command-line interface

pub mod cache;
pub mod cli;
pub mod compile;
pub mod config;
pub mod driver;
pub mod error;
pub mod exec;
pub mod report;
pub mod run;
