//! Harness-level errors.
//!
//! Only environment problems are errors: an unreadable test root, an
//! executable that cannot be spawned. A test program that crashes or prints
//! the wrong thing is never an error - it is captured output that flows into
//! the comparison.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort the whole suite.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to read test root {}: {source}", .path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to scan test case {}: {source}", .path.display())]
    CaseScan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for harness operations.
pub type Result<T> = std::result::Result<T, HarnessError>;
