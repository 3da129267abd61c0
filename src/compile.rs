//! Compiler invocation for stale test directories.

use std::path::{Path, PathBuf};

use crate::config::HarnessConfig;
use crate::error::Result;
use crate::exec::{CommandSpec, Launcher};

/// Invoke the external compiler over a test case's full source set.
///
/// The compiler runs with the case directory as its working directory and is
/// handed bare file names, matching how it resolves references between the
/// sources. Its exit status is deliberately ignored: a failed compile
/// surfaces downstream as runner divergence on missing or stale artifacts,
/// which the comparison reports like any other failure.
pub fn compile_case(
    launcher: &dyn Launcher,
    config: &HarnessConfig,
    case_dir: &Path,
    sources: &[PathBuf],
) -> Result<()> {
    let mut spec = CommandSpec::new(&config.compiler).current_dir(case_dir);
    for source in sources {
        if let Some(name) = source.file_name() {
            spec = spec.arg(name);
        }
    }

    tracing::debug!(
        case = %case_dir.display(),
        compiler = %config.compiler,
        files = sources.len(),
        "invoking compiler"
    );
    let _ = launcher.run_streamed(&spec)?;
    Ok(())
}
