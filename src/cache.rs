//! Build cache: mtime-based staleness for compiled artifacts.
//!
//! Every source file has an expected artifact next to it (same base name,
//! `.class` extension). The decision is directory-granular: one stale source
//! marks the whole case for recompilation, because the sources may reference
//! each other and the compiler recompiles everything it is handed anyway.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::config::{ARTIFACT_EXT, SOURCE_EXT};
use crate::error::{HarnessError, Result};

/// List the source files directly inside a test case directory, sorted by
/// name so the compiler command line is stable.
pub fn source_files(case_dir: &Path) -> Result<Vec<PathBuf>> {
    let scan_error = |source| HarnessError::CaseScan {
        path: case_dir.to_path_buf(),
        source,
    };

    let mut sources = Vec::new();
    for entry in fs::read_dir(case_dir).map_err(scan_error)? {
        let path = entry.map_err(scan_error)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == SOURCE_EXT) {
            sources.push(path);
        }
    }
    sources.sort();
    Ok(sources)
}

/// Expected artifact path for a source file.
pub fn artifact_path(source: &Path) -> PathBuf {
    source.with_extension(ARTIFACT_EXT)
}

/// Stale iff the artifact predates its source. Equal timestamps count as
/// fresh, so on filesystems with coarse mtime resolution a just-edited source
/// can silently reuse a stale artifact. Accepted limitation.
pub fn is_stale(source_mtime: SystemTime, artifact_mtime: SystemTime) -> bool {
    artifact_mtime < source_mtime
}

/// Whether the directory's sources need (re)compilation: true iff any source
/// has a missing or out-of-date artifact.
pub fn needs_compile(sources: &[PathBuf]) -> Result<bool> {
    for source in sources {
        let artifact = artifact_path(source);
        let Ok(artifact_meta) = fs::metadata(&artifact) else {
            tracing::debug!(source = %source.display(), "artifact missing, compiling");
            return Ok(true);
        };
        let source_mtime = fs::metadata(source)?.modified()?;
        let artifact_mtime = artifact_meta.modified()?;
        if is_stale(source_mtime, artifact_mtime) {
            tracing::debug!(source = %source.display(), "artifact out of date, compiling");
            return Ok(true);
        }
    }
    Ok(false)
}
