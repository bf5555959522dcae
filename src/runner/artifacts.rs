//! Wheel discovery and copying
//!
//! After the package builder finishes, every wheel in its output directory is
//! copied into the working directory.

use crate::error::{ArtifactError, ArtifactResult};
use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};

/// Find every file directly inside `dist_dir` whose name matches `pattern`
///
/// A missing output directory yields no wheels. Results are sorted by path.
pub fn collect_wheels(dist_dir: &Path, pattern: &str) -> ArtifactResult<Vec<PathBuf>> {
    let matcher = Pattern::new(pattern).map_err(|e| ArtifactError::InvalidPattern {
        pattern: pattern.to_string(),
        error: e.to_string(),
    })?;

    if !dist_dir.is_dir() {
        return Ok(Vec::new());
    }

    let read_error = |e: std::io::Error| ArtifactError::Read {
        path: dist_dir.to_path_buf(),
        error: e.to_string(),
    };

    let mut wheels = Vec::new();
    for entry in fs::read_dir(dist_dir).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| matcher.matches(name))
            .unwrap_or(false);

        if matches {
            wheels.push(path);
        }
    }

    wheels.sort();
    Ok(wheels)
}

/// Copy each wheel into `dest`, overwriting files with the same name
///
/// Contents and permissions are copied; modification times are not, so a
/// copy carries the time it was made rather than the build time.
/// Returns the destination paths in the same order as `wheels`.
pub fn copy_wheels(wheels: &[PathBuf], dest: &Path) -> ArtifactResult<Vec<PathBuf>> {
    let mut copied = Vec::with_capacity(wheels.len());

    for wheel in wheels {
        let file_name = wheel.file_name().ok_or_else(|| ArtifactError::Copy {
            path: wheel.clone(),
            error: "path has no file name".to_string(),
        })?;
        let target = dest.join(file_name);

        // Source and destination can be the same file when dist_dir is "."
        if same_file(wheel, &target) {
            copied.push(target);
            continue;
        }

        fs::copy(wheel, &target).map_err(|e| ArtifactError::Copy {
            path: wheel.clone(),
            error: e.to_string(),
        })?;
        copied.push(target);
    }

    Ok(copied)
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
