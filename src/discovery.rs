//! Directory enumeration and recursive traversal
//!
//! This module handles:
//! - Classifying paths as directories or regular files
//! - Listing the immediate children of a directory with exclusion rules
//! - Walking a directory tree depth-first and collecting files
//!
//! Traversal skips dependency caches (`node_modules`), hidden directories,
//! and `build*` output directories. Symbolic links are not tracked, so a
//! link cycle recurses until the stack is exhausted.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FsweepError, Result};

/// Path fragment identifying dependency cache directories.
const DEPENDENCY_CACHE_DIR: &str = "node_modules";

/// Leading prefix of build output directories.
const BUILD_DIR_PREFIX: &str = "build";

/// Check whether `path` exists and is a directory.
///
/// Fails with a stat error when the path does not exist.
pub fn is_directory(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| FsweepError::StatFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(metadata.is_dir())
}

/// Check whether `path` exists and is a regular file.
///
/// Fails with a stat error when the path does not exist.
pub fn is_file(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| FsweepError::StatFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(metadata.is_file())
}

/// True when the path points into a dependency cache.
pub fn is_dependency_cache(path: &Path) -> bool {
    path.to_string_lossy().contains(DEPENDENCY_CACHE_DIR)
}

/// True when the final path segment is hidden (starts with `.`).
pub fn is_hidden(path: &Path) -> bool {
    final_segment_starts_with(path, ".")
}

/// True when the final path segment is build output (starts with `build`).
pub fn is_build_output(path: &Path) -> bool {
    final_segment_starts_with(path, BUILD_DIR_PREFIX)
}

fn final_segment_starts_with(path: &Path, prefix: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(prefix))
}

/// A directory survives enumeration only if it passes every exclusion rule.
fn is_excluded(path: &Path) -> bool {
    is_dependency_cache(path) || is_hidden(path) || is_build_output(path)
}

/// List the immediate subdirectories of `path`, excluding dependency
/// caches, hidden directories, and build output.
///
/// Order follows the platform's directory-listing order; no sorting is
/// applied. Fails when `path` does not exist or is not a directory.
pub fn directories_in(path: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let path = path.as_ref();
    let entries = read_dir_entries(path)?;

    Ok(entries
        .into_iter()
        .filter(|entry| entry.is_dir())
        .filter(|entry| !is_excluded(entry.as_path()))
        .collect())
}

/// List the immediate regular files of `path`.
pub fn files_in(path: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    files_in_matching(path, |_| true)
}

/// List the immediate regular files of `path` that satisfy `filter`.
pub fn files_in_matching<P, F>(path: P, filter: F) -> Result<Vec<PathBuf>>
where
    P: AsRef<Path>,
    F: Fn(&Path) -> bool,
{
    let path = path.as_ref();
    let entries = read_dir_entries(path)?;

    Ok(entries
        .into_iter()
        .filter(|entry| entry.is_file())
        .filter(|entry| filter(entry.as_path()))
        .collect())
}

/// Collect every directory below `path`, depth-first pre-order: each
/// subdirectory is emitted before its own descendants, and a sibling is
/// only visited once the previous subtree is exhausted.
///
/// The same exclusion rules as [`directories_in`] apply at every level, so
/// an excluded directory prunes its whole subtree.
pub fn directories_recursively_in(path: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let subdirs = directories_in(path)?;
    let mut result = Vec::new();

    for dir in subdirs {
        let descendants = directories_recursively_in(&dir)?;
        result.push(dir);
        result.extend(descendants);
    }

    Ok(result)
}

/// Collect every file below `path`, in directory traversal order.
///
/// Files directly inside `path` itself are not returned; only files living
/// in discovered subdirectories are. Callers that need the root's own files
/// should combine this with [`files_in`].
pub fn files_recursively_in(path: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    files_recursively_in_matching(path, |_| true)
}

/// Collect every file below `path` that satisfies `filter`.
///
/// Same root-exclusion behavior as [`files_recursively_in`].
pub fn files_recursively_in_matching<P, F>(path: P, filter: F) -> Result<Vec<PathBuf>>
where
    P: AsRef<Path>,
    F: Fn(&Path) -> bool,
{
    let dirs = directories_recursively_in(path)?;
    let mut files = Vec::new();

    for dir in dirs {
        files.extend(files_in_matching(&dir, &filter)?);
    }

    Ok(files)
}

/// Read the child paths of a directory, joined onto `path`.
fn read_dir_entries(path: &Path) -> Result<Vec<PathBuf>> {
    let read_dir = fs::read_dir(path).map_err(|e| FsweepError::ReadDirFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut children = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| FsweepError::ReadDirFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        children.push(entry.path());
    }

    Ok(children)
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_cache_detection() {
        assert!(is_dependency_cache(Path::new("app/node_modules/lodash")));
        assert!(is_dependency_cache(Path::new("node_modules")));
        assert!(!is_dependency_cache(Path::new("app/src")));
    }

    #[test]
    fn test_hidden_detection_uses_final_segment() {
        assert!(is_hidden(Path::new(".git")));
        assert!(is_hidden(Path::new("repo/.github")));
        assert!(!is_hidden(Path::new(".config/visible")));
    }

    #[test]
    fn test_build_output_detection() {
        assert!(is_build_output(Path::new("build")));
        assert!(is_build_output(Path::new("app/build-debug")));
        assert!(!is_build_output(Path::new("app/rebuild")));
    }

    #[test]
    fn test_is_directory_missing_path_fails() {
        let result = is_directory("does/not/exist");
        assert!(matches!(result, Err(FsweepError::StatFailed { .. })));
    }
}
