//! Glob-driven file discovery
//!
//! Composes root inference, the recursive walker, and wax glob matching
//! into a best-effort file finder.

use std::path::{Path, PathBuf};

use wax::{CandidatePath, Glob, Pattern};

use crate::discovery;
use crate::path_utils;

/// Scan root returned when a pattern cannot narrow the starting directory.
const CURRENT_DIR: &str = "./";

/// Normalize a glob pattern for root inference and matching.
///
/// - Trims surrounding whitespace.
/// - Converts `\` to `/` so patterns work consistently across platforms.
/// - Strips leading `./` segments.
fn normalize_pattern(pattern: &str) -> String {
    let mut normalized = pattern.trim().replace('\\', "/");
    while normalized.starts_with("./") {
        normalized.drain(..2);
    }
    normalized
}

/// Normalize a candidate path to forward slashes without a leading `./`.
fn normalize_candidate(path: &Path) -> String {
    let mut normalized = path_utils::to_forward_slashes(path);
    while normalized.starts_with("./") {
        normalized.drain(..2);
    }
    normalized
}

/// Determine the narrowest directory a recursive scan for `pattern` must
/// start from.
///
/// Only a literal, non-wildcard leading segment can narrow the scan; any
/// ambiguity falls back to the current directory. An overly broad root is
/// safe because the match filter re-checks every path, but a root that is
/// too narrow would silently drop valid matches, so:
///
/// - an empty pattern scans from `./`;
/// - an absolute-style pattern (leading separator) scans from `./`;
/// - a pattern without any separator scans from `./`;
/// - otherwise the first segment is the root, unless it starts with `*`.
pub fn root_folder_from_glob(pattern: &str) -> PathBuf {
    let normalized = normalize_pattern(pattern);

    if normalized.is_empty() || normalized.starts_with('/') {
        return PathBuf::from(CURRENT_DIR);
    }

    let Some((first_segment, _)) = normalized.split_once('/') else {
        return PathBuf::from(CURRENT_DIR);
    };

    let first_segment = first_segment.trim();
    if first_segment.starts_with('*') {
        PathBuf::from(CURRENT_DIR)
    } else {
        PathBuf::from(first_segment)
    }
}

/// Check if a glob pattern matches a file path.
///
/// Uses wax for platform-independent glob matching; candidate paths are
/// normalized to forward slashes first. An invalid pattern falls back to
/// exact string comparison.
pub fn matches_glob(pattern: &str, file_path: &Path) -> bool {
    let pattern = normalize_pattern(pattern);
    let normalized = normalize_candidate(file_path);
    let candidate = CandidatePath::from(normalized.as_str());

    match Glob::new(&pattern) {
        Ok(glob) => glob.matched(&candidate).is_some(),
        Err(_) => pattern == normalized,
    }
}

/// Find every file matching `pattern`, scanning from the narrowest root the
/// pattern allows.
///
/// Results follow traversal order. The scan is best-effort: any failure
/// (missing root, unreadable directory, invalid pattern) yields an empty
/// vector, and the swallowed error is reported on the `tracing` debug
/// channel. Callers cannot distinguish "no matches" from "scan failed".
///
/// Files directly inside the scan root are not candidates; see
/// [`discovery::files_recursively_in`].
pub fn files_from_glob(pattern: &str) -> Vec<PathBuf> {
    let normalized = normalize_pattern(pattern);
    let glob = match Glob::new(&normalized) {
        Ok(glob) => glob,
        Err(err) => {
            tracing::debug!(pattern, error = %err, "invalid glob pattern, returning no matches");
            return Vec::new();
        }
    };

    let root = root_folder_from_glob(pattern);
    let scan = discovery::files_recursively_in_matching(&root, |path| {
        let candidate = normalize_candidate(path);
        glob.matched(&CandidatePath::from(candidate.as_str())).is_some()
    });

    match scan {
        Ok(files) => files,
        Err(err) => {
            tracing::debug!(pattern, error = %err, "glob scan failed, returning no matches");
            Vec::new()
        }
    }
}
