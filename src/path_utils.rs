//! Cross-platform path string utilities for fsweep
//!
//! This module provides helpers for splitting path strings into segments
//! with consistent behavior across platforms (Windows, macOS, Linux).

use std::path::Path;

/// Convert a path to a forward-slash string.
///
/// Glob matching and segment splitting operate on `/`-separated strings
/// regardless of the platform separator.
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Split `file_path` into its parent directory segments, shallowest first.
///
/// Segments equal to `.` are dropped, as is the final segment (the file or
/// leaf name). Empty segments produced by doubled or leading separators are
/// dropped as well.
///
/// # Examples
///
/// ```
/// use fsweep::path_utils::parent_dirs;
///
/// assert_eq!(parent_dirs("a/b/c.txt"), vec!["a", "b"]);
/// assert_eq!(parent_dirs("./a/c.txt"), vec!["a"]);
/// assert_eq!(parent_dirs("c.txt"), Vec::<String>::new());
/// ```
pub fn parent_dirs(file_path: &str) -> Vec<String> {
    let normalized = to_forward_slashes(Path::new(file_path));
    let mut segments: Vec<&str> = normalized
        .split('/')
        .filter(|segment| *segment != "." && !segment.is_empty())
        .collect();

    segments.pop();
    segments.into_iter().map(str::to_string).collect()
}

/// Return the final separator-delimited segment of `file_path`.
///
/// Returns `None` when the path is empty or ends in a separator.
///
/// # Examples
///
/// ```
/// use fsweep::path_utils::file_name_of;
///
/// assert_eq!(file_name_of("a/b/c.txt"), Some("c.txt".to_string()));
/// assert_eq!(file_name_of(""), None);
/// ```
pub fn file_name_of(file_path: &str) -> Option<String> {
    let normalized = to_forward_slashes(Path::new(file_path));
    normalized
        .split('/')
        .next_back()
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_dirs_nested() {
        assert_eq!(parent_dirs("a/b/c.txt"), vec!["a", "b"]);
    }

    #[test]
    fn test_parent_dirs_drops_current_dir_segments() {
        assert_eq!(parent_dirs("./a/b/c.txt"), vec!["a", "b"]);
        assert_eq!(parent_dirs("a/./b/c.txt"), vec!["a", "b"]);
    }

    #[test]
    fn test_parent_dirs_bare_filename() {
        assert_eq!(parent_dirs("c.txt"), Vec::<String>::new());
    }

    #[test]
    fn test_parent_dirs_doubled_separator() {
        assert_eq!(parent_dirs("a//b/c.txt"), vec!["a", "b"]);
    }

    #[test]
    fn test_parent_dirs_backslashes() {
        assert_eq!(parent_dirs("a\\b\\c.txt"), vec!["a", "b"]);
    }

    #[test]
    fn test_file_name_of_nested() {
        assert_eq!(file_name_of("a/b/c.txt"), Some("c.txt".to_string()));
    }

    #[test]
    fn test_file_name_of_bare_filename() {
        assert_eq!(file_name_of("c.txt"), Some("c.txt".to_string()));
    }

    #[test]
    fn test_file_name_of_empty() {
        assert_eq!(file_name_of(""), None);
        assert_eq!(file_name_of("a/b/"), None);
    }

    #[test]
    fn test_to_forward_slashes_unix() {
        let path = Path::new("/usr/local/bin");
        assert_eq!(to_forward_slashes(path), "/usr/local/bin");
    }

    #[test]
    fn test_to_forward_slashes_windows() {
        let path = Path::new("C:\\Users\\file.txt");
        assert_eq!(to_forward_slashes(path), "C:/Users/file.txt");
    }
}
