//! Common test utilities for fsweep integration tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch directory tree for integration tests
#[allow(dead_code)]
pub struct TestTree {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the tree root
    pub path: PathBuf,
}

impl TestTree {
    /// Create a new scratch tree
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a directory (and its parents) inside the tree
    #[allow(dead_code)]
    pub fn create_dir(&self, path: &str) -> PathBuf {
        let dir_path = self.path.join(path);
        std::fs::create_dir_all(&dir_path).expect("Failed to create directory");
        dir_path
    }

    /// Write a file inside the tree, creating parent directories
    #[allow(dead_code)]
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the tree
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a path exists in the tree
    #[allow(dead_code)]
    pub fn exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

/// Run `f` with the current directory set to `dir`, restoring the previous
/// one afterwards. Callers must serialize tests using this (the current
/// directory is process-wide state).
#[allow(dead_code)]
pub fn with_current_dir<T>(dir: &Path, f: impl FnOnce() -> T) -> T {
    let original = std::env::current_dir().expect("Failed to read current directory");
    std::env::set_current_dir(dir).expect("Failed to change directory");
    let result = f();
    std::env::set_current_dir(original).expect("Failed to restore directory");
    result
}
