//! JSON persistence helpers
//!
//! This module handles:
//! - Writing values as pretty-printed JSON, creating parent directories
//! - Loading JSON documents, treating an absent file as an empty object
//! - Reading text files line by line

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::error::{FsweepError, Result};
use crate::path_utils;

/// Serialize `data` as pretty-printed JSON (2-space indentation) and write
/// it to the path formed by joining `segments`.
///
/// Missing parent directories are created one level at a time, starting
/// from the current directory for relative paths; directories that already
/// exist are left untouched. An existing file is overwritten.
pub fn write_json_file<T, I, P>(data: &T, segments: I) -> Result<()>
where
    T: Serialize,
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut file_path = PathBuf::new();
    for segment in segments {
        file_path.push(segment);
    }

    let json =
        serde_json::to_string_pretty(data).map_err(|e| FsweepError::JsonSerializeFailed {
            reason: e.to_string(),
        })?;

    ensure_directory_structure_exists(&file_path)?;

    fs::write(&file_path, json).map_err(|e| FsweepError::FileWriteFailed {
        path: file_path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Load a JSON document from `file_path`.
///
/// Returns an empty object when the path does not resolve to an existing
/// regular file. Malformed content fails with a parse error; callers must
/// validate the returned shape themselves.
pub fn json_from(file_path: impl AsRef<Path>) -> Result<Value> {
    let file_path = file_path.as_ref();
    if !file_path.is_file() {
        return Ok(Value::Object(serde_json::Map::new()));
    }

    let content = fs::read_to_string(file_path).map_err(|e| FsweepError::FileReadFailed {
        path: file_path.display().to_string(),
        reason: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| FsweepError::JsonParseFailed {
        path: file_path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Check whether `file_path` is an existing regular file.
///
/// An absent path is `Ok(false)`; a path that exists but is a directory is
/// an explicit error, so callers can tell "absent" from "wrong type".
pub fn file_exists(file_path: impl AsRef<Path>) -> Result<bool> {
    let file_path = file_path.as_ref();
    match fs::metadata(file_path) {
        Ok(metadata) if metadata.is_file() => Ok(true),
        Ok(metadata) if metadata.is_dir() => Err(FsweepError::ExpectedFile {
            path: file_path.display().to_string(),
        }),
        Ok(_) => Ok(false),
        Err(_) => Ok(false),
    }
}

/// Read a UTF-8 text file and split it on `\n`.
///
/// A trailing newline yields a final empty segment, the way a plain split
/// does.
pub fn read_all_lines(file_path: impl AsRef<Path>) -> Result<Vec<String>> {
    let file_path = file_path.as_ref();
    let content = fs::read_to_string(file_path).map_err(|e| FsweepError::FileReadFailed {
        path: file_path.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok(content.split('\n').map(str::to_string).collect())
}

/// Create every missing parent directory of `file_path`, one level at a
/// time. Relative paths grow from the current directory, absolute paths
/// from the filesystem root.
fn ensure_directory_structure_exists(file_path: &Path) -> Result<()> {
    let mut partial = if file_path.is_absolute() {
        PathBuf::from(std::path::MAIN_SEPARATOR.to_string())
    } else {
        PathBuf::from(".")
    };

    for dir in path_utils::parent_dirs(&file_path.to_string_lossy()) {
        partial.push(dir);
        ensure_directory_exists(&partial)?;
    }

    Ok(())
}

/// Create `directory_path` unless it already exists.
fn ensure_directory_exists(directory_path: &Path) -> Result<()> {
    if directory_path.exists() {
        return Ok(());
    }

    fs::create_dir(directory_path).map_err(|e| FsweepError::CreateDirFailed {
        path: directory_path.display().to_string(),
        reason: e.to_string(),
    })
}
