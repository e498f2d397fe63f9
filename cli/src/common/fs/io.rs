//! # StudyBot Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studybot
//!
//! ## Overview
//!
//! This module centralizes the filesystem input/output (I/O) operations
//! StudyBot needs. They are thin wrappers around `std::fs` that attach the
//! offending path to every error, so a failure surfaced by the file-backed
//! blob store reads as "Failed to write to file ..." rather than a bare
//! `os error 13`.
//!
//! ## Architecture
//!
//! - **`ensure_dir_exists`**: Creates a directory (and any missing parents) when
//!   absent. A path that exists but is not a directory is rejected with
//!   `StudybotError::FileSystem`.
//! - **`read_file_to_string`**: Reads a whole file into a `String`, adding the
//!   path as `anyhow` context on failure.
//! - **`write_string_to_file`**: Creates the parent directory via
//!   `ensure_dir_exists`, then overwrites the file with the given content.
//!
//! ## Usage
//!
//! - `common::storage::FileBlobStore` reads and writes history blobs through
//!   `read_file_to_string` and `write_string_to_file`.
//! - The storage directory is only created on the first write, so commands
//!   that merely read history (`studybot history show`) never touch the disk.
//!
//! ```rust,ignore
//! use crate::common::fs::io;
//! use std::path::Path;
//!
//! let blob = Path::new("/tmp/studybot/chatbotHistory.json");
//! io::write_string_to_file(blob, "[]")?;
//! assert_eq!(io::read_file_to_string(blob)?, "[]");
//! ```
//!
use crate::core::error::{StudybotError, Result};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist it is created recursively (like `mkdir -p`).
///
/// # Arguments
///
/// * `path` - The directory that must exist afterwards.
///
/// # Returns
///
/// * `Result<()>` - `Ok(())` when the directory already existed or was created.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        debug!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(StudybotError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
///
/// # Arguments
///
/// * `path` - The file to read.
///
/// # Errors
///
/// Returns an `Err` naming `path` if the file is missing, unreadable or not
/// valid UTF-8.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Writes string content to a file, overwriting it if it exists.
///
/// The parent directory is created first when missing.
///
/// # Arguments
///
/// * `path` - The file to write.
/// * `content` - The full new content of the file.
///
/// # Errors
///
/// Returns an `Err` if the parent directory cannot be created (including when
/// a file sits in its place) or the write itself fails.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    debug!("Wrote {} bytes to file: {:?}", content.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Nested directories are created in one call.
    #[test]
    fn test_ensure_dir_exists_creates_new() -> Result<()> {
        let base_dir = tempdir()?;
        let new_dir = base_dir.path().join("history/nested");
        assert!(!new_dir.exists());
        ensure_dir_exists(&new_dir)?;
        assert!(new_dir.is_dir());
        Ok(())
    }

    /// A file sitting where the directory should be is an error.
    #[test]
    fn test_ensure_dir_exists_path_is_file() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("chatbotHistory.json");
        fs::write(&file_path, "[]")?;
        let result = ensure_dir_exists(&file_path);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Path exists but is not a directory"));
        Ok(())
    }

    /// Writing creates the parent directory and a second write overwrites.
    #[test]
    fn test_write_then_overwrite() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("store/blob.json");
        write_string_to_file(&file_path, "first")?;
        write_string_to_file(&file_path, "second")?;
        assert_eq!(read_file_to_string(&file_path)?, "second");
        Ok(())
    }

    #[test]
    fn test_read_file_not_found() -> Result<()> {
        let base_dir = tempdir()?;
        let result = read_file_to_string(&base_dir.path().join("missing.json"));
        assert!(result.is_err());
        Ok(())
    }
}
