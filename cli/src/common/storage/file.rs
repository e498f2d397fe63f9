//! # File-Backed Blob Store
//!
//! File: cli/src/common/storage/file.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studybot
//!
//! ## Overview
//!
//! Each key maps to `<directory>/<key>.json`. The directory is created lazily
//! on the first write, so constructing a store never touches the disk.
//!
//! Reads and writes go through `common::fs::io`. Any I/O failure is reported
//! as `StudybotError::Storage` naming the key, with the underlying error
//! chain folded into the reason.
//!
use super::{validate_key, BlobStore};
use crate::common::fs::io;
use crate::core::error::{Result, StudybotError};
use std::path::{Path, PathBuf};
use tracing::debug;

const BLOB_EXTENSION: &str = "json";

/// Blob store persisting each key as a file in a directory.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    directory: PathBuf,
}

impl FileBlobStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Location of the file backing `key`.
    ///
    /// # Errors
    ///
    /// Returns `StudybotError::InvalidStorageKey` if `key` could escape the
    /// store directory.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.directory.join(format!("{}.{}", key, BLOB_EXTENSION)))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            debug!("No blob stored for key '{}' at {:?}", key, path);
            return Ok(None);
        }
        io::read_file_to_string(&path)
            .map(Some)
            .map_err(|e| storage_error(key, e))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        io::write_string_to_file(&path, value).map_err(|e| storage_error(key, e))
    }
}

fn storage_error(key: &str, cause: anyhow::Error) -> anyhow::Error {
    StudybotError::Storage {
        key: key.to_string(),
        reason: format!("{:#}", cause),
    }
    .into()
}
