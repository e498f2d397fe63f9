//! # StudyBot Blob Storage (`common::storage`)
//!
//! File: cli/src/common/storage/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studybot
//!
//! ## Overview
//!
//! The conversation history is persisted as a single string blob under a
//! fixed key. This module defines the key-value boundary the history store
//! talks to, plus two implementations:
//!
//! - **`file`**: `FileBlobStore`, one `<key>.json` file per key inside a directory.
//! - **`memory`**: `MemoryBlobStore`, a `HashMap` for embedding and tests.
//!
//! Size ceilings are the backing store's business; the history store keeps
//! its own 50-message cap.
//!
//! ## Architecture
//!
//! - **`BlobStore`**: The trait the history store is generic over. `get`
//!   distinguishes "nothing stored" (`Ok(None)`) from a failed read (`Err`).
//! - **`validate_key`**: Shared key check. Config validation calls it up front
//!   and `FileBlobStore` calls it again before building any path.
//!
//! Errors from a backend are returned, never swallowed here. Whether a failure
//! is fatal is decided by the caller: `ConversationHistory` logs and carries
//! on, while `studybot history path` reports it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use studybot::common::storage::{BlobStore, FileBlobStore};
//!
//! let mut store = FileBlobStore::new("/tmp/studybot");
//! store.set("chatbotHistory", "[]")?;
//! assert_eq!(store.get("chatbotHistory")?.as_deref(), Some("[]"));
//! ```
//!
use crate::core::error::{StudybotError, Result};

pub mod file;
pub mod memory;

pub use file::FileBlobStore;
pub use memory::MemoryBlobStore;

/// A key-value substrate holding string blobs.
///
/// Implementations only need to round-trip whole values; there is no listing,
/// deletion or partial update.
pub trait BlobStore {
    /// Returns the blob stored under `key`, or `None` when nothing was stored.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: BlobStore + ?Sized> BlobStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Checks that `key` can be used as a storage key.
///
/// Keys double as file names for [`FileBlobStore`], so they must be
/// non-empty and free of path separators and `..`. Leading or trailing
/// whitespace is rejected as well.
///
/// # Errors
///
/// Returns `StudybotError::InvalidStorageKey` carrying the rejected key.
pub fn validate_key(key: &str) -> Result<()> {
    let trimmed = key.trim();
    if trimmed.is_empty()
        || trimmed != key
        || key.contains('/')
        || key.contains('\\')
        || key.contains("..")
    {
        anyhow::bail!(StudybotError::InvalidStorageKey(key.to_string()));
    }
    Ok(())
}
