//! # StudyBot Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studybot
//!
//! ## Overview
//!
//! Shared utilities kept apart from the assistant logic (`assistant::`) and
//! the infrastructure (`core::`):
//!
//! - **`fs`**: Filesystem helpers (ensure directory, read/write whole files).
//! - **`storage`**: The `BlobStore` key-value boundary with file and memory backends.
//!

/// Utilities for filesystem operations.
pub mod fs;
/// Key-value blob storage used to persist conversation history.
pub mod storage;
