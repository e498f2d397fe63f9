//! # StudyBot Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studybot
//!
//! ## Overview
//!
//! This module defines the error types used throughout StudyBot. Library
//! functions that can fail return [`Result`], an alias for `anyhow::Result`,
//! and wrap a [`StudybotError`] when the failure has a specific meaning
//! (bad configuration, unusable storage key, unreadable blob, ...).
//!
//! ## Architecture
//!
//! - `StudybotError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The assistant operations themselves (`classify`, `respond`,
//! `format_for_display`) are infallible. History persistence is best-effort:
//! `ConversationHistory::persist` and `ConversationHistory::load` log failures
//! and carry on, while their `try_*` counterparts expose the error.
//!
//! ## Examples
//!
//! ```rust,ignore
//! // Return a specific error type
//! if key.contains('/') {
//!     anyhow::bail!(StudybotError::InvalidStorageKey(key.to_string()));
//! }
//!
//! // Add context to errors using anyhow
//! let blob = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read history blob: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for StudyBot.
#[derive(Error, Debug)]
pub enum StudybotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Storage error for key '{key}': {reason}")]
    Storage { key: String, reason: String },

    #[error("Invalid storage key '{0}': keys must be non-empty and contain no path separators.")]
    InvalidStorageKey(String),

    #[error("History serialization failed: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    #[error("Argument parsing error: {0}")]
    ArgumentParsing(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = StudybotError::Config("min_delay_ms exceeds max_delay_ms".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: min_delay_ms exceeds max_delay_ms"
        );

        let storage_err = StudybotError::Storage {
            key: "chatbotHistory".into(),
            reason: "disk full".into(),
        };
        assert_eq!(
            storage_err.to_string(),
            "Storage error for key 'chatbotHistory': disk full"
        );

        let key_err = StudybotError::InvalidStorageKey("../escape".into());
        assert!(key_err.to_string().starts_with("Invalid storage key '../escape'"));
    }

    #[test]
    fn test_serialization_error_from_serde() {
        let source = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: StudybotError = source.into();
        assert!(err.to_string().starts_with("History serialization failed:"));
    }
}
