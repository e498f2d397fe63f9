//! # StudyBot Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studybot
//!
//! Shared helpers for the integration test files. Each test gets its own
//! temporary storage directory and runs from inside it, so no test reads or
//! writes the real history or picks up a `.studybot.toml` from the repo.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

/// # Get StudyBot Command (`studybot_cmd`)
///
/// ## Panics
/// Panics if the `studybot` binary cannot be found via `Command::cargo_bin`.
pub fn studybot_cmd() -> Command {
    Command::cargo_bin("studybot").expect("Failed to find studybot binary for testing")
}

/// A `studybot` command whose history lives in `data_dir`.
pub fn studybot_in(data_dir: &Path) -> Command {
    let mut cmd = studybot_cmd();
    cmd.current_dir(data_dir)
        .env("STUDYBOT_DATA_DIR", data_dir)
        .env_remove("RUST_LOG");
    cmd
}

pub fn temp_data_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp data dir")
}

/// Path of the history blob for the default storage key.
pub fn history_file(data_dir: &Path) -> std::path::PathBuf {
    data_dir.join("chatbotHistory.json")
}
