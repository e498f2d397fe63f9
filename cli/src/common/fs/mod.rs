//! # StudyBot Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studybot
//!
//! Import from the submodule directly, e.g. `crate::common::fs::io::write_string_to_file`.
//!

/// Basic file I/O (`ensure_dir_exists`, `read_file_to_string`, `write_string_to_file`).
pub mod io;
