//! # StudyBot Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studybot
//!
//! ## Overview
//!
//! Top-level commands of the `studybot` binary. Each module defines its clap
//! arguments struct and an async `handle_*` function taking those arguments
//! and the loaded configuration.
//!
//! - `chat`: Interactive chat in the terminal
//! - `ask`: One-shot question and answer
//! - `history`: Inspect the saved conversation
//!

/// Single-question mode. Does not touch history.
pub mod ask;
/// Interactive chat loop backed by `assistant::ChatWidget`.
pub mod chat;
/// Command group for inspecting saved history. Includes `show` and `path`.
pub mod history;
