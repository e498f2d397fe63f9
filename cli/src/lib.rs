//! # StudyBot
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studybot
//!
//! A study assistant that answers with canned replies picked by keyword
//! matching and keeps a capped, persisted conversation history.
//!
//! The library exposes the embeddable core (`assistant`), its storage
//! boundary (`common::storage`) and the configuration and error layers
//! (`core`). The `studybot` binary (main.rs) is a terminal host built on top
//! of it through `commands`.
//!
pub mod assistant;
pub mod commands;
pub mod common;
pub mod core;
