//! # StudyBot History Command Group
//!
//! File: cli/src/commands/history/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studybot
//!
//! ## Overview
//!
//! Router for `studybot history`, which inspects the saved conversation:
//! - `show`: print saved messages (optionally only the last N, or as JSON)
//! - `path`: print where the history blob lives
//!
//! There is no `clear`: history only goes away when the
//! storage directory is cleaned up by hand.
//!
//! ```bash
//! studybot history show --last 10
//! studybot history path
//! ```
//!
use crate::core::config::Config;
use crate::core::error::Result;
use clap::{Parser, Subcommand};

/// Implements `studybot history path`.
mod path;
/// Implements `studybot history show`.
mod show;

/// # History Command Group Arguments (`HistoryArgs`)
#[derive(Parser, Debug)]
pub struct HistoryArgs {
    #[command(subcommand)]
    command: HistoryCommand,
}

/// # History Subcommands (`HistoryCommand`)
#[derive(Subcommand, Debug)]
enum HistoryCommand {
    /// Print saved messages with their timestamps.
    Show(show::ShowArgs),
    /// Print the location of the history file.
    Path(path::PathArgs),
}

/// # Handle History Command Group (`handle_history`)
pub async fn handle_history(args: HistoryArgs, config: &Config) -> Result<()> {
    match args.command {
        HistoryCommand::Show(show_args) => show::handle_show(show_args, config).await,
        HistoryCommand::Path(path_args) => path::handle_path(path_args, config).await,
    }
}
