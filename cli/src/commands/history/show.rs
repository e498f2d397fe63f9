//! # StudyBot History Show Handler
//!
//! File: cli/src/commands/history/show.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studybot
//!
//! Prints the saved conversation. The history is opened read-only: nothing
//! is appended or persisted, so showing never rewrites the blob.
//!
//! A malformed blob is reported as a warning and shown as empty, matching what
//! `studybot chat` would load.
//!
//! ```bash
//! studybot history show
//! studybot history show -n 4
//! studybot history show --json > backup.json
//! ```
//!
use crate::assistant::{ConversationHistory, Message, Sender};
use crate::common::storage::FileBlobStore;
use crate::core::config::Config;
use crate::core::error::{StudybotError, Result};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Print saved conversation history")]
pub struct ShowArgs {
    /// Only show the most recent N messages.
    #[arg(long, short = 'n')]
    pub last: Option<usize>,

    /// Print the messages as JSON, in the stored format.
    #[arg(long)]
    pub json: bool,
}

/// # Handle History Show (`handle_show`)
///
/// Prints every saved message, or only the last `--last N`. With `--json` the
/// selection is printed in the stored format, including an empty `[]`.
pub async fn handle_show(args: ShowArgs, config: &Config) -> Result<()> {
    let store = FileBlobStore::new(&config.storage.directory);
    let history = ConversationHistory::open(store, config.storage.key.as_str());
    info!("Loaded {} saved messages", history.len());

    let messages = history.to_vec();
    let skip = args
        .last
        .map_or(0, |n| messages.len().saturating_sub(n));
    let selected = &messages[skip..];

    if args.json {
        let json = serde_json::to_string_pretty(selected).map_err(StudybotError::from)?;
        println!("{}", json);
        return Ok(());
    }

    if selected.is_empty() {
        println!("No saved conversation history.");
        return Ok(());
    }
    for message in selected {
        println!("{}", describe(message));
    }
    Ok(())
}

fn describe(message: &Message) -> String {
    let who = match message.sender() {
        Sender::User => "You",
        Sender::Assistant => "Assistant",
    };
    format!(
        "[{}] {}: {}",
        message.timestamp().format("%Y-%m-%d %H:%M:%S UTC"),
        who,
        message.content()
    )
}
