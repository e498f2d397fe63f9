//! # StudyBot Ask Command
//!
//! File: cli/src/commands/ask.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studybot
//!
//! Implements `studybot ask`: classify one message, print the reply and exit.
//! Conversation history is not touched.
//!
//! ```bash
//! studybot ask "how do I prepare for exams?"
//! studybot ask --category help me find a question   # prints "find-questions"
//! studybot ask --html "visit https://example.com"
//! ```
//!
use crate::assistant::{classify, format_for_display, respond, FormatOptions};
use crate::core::config::Config;
use crate::core::error::{StudybotError, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

/// # Ask Arguments (`AskArgs`)
#[derive(Parser, Debug)]
#[command(about = "Ask a single question and print the assistant's reply")]
pub struct AskArgs {
    /// The message to send. Multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Print the reply as display markup.
    #[arg(long, conflicts_with = "category")]
    pub html: bool,

    /// Print only the category the message was classified as.
    #[arg(long)]
    pub category: bool,
}

/// # Handle Ask Command (`handle_ask`)
///
/// Blank input is an error here, since there is no conversation to ignore it in.
pub async fn handle_ask(args: AskArgs, config: &Config) -> Result<()> {
    let text = args.text.join(" ");
    if text.trim().is_empty() {
        anyhow::bail!(StudybotError::ArgumentParsing(
            "Nothing to ask: the message is blank.".to_string()
        ));
    }

    let category = classify(&text);
    info!("Classified message as {}", category);
    if args.category {
        println!("{}", category);
        return Ok(());
    }

    let reply = respond(category, &mut StdRng::from_entropy());
    if args.html {
        let options = FormatOptions {
            escape_html: config.display.escape_html,
        };
        println!("{}", format_for_display(&reply, options));
    } else {
        println!("{}", reply);
    }
    Ok(())
}
