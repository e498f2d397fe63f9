//! # StudyBot Chat Command
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studybot
//!
//! ## Overview
//!
//! Implements `studybot chat`, an interactive terminal host for the assistant.
//! It stands in for the web widget's UI: lines typed on stdin are submitted to
//! a `ChatWidget`, and replies are printed once their typing delay elapses.
//!
//! ## Input
//!
//! - Any text: sent as a message. Blank lines are ignored.
//! - `/study-tips`, `/find-questions`, `/organize`: quick actions.
//! - `bye` or `quit`: leave immediately, dropping replies still pending.
//! - End of input: wait for pending replies, then leave.
//!
//! ```bash
//! studybot chat
//! echo "any exam tips?" | studybot chat --instant
//! ```
//!
use crate::assistant::{
    ChatWidget, QuickAction, RenderedMessage, ReplyScheduler, Sender, Turn, WidgetOptions,
};
use crate::common::storage::FileBlobStore;
use crate::core::config::{Config, TypingConfig};
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::io::BufRead;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// # Chat Arguments (`ChatArgs`)
#[derive(Parser, Debug)]
#[command(about = "Chat with the study assistant")]
pub struct ChatArgs {
    /// Deliver every reply immediately instead of simulating typing.
    /// Earlier replies are never cancelled in this mode.
    #[arg(long)]
    pub instant: bool,

    /// Print the display markup (links, <br>) instead of plain text.
    #[arg(long)]
    pub markup: bool,
}

/// One line of user input, interpreted.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Exit,
    QuickAction(&'a str),
    Text(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("bye") || trimmed.eq_ignore_ascii_case("quit") {
        Input::Exit
    } else if let Some(key) = trimmed.strip_prefix('/') {
        Input::QuickAction(key)
    } else {
        Input::Text(line)
    }
}

/// # Handle Chat Command (`handle_chat`)
///
/// Runs the read loop until `bye`/`quit` or end of input. History is loaded
/// from and saved to the configured storage directory.
pub async fn handle_chat(args: ChatArgs, config: &Config) -> Result<()> {
    let mut options = WidgetOptions::from_config(config);
    if args.instant {
        options.typing = TypingConfig {
            cancel_superseded: false,
            ..TypingConfig::instant()
        };
    }
    info!(
        "Starting chat with history in {} (key '{}')",
        config.storage.directory, options.storage_key
    );

    let store = FileBlobStore::new(&config.storage.directory);
    let mut widget = ChatWidget::with_entropy(store, options);
    let (mut scheduler, mut events) = ReplyScheduler::new(widget.options().typing.cancel_superseded);

    print_message(&widget.welcome(), args.markup);
    println!("(Quick actions: /study-tips, /find-questions, /organize. Type 'bye' to quit.)");

    let mut input = spawn_stdin_reader();
    loop {
        tokio::select! {
            line = input.recv() => {
                let Some(line) = line else {
                    debug!("End of input reached");
                    break;
                };
                let line = line.context("Failed to read from stdin")?;
                let turn = match parse_input(&line) {
                    Input::Exit => {
                        println!("Assistant: Goodbye! Good luck with your studies.");
                        return Ok(());
                    }
                    Input::QuickAction(key) => {
                        if QuickAction::from_key(key).is_none() {
                            eprintln!(
                                "Unknown quick action '/{}'. Try /study-tips, /find-questions or /organize.",
                                key
                            );
                        }
                        widget.quick_action(key)
                    }
                    Input::Text(text) => widget.submit(text),
                };
                if let Some(Turn { reply, delay, category, .. }) = turn {
                    if delay.is_zero() {
                        debug!("Delivering {} reply immediately", category);
                        if widget.options().typing.cancel_superseded {
                            scheduler.cancel_all();
                        }
                        print_message(&widget.deliver(reply), args.markup);
                    } else {
                        debug!("Queued {} reply", category);
                        eprintln!("Assistant is typing...");
                        scheduler.schedule(reply, delay);
                    }
                }
            }
            Some(event) = events.recv() => {
                if let Some(content) = scheduler.settle(event) {
                    print_message(&widget.deliver(content), args.markup);
                }
            }
        }
    }

    while scheduler.has_pending() {
        let Some(event) = events.recv().await else {
            break;
        };
        if let Some(content) = scheduler.settle(event) {
            print_message(&widget.deliver(content), args.markup);
        }
    }
    Ok(())
}

/// Reads stdin on a plain thread so a blocked read never holds up shutdown.
fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<std::io::Result<String>> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let failed = line.is_err();
            if tx.send(line).is_err() || failed {
                break;
            }
        }
    });
    rx
}

fn print_message(rendered: &RenderedMessage, markup: bool) {
    let who = match rendered.message.sender() {
        Sender::User => "You",
        Sender::Assistant => "Assistant",
    };
    let body = if markup {
        rendered.markup.as_str()
    } else {
        rendered.message.content()
    };
    println!("[{}] {}: {}", rendered.time, who, body);
}
