//! # StudyBot Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studybot
//!
//! ## Overview
//!
//! This file serves as the main entry point for the `studybot` binary.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration (with the `--data-dir` override)
//! - Routing execution to appropriate command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Chat interactively
//! studybot chat
//!
//! # One-shot question with debug logging
//! studybot -vv ask "any study tips?"
//!
//! # Keep history somewhere else
//! studybot --data-dir ./tmp-history history show
//! ```
//!
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use studybot::{commands, core::config};
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "studybot",
    about = "📚 StudyBot: a study assistant with persistent chat history",
    long_about = "Chat with a keyword-driven study assistant in the terminal.\n\
                  Conversation history is kept between sessions (last 50 messages).",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Directory holding saved history (overrides config files).
    #[arg(long, global = true, env = "STUDYBOT_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    History(commands::history::HistoryArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match config::load_config(cli.data_dir.as_deref()) {
        Ok(cfg) => match cli.command {
            Commands::Chat(args) => commands::chat::handle_chat(args, &cfg).await,
            Commands::Ask(args) => commands::ask::handle_ask(args, &cfg).await,
            Commands::History(args) => commands::history::handle_history(args, &cfg).await,
        },
        Err(e) => Err(e),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
