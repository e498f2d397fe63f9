//! # StudyBot History Path Handler
//!
//! File: cli/src/commands/history/path.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studybot
//!
use crate::common::storage::FileBlobStore;
use crate::core::config::Config;
use crate::core::error::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Print the location of the history file")]
pub struct PathArgs {}

pub async fn handle_path(_args: PathArgs, config: &Config) -> Result<()> {
    let store = FileBlobStore::new(&config.storage.directory);
    let path = store.path_for(&config.storage.key)?;
    println!("{}", path.display());
    Ok(())
}
