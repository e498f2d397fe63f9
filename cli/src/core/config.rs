//! # StudyBot Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studybot
//!
//! ## Overview
//!
//! This module implements the configuration system for StudyBot, handling loading,
//! merging, validation, and access to configuration data. It combines defaults,
//! user settings, project-specific overrides and command-line overrides.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line overrides (`--data-dir`, `STUDYBOT_DATA_DIR`)
//! 2. Project-specific `.studybot.toml` in current directory or ancestors
//! 3. User-specific `~/.config/studybot/config.toml`
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [storage]
//! directory = "~/.local/share/studybot"
//! key = "chatbotHistory"
//!
//! [display]
//! escape_html = true
//!
//! [typing]
//! min_delay_ms = 1000
//! max_delay_ms = 3000
//! quick_action_delay_ms = 800
//! cancel_superseded = true
//! ```
//!
//! ```rust,ignore
//! let cfg = config::load_config(None)?;
//! let store = FileBlobStore::new(&cfg.storage.directory);
//! ```
//!
use crate::common::storage;
use crate::core::error::{StudybotError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::{debug, info, warn};

/// The effective configuration after every source has been applied.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Config {
    pub storage: StorageConfig,
    pub display: DisplayConfig,
    pub typing: TypingConfig,
}

/// Where and under which key the conversation history blob lives.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageConfig {
    /// Directory holding the blob files (can use ~). Will be expanded.
    pub directory: String,
    /// Fixed key the history blob is stored under.
    pub key: String,
}

/// Rendering options for message markup.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Escape HTML-special characters before linkifying. Disable only when
    /// byte-for-byte parity with the legacy widget markup is required.
    pub escape_html: bool,
}

/// Simulated typing delay before a reply is delivered.
#[derive(Debug, Clone, PartialEq)]
pub struct TypingConfig {
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    pub quick_action_delay_ms: u64,
    /// Cancel replies still pending when a new message is sent.
    pub cancel_superseded: bool,
}

/// The contents of one configuration file, as written.
///
/// A field is `Some` exactly when the file sets it, so a value that happens
/// to equal the built-in default still overrides lower-precedence files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct ConfigLayer {
    #[serde(default)]
    storage: StorageLayer,
    #[serde(default)]
    display: DisplayLayer,
    #[serde(default)]
    typing: TypingLayer,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct StorageLayer {
    directory: Option<String>,
    key: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct DisplayLayer {
    escape_html: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct TypingLayer {
    min_delay_ms: Option<u64>,
    max_delay_ms: Option<u64>,
    quick_action_delay_ms: Option<u64>,
    cancel_superseded: Option<bool>,
}

impl ConfigLayer {
    /// Overwrites every value of `config` that this layer sets.
    fn apply_to(self, config: &mut Config) {
        let ConfigLayer {
            storage,
            display,
            typing,
        } = self;
        if let Some(directory) = storage.directory {
            config.storage.directory = directory;
        }
        if let Some(key) = storage.key {
            config.storage.key = key;
        }
        if let Some(escape_html) = display.escape_html {
            config.display.escape_html = escape_html;
        }
        if let Some(ms) = typing.min_delay_ms {
            config.typing.min_delay_ms = ms;
        }
        if let Some(ms) = typing.max_delay_ms {
            config.typing.max_delay_ms = ms;
        }
        if let Some(ms) = typing.quick_action_delay_ms {
            config.typing.quick_action_delay_ms = ms;
        }
        if let Some(cancel) = typing.cancel_superseded {
            config.typing.cancel_superseded = cancel;
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            directory: default_storage_dir(),
            key: default_storage_key(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            escape_html: default_escape_html(),
        }
    }
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: default_min_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            quick_action_delay_ms: default_quick_action_delay_ms(),
            cancel_superseded: default_cancel_superseded(),
        }
    }
}

impl TypingConfig {
    /// A configuration with every delay set to zero.
    pub fn instant() -> Self {
        Self {
            min_delay_ms: 0,
            max_delay_ms: 0,
            quick_action_delay_ms: 0,
            ..Self::default()
        }
    }

    pub fn quick_action_delay(&self) -> Duration {
        Duration::from_millis(self.quick_action_delay_ms)
    }
}

fn default_storage_dir() -> String {
    if let Some(proj_dirs) = ProjectDirs::from("com", "StudyBot", "studybot") {
        return proj_dirs.data_dir().to_string_lossy().into_owned();
    }
    match dirs::home_dir() {
        Some(home) => home.join(".studybot").to_string_lossy().into_owned(),
        None => "~/.studybot".to_string(),
    }
}
fn default_storage_key() -> String {
    "chatbotHistory".to_string()
}
fn default_escape_html() -> bool {
    true
}
fn default_min_delay_ms() -> u64 {
    1000
}
fn default_max_delay_ms() -> u64 {
    3000
}
fn default_quick_action_delay_ms() -> u64 {
    800
}
fn default_cancel_superseded() -> bool {
    true
}

const PROJECT_CONFIG_FILENAME: &str = ".studybot.toml";

/// Loads, merges, expands and validates the configuration.
///
/// `data_dir` overrides `storage.directory` from every file source.
pub fn load_config(data_dir: Option<&Path>) -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config, project_config);
    if let Some(dir) = data_dir {
        debug!("Overriding storage directory from command line: {}", dir.display());
        merged_config.storage.directory = dir.to_string_lossy().into_owned();
    }
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<ConfigLayer>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "StudyBot", "studybot") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<ConfigLayer>> {
    if let Some(project_config_path) = find_project_config_path()? {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.studybot.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path() -> Result<Option<PathBuf>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let mut path: &Path = &current_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Ok(Some(project_config));
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return Ok(None);
        }
        match path.parent() {
            Some(parent) => path = parent,
            None => break,
        }
    }
    Ok(None)
}

fn load_config_from_path(path: &Path) -> Result<ConfigLayer> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Applies the user file, then the project file, over the built-in defaults.
fn merge_configs(user: Option<ConfigLayer>, project: Option<ConfigLayer>) -> Config {
    let mut merged = Config::default();
    for layer in [user, project].into_iter().flatten() {
        layer.apply_to(&mut merged);
    }
    merged
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    config.storage.directory = shellexpand::tilde(&config.storage.directory).into_owned();
    debug!("Expanded storage directory: {}", config.storage.directory);
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    let typing = &config.typing;
    if typing.min_delay_ms > typing.max_delay_ms {
        return Err(anyhow!(StudybotError::Config(format!(
            "typing.min_delay_ms ({}) must not exceed typing.max_delay_ms ({}).",
            typing.min_delay_ms, typing.max_delay_ms
        ))));
    }
    storage::validate_key(&config.storage.key)
        .map_err(|e| anyhow!(StudybotError::Config(e.to_string())))?;

    let storage_dir = PathBuf::from(&config.storage.directory);
    if !storage_dir.exists() {
        debug!(
            "Storage directory '{}' does not exist yet; it will be created on first save.",
            storage_dir.display()
        );
    } else if !storage_dir.is_dir() {
        return Err(anyhow!(StudybotError::Config(format!(
            "Configured storage path '{}' exists but is not a directory.",
            storage_dir.display()
        ))));
    }
    info!("Configuration validation successful.");
    Ok(())
}
