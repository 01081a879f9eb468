//! # Charlie Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module builds the process-wide bot configuration: the bot's name, the
//! greeting and farewell lines, the prompt label, the exit vocabulary, and
//! whether the bot learns from the conversation. The configuration is built
//! once at startup and never mutated afterwards.
//!
//! ## Architecture
//!
//! Configuration sources (later sources override earlier ones, field by field):
//! 1. Default values defined in the code
//! 2. User-specific `config.toml` in the platform config directory
//!    (e.g. `~/.config/charlie/config.toml` on Linux)
//! 3. A file passed explicitly with `--config <PATH>`
//!
//! A file only needs to set the fields it wants to change:
//!
//! ```toml
//! [bot]
//! bot_name = "Charlie"
//! greeting = "Hello! How can I assist you today?"
//! exit_words = ["exit", "quit", "bye", "ciao"]
//! ```
//!
//! After merging, the exit words are normalized (trimmed, lower-cased,
//! de-duplicated) and the result is validated.
//!
use crate::core::error::{ChatError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// The fully merged configuration handed to the chat command.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub bot: BotConfig,
}

/// Everything the conversation loop needs to know about the bot's voice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotConfig {
    /// Speaker label printed before every bot line.
    pub bot_name: String,
    /// Printed once, before the first prompt.
    pub greeting: String,
    /// Printed once, when an exit word is entered.
    pub farewell: String,
    /// Label printed (without a newline) before reading each line.
    pub prompt: String,
    /// Case-insensitive words that end the conversation.
    pub exit_words: Vec<String>,
    /// Whether user replies are stored as answers to the bot's last line.
    pub learn_responses: bool,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            bot_name: default_bot_name(),
            greeting: default_greeting(),
            farewell: default_farewell(),
            prompt: default_prompt(),
            exit_words: default_exit_words(),
            learn_responses: true,
        }
    }
}

impl BotConfig {
    /// Returns `true` if `input`, trimmed and case-folded, is in the exit vocabulary.
    ///
    /// Exit words are lower-cased during loading, so only the input is folded here.
    pub fn is_exit_word(&self, input: &str) -> bool {
        let folded = input.trim().to_lowercase();
        self.exit_words.iter().any(|word| *word == folded)
    }

    /// Formats a line attributed to the bot, e.g. `Charlie: Thank you!`.
    pub fn speak(&self, message: &str) -> String {
        format!("{}: {}", self.bot_name, message)
    }
}

/// On-disk shape of a configuration file. Every field is optional so a file
/// can override a single setting.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    bot: BotOverrides,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct BotOverrides {
    bot_name: Option<String>,
    greeting: Option<String>,
    farewell: Option<String>,
    prompt: Option<String>,
    exit_words: Option<Vec<String>>,
    learn_responses: Option<bool>,
}

fn default_bot_name() -> String {
    "Charlie".to_string()
}
fn default_greeting() -> String {
    "Hello! How can I assist you today?".to_string()
}
fn default_farewell() -> String {
    "Goodbye! Have a great day!".to_string()
}
fn default_prompt() -> String {
    "You: ".to_string()
}
fn default_exit_words() -> Vec<String> {
    ["exit", "quit", "bye"].iter().map(|w| w.to_string()).collect()
}

const USER_CONFIG_FILENAME: &str = "config.toml";

/// Loads, merges, normalizes and validates the configuration.
///
/// `explicit_path` comes from `--config`; if given, the file must exist.
pub fn load_config(explicit_path: Option<&str>) -> Result<Config> {
    let explicit_path = explicit_path.map(expand_config_path).transpose()?;

    let mut layers = Vec::new();
    if let Some(user_config) = load_user_config()? {
        layers.push(user_config);
    }
    if let Some(path) = explicit_path {
        info!("Loading configuration from: {}", path.display());
        layers.push(load_config_from_path(&path)?);
    }

    let config = build_config(layers);
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

/// Expands `~` in a `--config` argument and checks that the file exists.
fn expand_config_path(raw_path: &str) -> Result<PathBuf> {
    let path = PathBuf::from(shellexpand::tilde(raw_path).into_owned());
    if !path.is_file() {
        return Err(anyhow!(ChatError::Config(format!(
            "Configuration file '{}' does not exist.",
            path.display()
        ))));
    }
    Ok(path)
}

fn load_user_config() -> Result<Option<ConfigFile>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Charlie", "charlie") {
        let config_path = proj_dirs.config_dir().join(USER_CONFIG_FILENAME);
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

fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Applies each layer on top of the defaults, in order.
fn build_config(layers: Vec<ConfigFile>) -> Config {
    let mut config = Config::default();
    for layer in layers {
        apply_overrides(&mut config.bot, layer.bot);
    }
    config.bot.exit_words = normalize_exit_words(&config.bot.exit_words);
    config
}

fn apply_overrides(bot: &mut BotConfig, overrides: BotOverrides) {
    if let Some(bot_name) = overrides.bot_name {
        bot.bot_name = bot_name;
    }
    if let Some(greeting) = overrides.greeting {
        bot.greeting = greeting;
    }
    if let Some(farewell) = overrides.farewell {
        bot.farewell = farewell;
    }
    if let Some(prompt) = overrides.prompt {
        bot.prompt = prompt;
    }
    if let Some(exit_words) = overrides.exit_words {
        bot.exit_words = exit_words;
    }
    if let Some(learn_responses) = overrides.learn_responses {
        bot.learn_responses = learn_responses;
    }
}

fn normalize_exit_words(words: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(words.len());
    for word in words {
        let folded = word.trim().to_lowercase();
        if folded.is_empty() || normalized.contains(&folded) {
            continue;
        }
        normalized.push(folded);
    }
    normalized
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if config.bot.bot_name.trim().is_empty() {
        return Err(anyhow!(ChatError::Config(
            "bot_name cannot be empty.".to_string()
        )));
    }
    if config.bot.exit_words.is_empty() {
        return Err(anyhow!(ChatError::Config(
            "exit_words must contain at least one non-empty word.".to_string()
        )));
    }
    info!("Configuration validation successful.");
    Ok(())
}
