//! # Charlie Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the Charlie chatbot. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading the bot configuration
//! - Handing control to the chat command
//!
//! Running `charlie` with no arguments starts the conversation immediately.
//! All log output goes to stderr so stdout carries only the conversation.
//!
//! ## Examples
//!
//! ```bash
//! # Talk to Charlie
//! charlie
//!
//! # Use a custom voice and show debug logs
//! charlie -vv --config ~/charlie.toml
//! ```
//!
//! Exit status is 0 when the user types an exit word and 1 for any error,
//! including input ending before an exit word.
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod bot; // Response generation: the trait and the list-trained matcher
mod commands; // The chat command and its conversation loop
mod common; // Shared terminal utilities
mod core; // Core infrastructure (errors, config)

/// Defines the command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "charlie",
    about = "Charlie: a tiny trained chatbot for the terminal",
    long_about = "Trains a small chatbot on a fixed example exchange and chats with you.\n\
                  Type 'exit', 'quit' or 'bye' to leave.",
    version
)]
struct Cli {
    /// Path to a TOML file overriding the bot's name, greeting, farewell, prompt or exit words.
    #[arg(short, long, env = "CHARLIE_CONFIG")]
    config: Option<String>,
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
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

    let command_result = crate::core::config::load_config(cli.config.as_deref())
        .and_then(|config| commands::chat::handle_chat(&config));

    if let Err(e) = command_result {
        tracing::error!("Chat session failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
