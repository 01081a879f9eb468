//! # Charlie Chat Command
//!
//! File: cli/src/commands/chat/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The one thing Charlie does: build the bot, train it on the fixed example
//! exchange, and talk to the user over stdin/stdout until they say goodbye.
//!
//! ## Architecture
//!
//! - `conversation.rs`: the read-respond-print loop and its state machine
//! - `handle_chat` (here): wires the configured bot and the process's stdio
//!   into a conversation
//!
//! ## Examples
//!
//! ```bash
//! $ charlie
//! Charlie: Hello! How can I assist you today?
//! You: Thank you!
//! Charlie: You're welcome!
//! You: bye
//! Charlie: Goodbye! Have a great day!
//! ```
//!
use crate::bot::{ListMatchBot, ResponseGenerator, TRAINING_CORPUS};
use crate::core::config::Config;
use crate::core::error::Result;
use anyhow::Context;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// The conversation loop and its session types.
pub mod conversation;

use conversation::{Conversation, SessionSummary};

/// # Handle Chat (`handle_chat`)
///
/// Builds a `ListMatchBot` from the configuration and runs a conversation on
/// the locked standard input and output of the process.
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` once the user types an exit word; otherwise the
///   error that ended the session (closed input, I/O or generator failure).
pub fn handle_chat(config: &Config) -> Result<()> {
    let mut bot = ListMatchBot::new(config.bot.learn_responses);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = start_session(config, &mut bot, &mut stdin.lock(), &mut stdout.lock())?;

    info!(
        "Conversation ended after {} turn(s); bot holds {} statement(s).",
        summary.turns,
        bot.statement_count()
    );
    Ok(())
}

/// Trains `generator` on [`TRAINING_CORPUS`] and runs one conversation.
pub fn start_session<R: BufRead, W: Write>(
    config: &Config,
    generator: &mut dyn ResponseGenerator,
    input: &mut R,
    output: &mut W,
) -> Result<SessionSummary> {
    generator
        .train(&TRAINING_CORPUS)
        .context("Failed to train the chatbot")?;
    info!("Trained {} on {} example lines.", config.bot.bot_name, TRAINING_CORPUS.len());

    let mut conversation = Conversation::new(&config.bot, generator);
    let summary = conversation.run(input, output)?;
    debug!("Session finished in state {:?}", conversation.state());
    Ok(summary)
}
