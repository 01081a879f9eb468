//! # Charlie Response Generation (`bot`)
//!
//! File: cli/src/bot/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The conversation loop never decides what Charlie says. It hands each user
//! line to a [`ResponseGenerator`] and prints whatever comes back. This module
//! defines that capability and ships one implementation of it.
//!
//! ## Architecture
//!
//! - **`ResponseGenerator`**: the two-operation trait (`train`, `respond`) the
//!   loop depends on. Anything that can map an utterance to a reply fits.
//! - **`storage`**: an in-memory list of statements, each remembering the
//!   statement it answered.
//! - **`comparison`**: text similarity scoring used to find the closest
//!   known statement.
//! - **`matcher`**: `ListMatchBot`, which trains from an ordered list of
//!   utterances and answers with the reply recorded for the closest match.
//!
//! ## Usage
//!
//! ```rust
//! use crate::bot::{ListMatchBot, ResponseGenerator, TRAINING_CORPUS};
//!
//! # fn run_example() -> crate::core::error::Result<()> {
//! let mut bot = ListMatchBot::new(true);
//! bot.train(&TRAINING_CORPUS)?;
//! let reply = bot.respond("Thank you!")?; // "You're welcome!"
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::Result;

pub mod comparison;
pub mod matcher;
pub mod storage;

pub use matcher::ListMatchBot;

/// The fixed example exchange Charlie is trained on at startup.
///
/// Alternating speakers; each line answers the one before it.
pub const TRAINING_CORPUS: [&str; 5] = [
    "Hi, can I help you?",
    "Sure, I'd like to book a flight to Iceland.",
    "Your flight has been booked.",
    "Thank you!",
    "You're welcome!",
];

/// Reply used when there is nothing to match the input against.
pub const DEFAULT_RESPONSE: &str = "I am sorry, but I do not understand.";

/// Something that can be trained on example utterances and then answer input.
pub trait ResponseGenerator {
    /// Feeds an ordered conversation to the generator. Each entry is treated
    /// as a reply to the one before it.
    fn train(&mut self, corpus: &[&str]) -> Result<()>;

    /// Produces one reply for one utterance.
    fn respond(&mut self, text: &str) -> Result<String>;
}
