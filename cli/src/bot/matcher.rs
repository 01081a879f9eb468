//! # List-Trained Best-Match Bot
//!
//! File: cli/src/bot/matcher.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `ListMatchBot` is the response generator Charlie ships with. It knows
//! nothing beyond what it has been told:
//!
//! - **Training** takes an ordered list of utterances and records each one as
//!   a reply to the utterance before it.
//! - **Responding** scores the input against every statement that has a
//!   recorded reply (see [`comparison::similarity`]), picks the closest one
//!   (earliest wins a tie) and returns the first reply recorded for it. With
//!   nothing to match against, it returns [`DEFAULT_RESPONSE`].
//! - **Learning** (optional) stores each user input as a reply to the bot's
//!   previous answer, so the conversation itself grows the store.
//!
use super::comparison;
use super::storage::{Statement, StatementStore};
use super::{ResponseGenerator, DEFAULT_RESPONSE};
use crate::core::error::{ChatError, Result};
use anyhow::anyhow;
use tracing::{debug, trace};

#[derive(Debug, Default)]
pub struct ListMatchBot {
    store: StatementStore,
    learn_responses: bool,
    previous_reply: Option<String>,
}

impl ListMatchBot {
    pub fn new(learn_responses: bool) -> Self {
        Self {
            learn_responses,
            ..Default::default()
        }
    }

    /// Number of statements currently stored.
    pub fn statement_count(&self) -> usize {
        self.store.len()
    }

    /// Finds the closest known prompt and returns its first reply with the
    /// match confidence.
    fn select_response(&self, text: &str) -> (String, f32) {
        if self.store.is_empty() {
            debug!("Bot has not been trained; using default response.");
            return (DEFAULT_RESPONSE.to_string(), 0.0);
        }

        let mut best: Option<(&str, f32)> = None;
        for prompt in self.store.known_prompts() {
            let confidence = comparison::similarity(text, prompt);
            trace!("Compared {:?} with {:?}: {:.2}", text, prompt, confidence);
            if best.map_or(true, |(_, best_confidence)| confidence > best_confidence) {
                best = Some((prompt, confidence));
            }
        }

        let Some((closest, confidence)) = best else {
            debug!("No known statements to match against; using default response.");
            return (DEFAULT_RESPONSE.to_string(), 0.0);
        };

        match self.store.responses_to(closest).next() {
            Some(reply) => {
                debug!(
                    "Closest match for {:?} is {:?} (confidence {:.2})",
                    text, closest, confidence
                );
                (reply.text.clone(), confidence)
            }
            None => (DEFAULT_RESPONSE.to_string(), 0.0),
        }
    }
}

impl ResponseGenerator for ListMatchBot {
    fn train(&mut self, corpus: &[&str]) -> Result<()> {
        if corpus.is_empty() {
            return Err(anyhow!(ChatError::EmptyCorpus));
        }

        let mut previous: Option<String> = None;
        for text in corpus {
            self.store
                .add(Statement::new(*text, previous.replace(text.to_string())));
        }
        debug!(
            "Trained on {} statements ({} stored)",
            corpus.len(),
            self.store.len()
        );
        Ok(())
    }

    fn respond(&mut self, text: &str) -> Result<String> {
        let (reply, _confidence) = self.select_response(text);

        if self.learn_responses {
            self.store
                .add(Statement::new(text, self.previous_reply.clone()));
        }
        self.previous_reply = Some(reply.clone());

        Ok(reply)
    }
}
