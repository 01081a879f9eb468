//! # Statement Storage
//!
//! File: cli/src/bot/storage.rs
//! Author: Christi Mahu
//!
//! In-memory store of everything the bot has been told. Nothing is persisted;
//! the store lives and dies with the process.
//!

/// A single utterance and, if known, the utterance it was said in reply to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub text: String,
    pub in_response_to: Option<String>,
}

impl Statement {
    pub fn new(text: impl Into<String>, in_response_to: Option<String>) -> Self {
        Self {
            text: text.into(),
            in_response_to,
        }
    }
}

/// Ordered list of statements. Insertion order is preserved and used to
/// break ties, which keeps response selection deterministic.
#[derive(Debug, Default, Clone)]
pub struct StatementStore {
    statements: Vec<Statement>,
}

impl StatementStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// All statements recorded as replies to `text`, oldest first.
    pub fn responses_to<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a Statement> + 'a {
        self.statements
            .iter()
            .filter(move |s| s.in_response_to.as_deref() == Some(text))
    }

    /// Distinct texts that have at least one recorded reply, in the order
    /// they were first answered.
    pub fn known_prompts(&self) -> Vec<&str> {
        let mut prompts: Vec<&str> = Vec::new();
        for prompt in self
            .statements
            .iter()
            .filter_map(|s| s.in_response_to.as_deref())
        {
            if !prompts.contains(&prompt) {
                prompts.push(prompt);
            }
        }
        prompts
    }
}
