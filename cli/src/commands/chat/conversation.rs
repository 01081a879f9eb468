//! # Conversation Loop
//!
//! File: cli/src/commands/chat/conversation.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Drives one blocking, single-threaded conversation between the local user
//! and a [`ResponseGenerator`].
//!
//! ## Flow
//!
//! 1. Print the greeting once, attributed to the bot.
//! 2. Prompt and block for one line.
//! 3. If the trimmed, case-folded line is an exit word, print the farewell and
//!    move to `Ended`.
//! 4. Otherwise hand the line, exactly as typed, to the generator and print its
//!    reply attributed to the bot. Back to 2.
//!
//! The loop keeps no history. End of input and generator failures end the
//! session with an error; nothing is retried.
//!
use crate::bot::ResponseGenerator;
use crate::common::ui::prompts::{print_line, prompt_line};
use crate::core::config::BotConfig;
use crate::core::error::{ChatError, Result};
use anyhow::anyhow;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// The two states of a session. `Ended` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Listening,
    Ended,
}

/// What happened during a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Number of inputs that were answered (exit words excluded).
    pub turns: usize,
}

pub struct Conversation<'a, G: ResponseGenerator + ?Sized> {
    config: &'a BotConfig,
    generator: &'a mut G,
    state: SessionState,
}

impl<'a, G: ResponseGenerator + ?Sized> Conversation<'a, G> {
    pub fn new(config: &'a BotConfig, generator: &'a mut G) -> Self {
        Self {
            config,
            generator,
            state: SessionState::Listening,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Runs the session until an exit word is entered.
    ///
    /// # Errors
    ///
    /// * `ChatError::InputClosed` if input ends before an exit word.
    /// * `ChatError::Generator` if the generator fails to respond.
    /// * I/O errors from reading or writing the terminal.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<SessionSummary> {
        print_line(output, &self.config.speak(&self.config.greeting))?;

        let mut turns = 0;
        while self.state == SessionState::Listening {
            let line = prompt_line(input, output, &self.config.prompt)?;

            if self.config.is_exit_word(&line) {
                info!("Exit word {:?} received, ending conversation.", line.trim());
                print_line(output, &self.config.speak(&self.config.farewell))?;
                self.state = SessionState::Ended;
                continue;
            }

            debug!("Turn {}: forwarding {:?} to the response generator", turns + 1, line);
            let reply = self
                .generator
                .respond(&line)
                .map_err(|e| anyhow!(ChatError::Generator(format!("{:#}", e))))?;
            print_line(output, &self.config.speak(&reply))?;
            turns += 1;
        }

        Ok(SessionSummary { turns })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Records every call and echoes the input back. Fails on "boom".
    #[derive(Default)]
    struct RecordingGenerator {
        inputs: Vec<String>,
    }

    impl ResponseGenerator for RecordingGenerator {
        fn train(&mut self, _corpus: &[&str]) -> Result<()> {
            Ok(())
        }

        fn respond(&mut self, text: &str) -> Result<String> {
            self.inputs.push(text.to_string());
            if text == "boom" {
                return Err(anyhow!("matcher exploded"));
            }
            Ok(format!("echo {}", text))
        }
    }

    fn run_session(script: &str) -> (Result<SessionSummary>, String, Vec<String>) {
        let config = BotConfig::default();
        let mut generator = RecordingGenerator::default();
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();

        let result = Conversation::new(&config, &mut generator).run(&mut input, &mut output);
        (
            result,
            String::from_utf8(output).unwrap(),
            generator.inputs,
        )
    }

    #[test]
    fn test_hello_then_bye() {
        let (result, output, inputs) = run_session("hello\nbye\n");

        assert_eq!(result.unwrap(), SessionSummary { turns: 1 });
        assert_eq!(inputs, vec!["hello"]);
        assert_eq!(
            output,
            "Charlie: Hello! How can I assist you today?\n\
             You: Charlie: echo hello\n\
             You: Charlie: Goodbye! Have a great day!\n"
        );
    }

    #[test]
    fn test_every_casing_of_every_exit_word_ends_without_responding() {
        for word in ["exit", "EXIT", "Exit", "quit", "QUIT", "qUiT", "bye", "BYE", "Bye", " bye "] {
            let (result, output, inputs) = run_session(&format!("{}\nnever read\n", word));

            assert_eq!(result.unwrap().turns, 0, "word: {word:?}");
            assert!(inputs.is_empty(), "generator called for {word:?}");
            assert!(output.ends_with("Charlie: Goodbye! Have a great day!\n"));
        }
    }

    #[test]
    fn test_input_is_forwarded_exactly_as_typed() {
        let (result, output, inputs) = run_session("  Book a FLIGHT  \nexiting\nquit\n");

        assert_eq!(result.unwrap().turns, 2);
        assert_eq!(inputs, vec!["  Book a FLIGHT  ", "exiting"]);
        assert!(output.contains("Charlie: echo   Book a FLIGHT  \n"));
        assert!(output.contains("Charlie: echo exiting\n"));
    }

    #[test]
    fn test_greeting_printed_once_before_first_prompt() {
        let (_, output, _) = run_session("a\nb\nexit\n");

        assert_eq!(output.matches("Hello! How can I assist you today?").count(), 1);
        assert!(output.starts_with("Charlie: Hello! How can I assist you today?\nYou: "));
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let (result, output, inputs) = run_session("hello\n");

        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ChatError>(),
            Some(ChatError::InputClosed)
        ));
        assert_eq!(inputs, vec!["hello"]);
        assert!(!output.contains("Goodbye"));
    }

    #[test]
    fn test_generator_failure_ends_session() {
        let (result, output, inputs) = run_session("boom\nhello\nbye\n");

        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ChatError>(),
            Some(ChatError::Generator(msg)) if msg.contains("matcher exploded")
        ));
        assert_eq!(inputs, vec!["boom"]);
        assert!(!output.contains("echo"));
    }

    #[test]
    fn test_state_transitions_to_ended() {
        let config = BotConfig::default();
        let mut generator = RecordingGenerator::default();
        let mut conversation = Conversation::new(&config, &mut generator);
        assert_eq!(conversation.state(), SessionState::Listening);

        let mut input = Cursor::new("quit\n");
        let mut output = Vec::new();
        conversation.run(&mut input, &mut output).unwrap();
        assert_eq!(conversation.state(), SessionState::Ended);
    }

    #[test]
    fn test_custom_bot_voice() {
        let config = BotConfig {
            bot_name: "Rusty".to_string(),
            greeting: "Hi.".to_string(),
            farewell: "Later.".to_string(),
            prompt: "> ".to_string(),
            exit_words: vec!["ciao".to_string()],
            learn_responses: false,
        };
        let mut generator = RecordingGenerator::default();
        let mut input = Cursor::new("bye\nCIAO\n");
        let mut output = Vec::new();

        let summary = Conversation::new(&config, &mut generator)
            .run(&mut input, &mut output)
            .unwrap();

        assert_eq!(summary.turns, 1);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Rusty: Hi.\n> Rusty: echo bye\n> Rusty: Later.\n"
        );
    }
}
