//! # Charlie Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout Charlie. There is very
//! little that can go wrong in a terminal chat, so the taxonomy is small:
//! - `ChatError`: a `thiserror` enum naming the failures the program knows about
//! - `Result<T>`: a type alias for `anyhow::Result<T>` so callers can add context
//!
//! Every error is propagated up to `main`, which prints it and exits with
//! status 1. Nothing is retried.
//!
//! ## Examples
//!
//! ```rust
//! // Raise a specific error
//! if config.bot.exit_words.is_empty() {
//!     return Err(ChatError::Config("exit_words cannot be empty".into()))?;
//! }
//!
//! // Check for end of input at the top level
//! if e.downcast_ref::<ChatError>().is_some_and(|ce| matches!(ce, ChatError::InputClosed)) {
//!     // ...
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the Charlie application.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input stream closed before an exit word was entered.")]
    InputClosed,

    #[error("Terminal I/O failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Cannot train on an empty corpus.")]
    EmptyCorpus,

    #[error("Response generator failed: {0}")]
    Generator(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
