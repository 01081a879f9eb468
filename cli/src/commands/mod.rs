//! # Charlie Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Command handlers invoked from `main.rs`. Charlie has no subcommands; running
//! the binary goes straight to `chat::handle_chat`.
//!
//! - `chat`: Train the bot and run the interactive conversation loop
//!
pub mod chat;
