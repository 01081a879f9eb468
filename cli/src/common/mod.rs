//! # Charlie Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared utilities that are not specific to a single command. Command logic
//! lives under `commands::`, foundational infrastructure under `core::`.
//!
//! - **`ui`**: Line-oriented prompt and output helpers for the terminal.
//!

/// Utilities for terminal user interaction (prompts, output lines).
pub mod ui;
