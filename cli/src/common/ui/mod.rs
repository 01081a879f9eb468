//! # Charlie UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Terminal interaction helpers. Charlie only needs plain line prompts, so
//! there is a single submodule:
//!
//! - **`prompts`**: print a label, read one line; print one line.
//!
pub mod prompts;
