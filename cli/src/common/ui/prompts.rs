//! # Line Prompts (`common::ui::prompts`)
//!
//! File: cli/src/common/ui/prompts.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Small helpers for line-oriented terminal interaction. They are generic
//! over `BufRead`/`Write` so the conversation loop can be driven from an
//! in-memory buffer in tests and from locked stdin/stdout in the binary.
//!
//! - **`prompt_line`**: prints a label (no newline), flushes, blocks for one
//!   line, and returns it with the line terminator removed. End of input is
//!   reported as `ChatError::InputClosed`.
//! - **`print_line`**: writes one full line and flushes.
//!
use crate::core::error::{ChatError, Result};
use anyhow::{anyhow, Context};
use std::io::{BufRead, Write};

/// Prints `label`, then reads one line from `input`.
///
/// The returned string has its trailing `\n` / `\r\n` removed but is otherwise
/// untouched; any other whitespace is the caller's business.
///
/// # Errors
///
/// * `ChatError::InputClosed` if `input` is at end of file.
/// * An I/O error (with context) if writing the label or reading fails.
pub fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<String> {
    write!(output, "{}", label).context("Failed to write prompt")?;
    output.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    let bytes_read = input
        .read_line(&mut line)
        .map_err(ChatError::from)
        .context("Failed to read a line of input")?;
    if bytes_read == 0 {
        return Err(anyhow!(ChatError::InputClosed));
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Writes `line` followed by a newline and flushes, so output interleaves
/// correctly with the next prompt.
pub fn print_line<W: Write>(output: &mut W, line: &str) -> Result<()> {
    writeln!(output, "{}", line).context("Failed to write output line")?;
    output.flush().context("Failed to flush output")?;
    Ok(())
}
