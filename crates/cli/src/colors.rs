// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help and report output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use wb_core::Status;

use crate::env;

/// ANSI 256-color codes.
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Default values/context: medium grey
    pub const CONTEXT: u8 = 245;

    pub const INBOX: u8 = 69;
    pub const READY: u8 = 41;
    pub const DOING: u8 = 135;
    pub const BLOCKED: u8 = 203;
    pub const DONE: u8 = 81;
    pub const UNKNOWN: u8 = 214;
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// ANSI reset sequence.
const RESET: &str = "\x1b[0m";

fn paint(code: u8, text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }
    format!("{}{}{}", fg256(code), text, RESET)
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

/// Apply literal color (commands, options) to text.
pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

/// Apply context color (default values, hints) to text.
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Color code for a status bucket.
pub fn status_code(status: Status) -> u8 {
    match status {
        Status::Inbox => codes::INBOX,
        Status::Ready => codes::READY,
        Status::Doing => codes::DOING,
        Status::Blocked => codes::BLOCKED,
        Status::Done => codes::DONE,
        Status::Unknown => codes::UNKNOWN,
    }
}

/// Apply the status color to text.
pub fn status(status: Status, text: &str) -> String {
    paint(status_code(status), text)
}

/// Colorize an examples help block.
///
/// Lines ending with `:` become headers; in `command  description` lines
/// the command is colored as a literal.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len() + 256);
    for line in text.lines() {
        if !result.is_empty() {
            result.push('\n');
        }

        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];

        if trimmed.ends_with(':') && !trimmed.contains("  ") {
            result.push_str(indent);
            result.push_str(&header(trimmed));
        } else if let Some(cmd_end) = find_description_start(trimmed) {
            result.push_str(indent);
            result.push_str(&literal(&trimmed[..cmd_end]));
            result.push_str(&trimmed[cmd_end..]);
        } else {
            result.push_str(line);
        }
    }
    result
}

/// Find where the description starts (after 2+ spaces following the command).
pub fn find_description_start(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let mut space_start = None;
    for (i, &b) in bytes.iter().enumerate() {
        match (b, space_start) {
            (b' ', None) => space_start = Some(i),
            (b' ', Some(_)) => {}
            (_, Some(start)) if i - start >= 2 => return Some(start),
            (_, Some(_)) => space_start = None,
            _ => {}
        }
    }
    None
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
