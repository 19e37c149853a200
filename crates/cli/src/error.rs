// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the wbrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(String),

    #[error("invalid status: '{0}'\n  hint: valid statuses are: inbox, ready, doing, blocked, done, unknown")]
    InvalidStatus(String),

    #[error("invalid task type: '{0}'\n  hint: valid types are: investigate, decide, implement, verify, unknown")]
    InvalidTaskType(String),

    #[error("input not found: {0}\n  hint: pass --input or set report.input in workboard.toml")]
    InputNotFound(String),

    #[error("output path cannot be empty")]
    OutputPathEmpty,

    #[error("{count} rule violation(s) found")]
    ViolationsFound { count: usize },

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for wbrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<wb_core::Error> for Error {
    fn from(e: wb_core::Error) -> Self {
        match e {
            wb_core::Error::MalformedSnapshot(reason) => Error::MalformedSnapshot(reason),
            wb_core::Error::MalformedItem { index, reason } => {
                Error::MalformedSnapshot(format!("item {}: {}", index, reason))
            }
            wb_core::Error::InvalidStatus(s) => Error::InvalidStatus(s),
            wb_core::Error::InvalidTaskType(s) => Error::InvalidTaskType(s),
            wb_core::Error::Io(e) => Error::Io(e),
            wb_core::Error::Json(e) => Error::Json(e),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
