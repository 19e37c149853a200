// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for wb-core operations.

use thiserror::Error;

/// All possible errors that can occur in wb-core operations.
///
/// Only structural problems with a snapshot are errors. Item-level anomalies
/// (missing status, body or repository) are absorbed by normalization.
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(String),

    #[error("malformed snapshot: item {index}: {reason}")]
    MalformedItem { index: usize, reason: String },

    #[error("invalid status: '{0}'\n  hint: valid statuses are: inbox, ready, doing, blocked, done, unknown")]
    InvalidStatus(String),

    #[error("invalid task type: '{0}'\n  hint: valid types are: investigate, decide, implement, verify")]
    InvalidTaskType(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for wb-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
