// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Workflow status vocabulary.
//!
//! Five named statuses plus the `Unknown` catch-all. Declaration order is
//! the display order and the primary sort key; it is not alphabetical.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Workflow status of a work item after normalization.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum Status {
    /// Captured but not yet triaged.
    Inbox,
    /// Triaged and ready to pick up.
    Ready,
    /// Actively being worked on. Subject to the WIP limit.
    Doing,
    /// Waiting on something external. Must record a next step.
    Blocked,
    /// Finished.
    Done,
    /// Absent, empty or unrecognized upstream value.
    Unknown,
}

impl Status {
    /// Every status bucket in display order.
    pub const ALL: [Status; 6] = [
        Status::Inbox,
        Status::Ready,
        Status::Doing,
        Status::Blocked,
        Status::Done,
        Status::Unknown,
    ];

    /// Map a raw snapshot value onto the closed vocabulary.
    ///
    /// Only an exact, case-sensitive match of a named status is accepted.
    /// No trimming or case folding: `"inbox"` and `" Inbox"` are `Unknown`.
    pub fn normalize(raw: Option<&str>) -> Status {
        match raw {
            Some("Inbox") => Status::Inbox,
            Some("Ready") => Status::Ready,
            Some("Doing") => Status::Doing,
            Some("Blocked") => Status::Blocked,
            Some("Done") => Status::Done,
            _ => Status::Unknown,
        }
    }

    /// Position in the display order (`Inbox` = 0 … `Unknown` = 5).
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Returns the display name, identical to the upstream vocabulary.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Inbox => "Inbox",
            Status::Ready => "Ready",
            Status::Doing => "Doing",
            Status::Blocked => "Blocked",
            Status::Done => "Done",
            Status::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lenient parsing for command-line selectors.
///
/// Unlike [`Status::normalize`] this folds case, and it rejects unknown
/// words instead of mapping them to `Unknown`.
impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "inbox" => Ok(Status::Inbox),
            "ready" => Ok(Status::Ready),
            "doing" => Ok(Status::Doing),
            "blocked" => Ok(Status::Blocked),
            "done" => Ok(Status::Done),
            "unknown" => Ok(Status::Unknown),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
