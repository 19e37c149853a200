// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Types for JSON command output.
//!
//! Commands serialize these directly, and `workboard schema` derives JSON
//! Schema definitions from the same types, so the two cannot drift.

use schemars::JsonSchema;
use serde::Serialize;

use wb_core::{Status, TaskType, Violation, WorkItem};

pub mod check;
pub mod list;
pub mod repos;

/// JSON representation of one work item.
#[derive(Debug, JsonSchema, Serialize)]
pub struct ItemJson {
    /// Normalized workflow status.
    pub status: Status,
    /// Task type from the title prefix.
    pub task_type: TaskType,
    /// Title without the `[Type]` prefix.
    pub title: String,
    /// Issue or pull request number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,
    /// Link to the tracker entry. Empty when unknown.
    pub url: String,
    /// `owner/name`, or `(unknown repo)`.
    pub repository: String,
}

impl From<&WorkItem> for ItemJson {
    fn from(item: &WorkItem) -> Self {
        ItemJson {
            status: item.status(),
            task_type: item.task_type(),
            title: item.display_title().to_string(),
            number: item.content.number,
            url: item.url().to_string(),
            repository: item.repo_key().name().to_string(),
        }
    }
}

/// JSON representation of one rule violation.
#[derive(Debug, JsonSchema, Serialize)]
pub struct ViolationJson {
    /// Rule details, tagged by `rule`.
    #[serde(flatten)]
    pub violation: Violation,
    /// Human-readable description.
    pub message: String,
}

impl From<&Violation> for ViolationJson {
    fn from(violation: &Violation) -> Self {
        ViolationJson {
            message: violation.message(),
            violation: violation.clone(),
        }
    }
}
