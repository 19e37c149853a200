// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `workboard list` JSON output.

use schemars::JsonSchema;
use serde::Serialize;

use wb_core::Status;

use super::ItemJson;

/// JSON output structure for the list command.
#[derive(Debug, JsonSchema, Serialize)]
pub struct ListOutputJson {
    /// Non-empty status groups in display order.
    pub groups: Vec<GroupJson>,
    /// Filter expressions that were applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters_applied: Option<Vec<String>>,
}

/// Items sharing one status.
#[derive(Debug, JsonSchema, Serialize)]
pub struct GroupJson {
    pub status: Status,
    pub count: usize,
    pub items: Vec<ItemJson>,
}
