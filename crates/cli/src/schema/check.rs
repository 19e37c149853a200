// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `workboard check` JSON output.

use schemars::JsonSchema;
use serde::Serialize;

use wb_core::StatusCounts;

use super::ViolationJson;

/// JSON output structure for the check command.
#[derive(Debug, JsonSchema, Serialize)]
pub struct CheckOutputJson {
    /// Total reported by the snapshot (falls back to `processed`).
    pub reported_total: u64,
    /// Number of items read.
    pub processed: usize,
    /// Items per status.
    pub counts: StatusCounts,
    /// Findings in detection order.
    pub violations: Vec<ViolationJson>,
}
