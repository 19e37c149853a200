// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `workboard repos` JSON output.

use schemars::JsonSchema;
use serde::Serialize;

use wb_core::RepoSummary;

/// JSON output structure for the repos command.
#[derive(Debug, JsonSchema, Serialize)]
pub struct ReposOutputJson {
    /// Repositories, most concerning first.
    pub repositories: Vec<RepoSummary>,
}
