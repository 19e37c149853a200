// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` to reduce duplication
//! across commands that read a snapshot.

use clap::Args;

/// Snapshot input selection.
#[derive(Args, Clone, Debug, Default)]
pub struct InputArgs {
    /// Snapshot JSON file, or `-` for stdin (default: report.input from configuration)
    #[arg(long, short, value_name = "path")]
    pub input: Option<String>,
}

/// Item filters for listings.
#[derive(Args, Clone, Debug, Default)]
pub struct ItemFilterArgs {
    /// Filter by status (comma-separated or repeated, OR'd together)
    #[arg(long, short, value_delimiter = ',')]
    pub status: Vec<String>,

    /// Filter by task type (comma-separated or repeated, OR'd together)
    #[arg(long, short = 't', value_delimiter = ',')]
    pub r#type: Vec<String>,
}
