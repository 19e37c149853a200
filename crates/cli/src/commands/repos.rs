// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `workboard repos`: per-repository status counts.

use std::io::{self, Write};

use wb_core::{summarize_repositories, Snapshot};

use super::{load_snapshot, Input};
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display::format_repo_table;
use crate::error::Result;
use crate::schema::repos::ReposOutputJson;

pub fn run(config: &Config, input: Option<&str>, format: OutputFormat) -> Result<()> {
    let snapshot = load_snapshot(&Input::resolve(input, config))?;
    run_impl(&snapshot, format, &mut io::stdout().lock())
}

pub(crate) fn run_impl(
    snapshot: &Snapshot,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let repositories = summarize_repositories(&snapshot.items);
    match format {
        OutputFormat::Text if repositories.is_empty() => writeln!(out, "No items")?,
        OutputFormat::Text => {
            for line in format_repo_table(&repositories) {
                writeln!(out, "{}", line)?;
            }
        }
        OutputFormat::Json => {
            let output = ReposOutputJson { repositories };
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "repos_tests.rs"]
mod tests;
