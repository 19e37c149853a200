// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs JSON Schema for the snapshot input and for every command that
//! supports JSON output.

use schemars::schema::RootSchema;
use schemars::schema_for;

use crate::cli::SchemaCommand;
use crate::error::Result;
use crate::schema::{check, list, repos};

/// Run the schema command.
pub fn run(cmd: SchemaCommand) -> Result<()> {
    let json = serde_json::to_string_pretty(&schema(cmd))?;
    println!("{}", json);
    Ok(())
}

pub(crate) fn schema(cmd: SchemaCommand) -> RootSchema {
    match cmd {
        SchemaCommand::Snapshot => schema_for!(wb_core::Snapshot),
        SchemaCommand::Check => schema_for!(check::CheckOutputJson),
        SchemaCommand::List => schema_for!(list::ListOutputJson),
        SchemaCommand::Repos => schema_for!(repos::ReposOutputJson),
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
