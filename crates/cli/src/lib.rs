// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! wbrs - status dashboard and workflow policy checks for tracked work items.
//!
//! This crate provides the command-line surface of the `workboard` tool.
//! All derivation (normalization, ordering, aggregation, rule checks) lives
//! in [`wb_core`]; this crate adds configuration, input handling, terminal
//! and JSON output, and the HTML dashboard.
//!
//! # Main Components
//!
//! - [`Config`] - Optional TOML configuration (policy thresholds, report paths)
//! - [`html`] - Escaping HTML builder and the dashboard renderer
//! - [`Error`] - Error types for all operations
//!
//! ```rust,ignore
//! use clap::Parser;
//! use wbrs::Cli;
//!
//! let cli = Cli::parse_from(["workboard", "check", "--strict"]);
//! wbrs::run(cli)?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod env;
pub mod help;
pub mod html;
pub mod logging;
mod schema;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, InputArgs, ItemFilterArgs, OutputFormat, SchemaCommand};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Run a parsed command line.
///
/// Configuration is only resolved for commands that read a snapshot, so
/// `schema` and `completion` work even when the configuration is broken.
pub fn run(cli: Cli) -> Result<()> {
    let config = || commands::load_config(cli.config.as_deref());
    match cli.command {
        Command::Build { input, output } => {
            commands::build::run(&config()?, input.input.as_deref(), output.as_deref())
        }
        Command::Check {
            input,
            strict,
            format,
        } => commands::check::run(&config()?, input.input.as_deref(), strict, format),
        Command::List {
            input,
            filter,
            format,
        } => commands::list::run(&config()?, input.input.as_deref(), &filter, format),
        Command::Repos { input, format } => {
            commands::repos::run(&config()?, input.input.as_deref(), format)
        }
        Command::Schema(cmd) => commands::schema::run(cmd),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "workboard", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
