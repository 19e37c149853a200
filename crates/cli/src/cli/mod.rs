// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

pub use args::{InputArgs, ItemFilterArgs};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "workboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Status dashboard and workflow policy checks for tracked work items")]
#[command(
    long_about = "Status dashboard and workflow policy checks for tracked work items.\n\n\
    Reads one JSON snapshot of work items and reports status counts, rule violations \
    and per-repository summaries as a static HTML page or on the terminal."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Read configuration from <path> instead of the default locations
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Reports
    // ─────────────────────────────────────────────────────────────────────────
    /// Render the HTML dashboard
    #[command(after_help = colors::examples("\
Examples:
  workboard build                         Use paths from configuration
  workboard build -i items.json           Read a specific snapshot
  workboard build -o public/index.html    Write somewhere else
  gh project item-list 1 --format json | workboard build -i -"))]
    Build {
        #[command(flatten)]
        input: InputArgs,

        /// Output HTML file (default: report.output from configuration)
        #[arg(long, short, value_name = "path")]
        output: Option<PathBuf>,
    },

    /// Show status counts and rule violations
    #[command(after_help = colors::examples("\
Examples:
  workboard check                  Print counts and violations
  workboard check --strict         Exit non-zero when any rule is broken
  workboard check -f json          Machine-readable output"))]
    Check {
        #[command(flatten)]
        input: InputArgs,

        /// Exit with an error when any violation is found
        #[arg(long)]
        strict: bool,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List items grouped by status
    #[command(after_help = colors::examples("\
Examples:
  workboard list                        All items, grouped by status
  workboard list -s doing,blocked       Only active and blocked work
  workboard list -t implement -f json   Implementation tasks as JSON"))]
    List {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        filter: ItemFilterArgs,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Summarize items per repository
    Repos {
        #[command(flatten)]
        input: InputArgs,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Setup
    // ─────────────────────────────────────────────────────────────────────────
    /// Output JSON Schema for the snapshot and JSON outputs
    #[command(subcommand)]
    Schema(SchemaCommand),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Schema subcommands.
#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaCommand {
    /// Schema of the input snapshot
    Snapshot,
    /// Schema of `check -f json`
    Check,
    /// Schema of `list -f json`
    List,
    /// Schema of `repos -f json`
    Repos,
}
