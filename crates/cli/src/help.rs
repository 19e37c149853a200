// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_report}
  {build}       Render the HTML dashboard
  {check}       Show status counts and rule violations
  {list}        List items grouped by status
  {repos}       Summarize items per repository

{header_setup}
  {schema}      Output JSON Schema for inputs and outputs
  {completion}  Generate shell completions",
        header_report = colors::header("Reports:"),
        header_setup = colors::header("Setup:"),
        build = colors::literal("build"),
        check = colors::literal("check"),
        list = colors::literal("list"),
        repos = colors::literal("repos"),
        schema = colors::literal("schema"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  workboard build                     Render docs/index.html from data/project_items.json
  workboard check --strict            Fail when a workflow rule is broken
  workboard repos -i snapshot.json    Show the most concerning repositories first",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
