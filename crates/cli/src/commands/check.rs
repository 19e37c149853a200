// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `workboard check`: counts and rule violations on the terminal.

use std::io::{self, Write};

use wb_core::Report;

use super::{current_time, load_snapshot, Input};
use crate::cli::OutputFormat;
use crate::colors;
use crate::config::Config;
use crate::display::{format_counts, format_totals, format_violation};
use crate::error::{Error, Result};
use crate::schema::check::CheckOutputJson;

pub fn run(
    config: &Config,
    input: Option<&str>,
    strict: bool,
    format: OutputFormat,
) -> Result<()> {
    let snapshot = load_snapshot(&Input::resolve(input, config))?;
    let report = Report::build(&snapshot, &config.policy.to_policy(), current_time(config)?);
    run_impl(&report, strict, format, &mut io::stdout().lock())
}

/// Print `report`; in strict mode, fail when it has violations.
pub(crate) fn run_impl(
    report: &Report<'_>,
    strict: bool,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(report, out)?,
        OutputFormat::Json => {
            let output = CheckOutputJson {
                reported_total: report.reported_total,
                processed: report.processed,
                counts: report.counts,
                violations: report.violations.iter().map(Into::into).collect(),
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
    }

    if strict && report.has_violations() {
        return Err(Error::ViolationsFound {
            count: report.violations.len(),
        });
    }
    Ok(())
}

fn write_text(report: &Report<'_>, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", format_totals(report.reported_total, report.processed))?;
    writeln!(out, "{}", format_counts(&report.counts))?;
    writeln!(out)?;
    if report.violations.is_empty() {
        writeln!(out, "{} none", colors::header("Rule violations:"))?;
        return Ok(());
    }
    writeln!(out, "{}", colors::header("Rule violations:"))?;
    for violation in &report.violations {
        writeln!(out, "{}", format_violation(violation))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
