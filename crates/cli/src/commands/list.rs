// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `workboard list`: items grouped by status.

use std::io::{self, Write};

use wb_core::{group_by_status, sort_items, Snapshot, Status, TaskType, WorkItem};

use super::{load_snapshot, Input};
use crate::cli::{ItemFilterArgs, OutputFormat};
use crate::config::Config;
use crate::display::{format_group_header, format_item_line};
use crate::error::Result;
use crate::schema::list::{GroupJson, ListOutputJson};

pub fn run(
    config: &Config,
    input: Option<&str>,
    filter: &ItemFilterArgs,
    format: OutputFormat,
) -> Result<()> {
    let filter = ItemFilter::parse(filter)?;
    let snapshot = load_snapshot(&Input::resolve(input, config))?;
    run_impl(&snapshot, &filter, format, &mut io::stdout().lock())
}

/// Parsed `--status` and `--type` selectors.
///
/// Values within one selector are OR'd; the two selectors are AND'd. An
/// empty selector matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ItemFilter {
    pub statuses: Vec<Status>,
    pub types: Vec<TaskType>,
}

impl ItemFilter {
    pub fn parse(args: &ItemFilterArgs) -> Result<Self> {
        Ok(ItemFilter {
            statuses: parse_values(&args.status)?,
            types: parse_values(&args.r#type)?,
        })
    }

    pub fn matches(&self, item: &WorkItem) -> bool {
        (self.statuses.is_empty() || self.statuses.contains(&item.status()))
            && (self.types.is_empty() || self.types.contains(&item.task_type()))
    }

    /// Descriptions of the active selectors, or `None` when unfiltered.
    pub fn describe(&self) -> Option<Vec<String>> {
        let mut applied = Vec::new();
        if !self.statuses.is_empty() {
            applied.push(format!("status: {}", join(&self.statuses)));
        }
        if !self.types.is_empty() {
            applied.push(format!("type: {}", join(&self.types)));
        }
        (!applied.is_empty()).then_some(applied)
    }
}

fn parse_values<T>(values: &[String]) -> Result<Vec<T>>
where
    T: std::str::FromStr<Err = wb_core::Error>,
{
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(|v| v.parse::<T>().map_err(Into::into))
        .collect()
}

fn join<T: std::fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

pub(crate) fn run_impl(
    snapshot: &Snapshot,
    filter: &ItemFilter,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let mut sorted = sort_items(&snapshot.items);
    sorted.retain(|item| filter.matches(item));
    let groups = group_by_status(&sorted);

    match format {
        OutputFormat::Text => {
            if groups.is_empty() {
                writeln!(out, "No items")?;
                return Ok(());
            }
            for (i, group) in groups.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                writeln!(out, "{}", format_group_header(group.status, group.len()))?;
                for item in &group.items {
                    writeln!(out, "  {}", format_item_line(item))?;
                }
            }
        }
        OutputFormat::Json => {
            let output = ListOutputJson {
                groups: groups
                    .iter()
                    .map(|g| GroupJson {
                        status: g.status,
                        count: g.len(),
                        items: g.items.iter().map(|it| (*it).into()).collect(),
                    })
                    .collect(),
                filters_applied: filter.describe(),
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
