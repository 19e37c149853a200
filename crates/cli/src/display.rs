// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Plain-text rendering for terminal output.

use wb_core::{RepoSummary, Status, StatusCounts, TaskType, Violation, WorkItem};

use crate::colors;

/// Header for the repository table's name column.
const REPO_HEADER: &str = "REPOSITORY";

/// `Total (reported): 12 / Items (processed): 6`
pub fn format_totals(reported_total: u64, processed: usize) -> String {
    format!(
        "Total (reported): {} / Items (processed): {}",
        reported_total, processed
    )
}

/// One line with every status bucket, e.g. `Inbox 1  Ready 0  Doing 3 ...`.
pub fn format_counts(counts: &StatusCounts) -> String {
    counts
        .iter()
        .map(|(status, n)| format!("{} {}", colors::status(status, status.as_str()), n))
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn format_violation(violation: &Violation) -> String {
    format!("  - {}", violation)
}

/// Section header for a status group, e.g. `Doing (3)`.
pub fn format_group_header(status: Status, len: usize) -> String {
    format!("{} ({})", colors::status(status, status.as_str()), len)
}

/// One item line: `- [Implement] #12 Add cache (acme/api)`.
///
/// The type tag is omitted when the title carries none, and the number
/// when the item has none.
pub fn format_item_line(item: &WorkItem) -> String {
    let mut line = String::from("- ");
    let task_type = item.task_type();
    if task_type != TaskType::Unknown {
        line.push_str(&colors::context(&format!("[{}]", task_type)));
        line.push(' ');
    }
    if let Some(n) = item.content.number {
        line.push_str(&colors::literal(&format!("#{}", n)));
        line.push(' ');
    }
    line.push_str(item.display_title());
    line.push(' ');
    line.push_str(&colors::context(&format!("({})", item.repo_key())));
    line
}

/// Aligned repository table, header first.
pub fn format_repo_table(summaries: &[RepoSummary]) -> Vec<String> {
    let name_width = summaries
        .iter()
        .map(|s| s.repository.name().chars().count())
        .chain(std::iter::once(REPO_HEADER.len()))
        .max()
        .unwrap_or(REPO_HEADER.len());

    let mut header = format!("{:<name_width$}", REPO_HEADER);
    for status in Status::ALL {
        let label = status.as_str().to_uppercase();
        header.push_str(&format!("  {:>w$}", label, w = column_width(status)));
    }
    header.push_str("  TOTAL");

    let rows = summaries.iter().map(|s| {
        let name = s.repository.name();
        let pad = name_width.saturating_sub(name.chars().count());
        let mut row = format!("{}{}", name, " ".repeat(pad));
        for (status, n) in s.counts.iter() {
            row.push_str(&format!("  {:>w$}", n, w = column_width(status)));
        }
        row.push_str(&format!("  {:>5}", s.total));
        row
    });

    std::iter::once(colors::header(&header)).chain(rows).collect()
}

fn column_width(status: Status) -> usize {
    status.as_str().len()
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
