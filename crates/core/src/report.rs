// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The data a renderer consumes.
//!
//! [`Report`] bundles every derived structure for one snapshot. Renderers
//! work from this record only, never from the raw snapshot.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::aggregate::{count_statuses, summarize_repositories, RepoSummary, StatusCounts};
use crate::order::{group_by_status, sort_items, StatusGroup};
use crate::rules::{detect_violations, Policy, Violation};
use crate::snapshot::Snapshot;
use crate::status::Status;

/// Everything derived from one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report<'a> {
    /// Total reported upstream.
    pub reported_total: u64,
    /// Items actually processed.
    pub processed: usize,
    pub generated_at: DateTime<FixedOffset>,
    pub counts: StatusCounts,
    /// Findings in detection order.
    pub violations: Vec<Violation>,
    /// Non-empty status groups in display order.
    pub groups: Vec<StatusGroup<'a>>,
    /// Repositories, most concerning first.
    pub repositories: Vec<RepoSummary>,
}

impl<'a> Report<'a> {
    /// Run every stage over `snapshot`.
    pub fn build(
        snapshot: &'a Snapshot,
        policy: &Policy,
        generated_at: DateTime<FixedOffset>,
    ) -> Self {
        let items = &snapshot.items;
        let sorted = sort_items(items);
        Report {
            reported_total: snapshot.reported_total(),
            processed: items.len(),
            generated_at,
            counts: count_statuses(items),
            violations: detect_violations(items, policy),
            groups: group_by_status(&sorted),
            repositories: summarize_repositories(items),
        }
    }

    /// Group for `status`, if it has any items.
    pub fn group(&self, status: Status) -> Option<&StatusGroup<'a>> {
        self.groups.iter().find(|g| g.status == status)
    }

    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
