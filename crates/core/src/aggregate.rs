// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Status counts, globally and per repository.
//!
//! Both aggregations are folds over the item set that produce a fresh
//! value per call; nothing accumulates between runs.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeMap;

use crate::item::{RepoKey, WorkItem};
use crate::status::Status;

/// Item count for each of the six status buckets.
///
/// The shape is fixed: every bucket is always present, zero or not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(deny_unknown_fields)]
pub struct StatusCounts {
    #[serde(rename = "Inbox")]
    pub inbox: usize,
    #[serde(rename = "Ready")]
    pub ready: usize,
    #[serde(rename = "Doing")]
    pub doing: usize,
    #[serde(rename = "Blocked")]
    pub blocked: usize,
    #[serde(rename = "Done")]
    pub done: usize,
    #[serde(rename = "Unknown")]
    pub unknown: usize,
}

impl StatusCounts {
    /// Count of items in `status`.
    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::Inbox => self.inbox,
            Status::Ready => self.ready,
            Status::Doing => self.doing,
            Status::Blocked => self.blocked,
            Status::Done => self.done,
            Status::Unknown => self.unknown,
        }
    }

    /// Returns a copy with one more item in `status`.
    #[must_use]
    pub fn with(mut self, status: Status) -> Self {
        let slot = match status {
            Status::Inbox => &mut self.inbox,
            Status::Ready => &mut self.ready,
            Status::Doing => &mut self.doing,
            Status::Blocked => &mut self.blocked,
            Status::Done => &mut self.done,
            Status::Unknown => &mut self.unknown,
        };
        *slot += 1;
        self
    }

    /// Sum over all six buckets.
    pub fn total(&self) -> usize {
        Status::ALL.iter().map(|&s| self.get(s)).sum()
    }

    /// `(status, count)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Status, usize)> + '_ {
        Status::ALL.iter().map(move |&s| (s, self.get(s)))
    }

    /// Share of `status` in the total, in `0.0..=1.0`. Zero when empty.
    pub fn ratio(&self, status: Status) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.get(status) as f64 / total as f64,
        }
    }
}

impl<'a> FromIterator<&'a WorkItem> for StatusCounts {
    fn from_iter<I: IntoIterator<Item = &'a WorkItem>>(iter: I) -> Self {
        iter.into_iter()
            .fold(StatusCounts::default(), |acc, it| acc.with(it.status()))
    }
}

/// Count every item by normalized status.
pub fn count_statuses(items: &[WorkItem]) -> StatusCounts {
    items.iter().collect()
}

/// Status counts for one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct RepoSummary {
    /// `owner/name`, or `(unknown repo)`.
    #[cfg_attr(feature = "schemars", schemars(with = "String"))]
    pub repository: RepoKey,
    pub counts: StatusCounts,
    /// Always equal to `counts.total()`.
    pub total: usize,
}

impl RepoSummary {
    fn new(repository: RepoKey, counts: StatusCounts) -> Self {
        RepoSummary {
            repository,
            total: counts.total(),
            counts,
        }
    }
}

/// Summarize items per repository, most concerning repositories first.
///
/// Ordered by `Unknown`, `Blocked`, `Doing` and total count (all
/// descending), then repository name ascending.
pub fn summarize_repositories(items: &[WorkItem]) -> Vec<RepoSummary> {
    let by_repo = items.iter().fold(
        BTreeMap::<RepoKey, StatusCounts>::new(),
        |mut acc, it| {
            let counts = acc.entry(it.repo_key()).or_default();
            *counts = counts.with(it.status());
            acc
        },
    );

    let mut summaries: Vec<RepoSummary> = by_repo
        .into_iter()
        .map(|(repo, counts)| RepoSummary::new(repo, counts))
        .collect();
    sort_summaries(&mut summaries);
    summaries
}

/// Order summaries by operational concern. Used again after any merge of
/// separately computed summaries.
pub fn sort_summaries(summaries: &mut [RepoSummary]) {
    summaries.sort_by(|a, b| {
        concern_key(a)
            .cmp(&concern_key(b))
            .then_with(|| a.repository.name().cmp(b.repository.name()))
    });
}

type ConcernKey = (Reverse<usize>, Reverse<usize>, Reverse<usize>, Reverse<usize>);

fn concern_key(s: &RepoSummary) -> ConcernKey {
    (
        Reverse(s.counts.unknown),
        Reverse(s.counts.blocked),
        Reverse(s.counts.doing),
        Reverse(s.total),
    )
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
