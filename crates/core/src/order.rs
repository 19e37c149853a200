// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Deterministic ordering and status grouping of work items.

use serde::Serialize;

use crate::item::WorkItem;
use crate::status::Status;

/// Items sharing one status, already in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusGroup<'a> {
    pub status: Status,
    pub items: Vec<&'a WorkItem>,
}

impl StatusGroup<'_> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Return `items` ordered by status rank, then title.
///
/// The sort is stable: items that tie on both keys keep their snapshot
/// order. Absent titles sort as the empty string.
pub fn sort_items(items: &[WorkItem]) -> Vec<&WorkItem> {
    let mut sorted: Vec<&WorkItem> = items.iter().collect();
    sort_refs(&mut sorted);
    sorted
}

/// Stable in-place sort of item references by status rank, then title.
pub fn sort_refs(items: &mut [&WorkItem]) {
    items.sort_by(|a, b| {
        a.status()
            .rank()
            .cmp(&b.status().rank())
            .then_with(|| a.title().cmp(b.title()))
    });
}

/// Partition sorted items into status groups in display order.
///
/// Statuses with no items produce no group.
pub fn group_by_status<'a>(sorted: &[&'a WorkItem]) -> Vec<StatusGroup<'a>> {
    Status::ALL
        .iter()
        .map(|&status| StatusGroup {
            status,
            items: sorted
                .iter()
                .copied()
                .filter(|it| it.status() == status)
                .collect(),
        })
        .filter(|group| !group.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "order_tests.rs"]
mod tests;
