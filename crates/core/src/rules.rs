// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Workflow policy rules.
//!
//! Three independent rules evaluated over the whole snapshot, always in
//! the same order:
//!
//! 1. WIP limit on `Doing` items.
//! 2. Every `Blocked` item records a `⏭ Next:` line in its body.
//! 3. Cap on items mentioning the `P1` priority token.
//!
//! The per-item checks are plain predicates over `(title, body, status)`
//! so they can be tested without building a snapshot.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::item::WorkItem;
use crate::status::Status;

/// Maximum number of `Doing` items before rule 1 fires.
pub const DEFAULT_WIP_LIMIT: usize = 2;

/// Maximum number of items mentioning `P1` before rule 3 fires.
pub const DEFAULT_P1_LIMIT: usize = 1;

// Leading whitespace, the next-track emoji (optionally with VS16), then "Next:".
static NEXT_STEP_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"(?m)^[ \t]*\u{23ED}\u{FE0F}?[ \t]*Next:") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

static P1_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"(?i)\bP1\b") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

/// Thresholds for the counting rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Policy {
    pub wip_limit: usize,
    pub p1_limit: usize,
}

impl Default for Policy {
    fn default() -> Self {
        Policy {
            wip_limit: DEFAULT_WIP_LIMIT,
            p1_limit: DEFAULT_P1_LIMIT,
        }
    }
}

/// A workflow rule that the snapshot does not satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Violation {
    /// More items in `Doing` than the WIP limit allows.
    WipExceeded { count: usize, limit: usize },
    /// A `Blocked` item without a next step. `url` is empty when unknown.
    BlockedWithoutNext { title: String, url: String },
    /// More items mention `P1` than the cap allows.
    PriorityCapExceeded { count: usize, limit: usize },
}

impl Violation {
    /// Human-readable description of the finding.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Title of the offending item, for item-level findings.
    pub fn title(&self) -> Option<&str> {
        match self {
            Violation::BlockedWithoutNext { title, .. } => Some(title),
            _ => None,
        }
    }

    /// URL of the offending item, for item-level findings.
    pub fn url(&self) -> Option<&str> {
        match self {
            Violation::BlockedWithoutNext { url, .. } => Some(url),
            _ => None,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::WipExceeded { count, limit } => write!(
                f,
                "WIP limit exceeded: {} items in Doing (limit {})",
                count, limit
            ),
            Violation::BlockedWithoutNext { title, url } => {
                write!(f, "Blocked item has no \"⏭ Next:\" line: {} ({})", title, url)
            }
            Violation::PriorityCapExceeded { count, limit } => write!(
                f,
                "P1 limit exceeded (estimated): {} items mention P1 (limit {})",
                count, limit
            ),
        }
    }
}

/// Returns true if some line of `body` starts with the `⏭ Next:` marker.
///
/// Leading whitespace on the line is ignored; the marker itself is
/// case-sensitive.
pub fn has_next_step(body: &str) -> bool {
    NEXT_STEP_RE.is_match(body)
}

/// Returns true if `title` or `body` contains `P1` as a standalone token.
pub fn mentions_p1(title: &str, body: &str) -> bool {
    P1_RE.is_match(&format!("{}\n{}", title, body))
}

/// Returns true if an item with this status and body breaks rule 2.
pub fn is_blocked_without_next(status: Status, body: &str) -> bool {
    status == Status::Blocked && !has_next_step(body)
}

/// Evaluate every rule over `items`, in snapshot order.
///
/// Findings are emitted in rule order; blocked-item findings follow the
/// order of `items`, not the display sort.
pub fn detect_violations(items: &[WorkItem], policy: &Policy) -> Vec<Violation> {
    let mut violations = Vec::new();

    let doing = items.iter().filter(|it| it.status() == Status::Doing).count();
    if doing > policy.wip_limit {
        violations.push(Violation::WipExceeded {
            count: doing,
            limit: policy.wip_limit,
        });
    }

    violations.extend(
        items
            .iter()
            .filter(|it| is_blocked_without_next(it.status(), it.body()))
            .map(|it| Violation::BlockedWithoutNext {
                title: it.title().to_string(),
                url: it.url().to_string(),
            }),
    );

    let p1 = items
        .iter()
        .filter(|it| mentions_p1(it.title(), it.body()))
        .count();
    if p1 > policy.p1_limit {
        violations.push(Violation::PriorityCapExceeded {
            count: p1,
            limit: policy.p1_limit,
        });
    }

    violations
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
