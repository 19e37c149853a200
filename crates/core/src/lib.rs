// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! wb-core: Status aggregation and policy engine for workboard.
//!
//! This crate turns one immutable snapshot of work items into the derived
//! structures a report is rendered from: normalized statuses, policy
//! violations, a deterministic ordering, status groups and per-repository
//! summaries. It performs no I/O beyond parsing.

pub mod aggregate;
pub mod error;
pub mod item;
pub mod order;
pub mod report;
pub mod rules;
pub mod snapshot;
pub mod status;

pub use aggregate::{count_statuses, summarize_repositories, RepoSummary, StatusCounts};
pub use error::{Error, Result};
pub use item::{Content, RepoKey, TaskType, WorkItem, UNKNOWN_REPO};
pub use order::{group_by_status, sort_items, StatusGroup};
pub use report::Report;
pub use rules::{detect_violations, Policy, Violation, DEFAULT_P1_LIMIT, DEFAULT_WIP_LIMIT};
pub use snapshot::Snapshot;
pub use status::Status;
