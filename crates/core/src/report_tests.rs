// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::TimeZone;

fn fixed_time() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(9 * 3600)
        .unwrap()
        .with_ymd_and_hms(2026, 2, 27, 9, 30, 0)
        .unwrap()
}

fn snapshot() -> Snapshot {
    Snapshot::from_json(
        r#"{
        "totalCount": 10,
        "items": [
            {"title": "Write docs", "status": "Done", "content": {"repository": "acme/api"}},
            {"title": "Stuck", "status": "Blocked", "content": {"repository": "acme/api", "body": "waiting", "url": "https://github.com/acme/api/issues/2"}},
            {"title": "Triage", "status": "Inbox", "content": {"repository": "acme/web"}},
            {"title": "Mystery", "content": null}
        ]
    }"#,
    )
    .unwrap()
}

#[test]
fn build_collects_every_stage() {
    let snap = snapshot();
    let report = Report::build(&snap, &Policy::default(), fixed_time());

    assert_eq!(report.reported_total, 10);
    assert_eq!(report.processed, 4);
    assert_eq!(report.counts.total(), 4);
    assert_eq!(report.violations.len(), 1);
    assert!(report.has_violations());

    let statuses: Vec<Status> = report.groups.iter().map(|g| g.status).collect();
    assert_eq!(
        statuses,
        vec![Status::Inbox, Status::Blocked, Status::Done, Status::Unknown]
    );
    assert!(report.group(Status::Doing).is_none());
    assert_eq!(report.group(Status::Blocked).unwrap().len(), 1);

    let repos: Vec<&str> = report
        .repositories
        .iter()
        .map(|r| r.repository.name())
        .collect();
    assert_eq!(repos, vec!["(unknown repo)", "acme/api", "acme/web"]);
}

#[test]
fn build_leaves_snapshot_untouched() {
    let snap = snapshot();
    let before = snap.clone();
    let _ = Report::build(&snap, &Policy::default(), fixed_time());
    assert_eq!(snap, before);
}

#[test]
fn empty_snapshot_builds_empty_report() {
    let snap = Snapshot::new(Vec::new());
    let report = Report::build(&snap, &Policy::default(), fixed_time());
    assert_eq!(report.processed, 0);
    assert_eq!(report.reported_total, 0);
    assert!(report.groups.is_empty());
    assert!(report.repositories.is_empty());
    assert!(!report.has_violations());
}

#[test]
fn rebuilding_is_deterministic() {
    let snap = snapshot();
    let a = Report::build(&snap, &Policy::default(), fixed_time());
    let b = Report::build(&snap, &Policy::default(), fixed_time());
    assert_eq!(a, b);
}
