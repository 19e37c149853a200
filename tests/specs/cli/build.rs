// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `workboard build`: the generated dashboard document.

#![allow(clippy::unwrap_used)]

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// =============================================================================
// Helpers
// =============================================================================

fn workboard(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("workboard");
    cmd.current_dir(temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join(".config"))
        .env("HOME", temp.path())
        .env_remove("WORKBOARD_CONFIG")
        .env_remove("WORKBOARD_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn build(temp: &TempDir, json: &str) -> String {
    fs::create_dir_all(temp.path().join("data")).unwrap();
    fs::write(temp.path().join("data/project_items.json"), json).unwrap();
    workboard(temp).arg("build").assert().success();
    fs::read_to_string(temp.path().join("docs/index.html")).unwrap()
}

fn embedded_counts(html: &str) -> serde_json::Value {
    let open = r#"<script type="application/json" id="status-counts">"#;
    let start = html.find(open).unwrap() + open.len();
    let len = html[start..].find("</script>").unwrap();
    serde_json::from_str(&html[start..start + len]).unwrap()
}

const BOARD: &str = r#"{
  "totalCount": 9,
  "items": [
    {"title": "[Decide] Pick storage", "status": "Inbox", "content": {"repository": "acme/api"}},
    {"title": "[Implement] B task", "status": "Doing", "content": {"repository": "acme/api", "number": 2}},
    {"title": "[Implement] A task", "status": "Doing", "content": {"repository": "acme/api", "number": 1}},
    {"title": "Third thing", "status": "Doing", "content": {"repository": "acme/web"}},
    {"title": "Stuck P1 item", "status": "Blocked",
     "content": {"repository": "acme/web", "body": "no plan yet", "url": "https://github.com/acme/web/issues/9"}},
    {"title": "Unblocked soon", "status": "Blocked",
     "content": {"repository": "acme/web", "body": "context\n  ⏭ Next: call vendor"}},
    {"title": "P1 hotfix", "status": "Done", "content": {"repository": "acme/web"}},
    {"title": "Wandering", "status": "doing", "content": {}}
  ]
}"#;

// =============================================================================
// Document
// =============================================================================

#[test]
fn default_paths_and_summary_line() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("data")).unwrap();
    fs::write(temp.path().join("data/project_items.json"), BOARD).unwrap();
    workboard(&temp)
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Wrote docs/index.html (8 items, 3 violations)",
        ));
    assert!(temp.path().join("docs/index.html").is_file());
}

#[test]
fn header_shows_reported_and_processed_totals() {
    let temp = TempDir::new().unwrap();
    let html = build(&temp, BOARD);
    assert!(html.contains("Total (reported): <b>9</b>"));
    assert!(html.contains("Items (processed): <b>8</b>"));
    assert!(html.contains(" JST</b>"));
}

#[test]
fn embedded_counts_cover_all_statuses() {
    let temp = TempDir::new().unwrap();
    let html = build(&temp, BOARD);
    let counts = embedded_counts(&html);
    assert_eq!(
        counts,
        serde_json::json!({
            "Inbox": 1, "Ready": 0, "Doing": 3, "Blocked": 2, "Done": 1, "Unknown": 1
        })
    );
}

#[test]
fn status_values_are_case_sensitive() {
    let temp = TempDir::new().unwrap();
    let html = build(&temp, BOARD);
    // "doing" is not "Doing": the item lands in Unknown.
    let unknown = html.find(r#"<summary><span class="pill st-unknown">"#).unwrap();
    let wandering = html.find("Wandering").unwrap();
    assert!(wandering > unknown);
}

#[test]
fn violations_in_rule_order() {
    let temp = TempDir::new().unwrap();
    let html = build(&temp, BOARD);
    let wip = html
        .find("WIP limit exceeded: 3 items in Doing (limit 2)")
        .unwrap();
    let blocked = html
        .find("Stuck P1 item (https://github.com/acme/web/issues/9)")
        .unwrap();
    let p1 = html
        .find("P1 limit exceeded (estimated): 2 items mention P1 (limit 1)")
        .unwrap();
    assert!(wip < blocked && blocked < p1);
    // The item with a next step is not flagged.
    assert!(!html.contains("Unblocked soon ("));
}

#[test]
fn items_sorted_within_groups() {
    let temp = TempDir::new().unwrap();
    let html = build(&temp, BOARD);
    let a = html.find(">A task<").unwrap();
    let b = html.find(">B task<").unwrap();
    let third = html.find(">Third thing<").unwrap();
    // Raw titles compare bytewise: "Third" sorts before "[Implement]".
    assert!(third < a && a < b);
}

#[test]
fn done_and_unknown_groups_start_collapsed() {
    let temp = TempDir::new().unwrap();
    let html = build(&temp, BOARD);
    assert!(html.contains(r#"<details class="group" open><summary><span class="pill st-inbox">"#));
    assert!(html.contains(r#"<details class="group"><summary><span class="pill st-done">"#));
    assert!(html.contains(r#"<details class="group"><summary><span class="pill st-unknown">"#));
    assert!(!html.contains(r#"<span class="pill st-ready">Ready</span><span class="count">"#));
}

#[test]
fn hostile_text_never_becomes_markup() {
    let temp = TempDir::new().unwrap();
    let html = build(
        &temp,
        r#"{"items": [{
            "title": "\"><script>alert('t')</script>",
            "status": "Blocked",
            "content": {
                "body": "<iframe src=//evil>",
                "url": "javascript:alert('u')",
                "repository": "evil/<b>"
            }
        }]}"#,
    );
    assert!(!html.contains("<script>alert"));
    assert!(!html.contains("<iframe"));
    assert!(!html.contains("<b>evil"));
    assert!(!html.contains(r#"href="javascript"#));
}

#[test]
fn empty_snapshot_renders() {
    let temp = TempDir::new().unwrap();
    let html = build(&temp, r#"{"items": []}"#);
    assert!(html.contains("Items (processed): <b>0</b>"));
    assert!(html.contains("Total (reported): <b>0</b>"));
    assert_eq!(
        embedded_counts(&html),
        serde_json::json!({
            "Inbox": 0, "Ready": 0, "Doing": 0, "Blocked": 0, "Done": 0, "Unknown": 0
        })
    );
}

// =============================================================================
// Output handling
// =============================================================================

#[test]
fn explicit_output_path() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("items.json"), BOARD).unwrap();
    workboard(&temp)
        .args(["build", "-i", "items.json", "-o", "public/board.html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote public/board.html"));
    assert!(temp.path().join("public/board.html").is_file());
}

#[test]
fn rebuild_is_identical_apart_from_timestamp() {
    let temp = TempDir::new().unwrap();
    let strip = |html: String| -> String {
        let open = "Generated: <b>";
        let start = html.find(open).unwrap() + open.len();
        let end = start + html[start..].find("</b>").unwrap();
        format!("{}{}", &html[..start], &html[end..])
    };
    let first = strip(build(&temp, BOARD));
    let second = strip(build(&temp, BOARD));
    similar_asserts::assert_eq!(first, second);
}

#[test]
fn failed_build_keeps_previous_document() {
    let temp = TempDir::new().unwrap();
    let before = build(&temp, BOARD);
    fs::write(temp.path().join("data/project_items.json"), "{not json").unwrap();
    workboard(&temp).arg("build").assert().failure();
    let after = fs::read_to_string(temp.path().join("docs/index.html")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn empty_output_path_is_rejected() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("items.json"), BOARD).unwrap();
    fs::write(temp.path().join("workboard.toml"), "[report]\noutput = \"\"\n").unwrap();
    workboard(&temp)
        .args(["build", "-i", "items.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("output path cannot be empty"));
}
