// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `workboard check`: workflow rules on the terminal.

#![allow(clippy::unwrap_used)]

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use yare::parameterized;

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

fn with_snapshot(json: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("items.json"), json).unwrap();
    temp
}

fn blocked(body: &str) -> String {
    serde_json::json!({
        "items": [{
            "title": "Stuck",
            "status": "Blocked",
            "content": {"body": body, "url": "https://github.com/acme/api/issues/5"}
        }]
    })
    .to_string()
}

// =============================================================================
// Next-step marker
// =============================================================================

#[parameterized(
    plain = { "⏭ Next: ask security" },
    variation_selector = { "⏭\u{FE0F} Next: ask security" },
    indented = { "notes\n    ⏭ Next: ask security" },
    no_space = { "⏭Next: ask security" },
)]
fn next_step_satisfies_rule(body: &str) {
    let temp = with_snapshot(&blocked(body));
    workboard(&temp)
        .args(["check", "--strict", "-i", "items.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rule violations: none"));
}

#[parameterized(
    empty = { "" },
    mid_line = { "see ⏭ Next: later" },
    lowercase = { "⏭ next: ask security" },
    words_only = { "Next: ask security" },
)]
fn missing_next_step_is_flagged(body: &str) {
    let temp = with_snapshot(&blocked(body));
    workboard(&temp)
        .args(["check", "-i", "items.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Blocked item has no \"⏭ Next:\" line: Stuck (https://github.com/acme/api/issues/5)",
        ));
}

// =============================================================================
// Counting rules
// =============================================================================

#[test]
fn wip_limit_is_strictly_greater_than() {
    let at_limit = r#"{"items": [
        {"title": "a", "status": "Doing"}, {"title": "b", "status": "Doing"}
    ]}"#;
    let temp = with_snapshot(at_limit);
    workboard(&temp)
        .args(["check", "--strict", "-i", "items.json"])
        .assert()
        .success();

    let over = r#"{"items": [
        {"title": "a", "status": "Doing"}, {"title": "b", "status": "Doing"},
        {"title": "c", "status": "Doing"}
    ]}"#;
    let temp = with_snapshot(over);
    workboard(&temp)
        .args(["check", "-i", "items.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "WIP limit exceeded: 3 items in Doing (limit 2)",
        ));
}

#[test]
fn p1_counts_title_or_body_whole_word() {
    let json = r#"{"items": [
        {"title": "P1: outage", "status": "Inbox"},
        {"title": "quiet", "status": "Done", "content": {"body": "priority p1"}},
        {"title": "AP1 module", "status": "Ready"},
        {"title": "P10 ticket", "status": "Ready"}
    ]}"#;
    let temp = with_snapshot(json);
    workboard(&temp)
        .args(["check", "-i", "items.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "P1 limit exceeded (estimated): 2 items mention P1 (limit 1)",
        ));
}

// =============================================================================
// Strict mode and JSON
// =============================================================================

#[test]
fn strict_mode_fails_and_still_prints() {
    let temp = with_snapshot(&blocked("no plan"));
    workboard(&temp)
        .args(["check", "--strict", "-i", "items.json"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Blocked item has no"))
        .stderr(predicate::str::contains("error: 1 rule violation(s) found"));
}

#[test]
fn json_output_carries_rule_tags() {
    let temp = with_snapshot(&blocked("no plan"));
    let output = workboard(&temp)
        .args(["check", "-i", "items.json", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["processed"], 1);
    assert_eq!(json["violations"][0]["rule"], "blocked_without_next");
    assert_eq!(json["violations"][0]["title"], "Stuck");
    assert_eq!(
        json["violations"][0]["url"],
        "https://github.com/acme/api/issues/5"
    );
}

#[test]
fn thresholds_come_from_configuration() {
    let json = r#"{"items": [
        {"title": "P1 a", "status": "Doing"},
        {"title": "P1 b", "status": "Doing"},
        {"title": "P1 c", "status": "Doing"}
    ]}"#;
    let temp = with_snapshot(json);
    fs::write(
        temp.path().join("workboard.toml"),
        "[policy]\nwip_limit = 3\np1_limit = 3\n",
    )
    .unwrap();
    workboard(&temp)
        .args(["check", "--strict", "-i", "items.json"])
        .assert()
        .success();
}
