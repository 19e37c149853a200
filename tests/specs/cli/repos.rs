// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `workboard repos`: per-repository summaries.

#![allow(clippy::unwrap_used)]

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use tempfile::TempDir;

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

fn repos_json(json: &str) -> Vec<serde_json::Value> {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("items.json"), json).unwrap();
    let output = workboard(&temp)
        .args(["repos", "-i", "items.json", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    value["repositories"].as_array().unwrap().clone()
}

fn names(repos: &[serde_json::Value]) -> Vec<&str> {
    repos
        .iter()
        .map(|r| r["repository"].as_str().unwrap())
        .collect()
}

#[test]
fn ordered_by_unknown_blocked_doing_total_then_name() {
    let repos = repos_json(
        r#"{"items": [
            {"status": "Done", "content": {"repository": "z/big"}},
            {"status": "Done", "content": {"repository": "z/big"}},
            {"status": "Done", "content": {"repository": "z/big"}},
            {"status": "Doing", "content": {"repository": "m/doing"}},
            {"status": "Blocked", "content": {"repository": "b/blocked"}},
            {"status": "Mystery", "content": {"repository": "u/unknown"}},
            {"status": "Done", "content": {"repository": "a/small"}},
            {"status": "Done", "content": {"repository": "b/small"}}
        ]}"#,
    );
    assert_eq!(
        names(&repos),
        ["u/unknown", "b/blocked", "m/doing", "z/big", "a/small", "b/small"]
    );
}

#[test]
fn repository_sources_and_normalization() {
    let repos = repos_json(
        r#"{"items": [
            {"status": "Done", "content": {"repository": "https://github.com/acme/api/pulls"}},
            {"status": "Done", "repository": "acme/api"},
            {"status": "Done", "content": {"repository": "  "}, "repository": "acme/api"},
            {"status": "Done", "content": {"repository": "acme/web"}, "repository": "acme/api"},
            {"status": "Done", "content": {"repository": "just-a-name"}},
            {"status": "Done"}
        ]}"#,
    );
    assert_eq!(names(&repos), ["acme/api", "(unknown repo)", "acme/web"]);
    assert_eq!(repos[0]["total"], 3);
    assert_eq!(repos[1]["total"], 2);
    assert_eq!(repos[2]["total"], 1);
}

#[test]
fn totals_match_counts() {
    let repos = repos_json(
        r#"{"items": [
            {"status": "Inbox", "content": {"repository": "acme/api"}},
            {"status": "Ready", "content": {"repository": "acme/api"}},
            {"status": "Bogus", "content": {"repository": "acme/api"}}
        ]}"#,
    );
    let counts = repos[0]["counts"].as_object().unwrap();
    let sum: u64 = counts.values().map(|v| v.as_u64().unwrap()).sum();
    assert_eq!(repos[0]["total"], sum);
    assert_eq!(counts.len(), 6);
}

#[test]
fn text_table_lists_every_repository() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("items.json"),
        r#"{"items": [
            {"status": "Doing", "content": {"repository": "acme/api"}},
            {"status": "Done"}
        ]}"#,
    )
    .unwrap();
    let output = workboard(&temp)
        .args(["repos", "-i", "items.json"])
        .output()
        .unwrap();
    let text = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].starts_with("REPOSITORY"));
    assert!(lines[1].starts_with("acme/api"));
    assert!(lines[2].starts_with("(unknown repo)"));
}
