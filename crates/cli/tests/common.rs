// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// A snapshot with one item per interesting case.
pub const SAMPLE: &str = r#"{
  "totalCount": 7,
  "items": [
    {"title": "[Implement] Add cache", "status": "Doing",
     "content": {"number": 12, "repository": "acme/api", "url": "https://github.com/acme/api/issues/12"}},
    {"title": "[Verify] Check rollout", "status": "Doing",
     "content": {"number": 13, "repository": "acme/api"}},
    {"title": "[Investigate] Flaky CI", "status": "Doing",
     "content": {"repository": "acme/web"}},
    {"title": "Vendor reply", "status": "Blocked",
     "content": {"repository": "acme/web", "body": "waiting on legal", "url": "https://github.com/acme/web/issues/4"}},
    {"title": "Ship v1", "status": "Done", "content": {"repository": "acme/web"}},
    {"title": "Someday idea", "status": "Later"}
  ]
}"#;

/// The `workboard` binary with a clean environment.
///
/// User configuration and color settings of the machine running the tests
/// are masked.
pub fn workboard(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("workboard");
    cmd.current_dir(temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join(".config"))
        .env("HOME", temp.path())
        .env_remove("WORKBOARD_CONFIG")
        .env_remove("WORKBOARD_LOG")
        .env_remove("COLOR")
        .env("NO_COLOR", "1");
    cmd
}

/// Write `json` to `items.json` in `temp`.
pub fn write_snapshot(temp: &TempDir, json: &str) -> PathBuf {
    let path = temp.path().join("items.json");
    fs::write(&path, json).unwrap();
    path
}

/// Write `toml` to `name` in `temp`.
pub fn write_config(temp: &TempDir, name: &str, toml: &str) -> PathBuf {
    let path = temp.path().join(name);
    fs::write(&path, toml).unwrap();
    path
}
