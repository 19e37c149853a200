// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report configuration.
//!
//! Configuration is optional and stored as TOML. It is looked up in order:
//! - the `--config` flag
//! - the `WORKBOARD_CONFIG` environment variable
//! - `./workboard.toml`
//! - `<config dir>/workboard/config.toml` (e.g. `~/.config` on Linux)
//!
//! A file named by the flag or the environment must exist; the other
//! locations are skipped when absent and defaults apply.

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use wb_core::{Policy, DEFAULT_P1_LIMIT, DEFAULT_WIP_LIMIT};

use crate::env;
use crate::error::{Error, Result};

const CONFIG_FILE_NAME: &str = "workboard.toml";
const USER_CONFIG_DIR: &str = "workboard";
const USER_CONFIG_FILE: &str = "config.toml";

/// Largest accepted UTC offset, in minutes.
const MAX_OFFSET_MINUTES: i32 = 18 * 60;

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub policy: PolicyConfig,
    pub report: ReportConfig,
}

/// Thresholds for the workflow rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyConfig {
    /// Maximum number of items in Doing.
    pub wip_limit: usize,
    /// Maximum number of items mentioning P1.
    pub p1_limit: usize,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        PolicyConfig {
            wip_limit: DEFAULT_WIP_LIMIT,
            p1_limit: DEFAULT_P1_LIMIT,
        }
    }
}

/// Presentation and file locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Document title.
    pub title: String,
    /// Offset from UTC used for the generated timestamp.
    pub utc_offset_minutes: i32,
    /// Label printed after the generated timestamp.
    pub zone_label: String,
    /// Default snapshot path.
    pub input: String,
    /// Default HTML output path.
    pub output: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            title: "Workboard".to_string(),
            utc_offset_minutes: 9 * 60,
            zone_label: "JST".to_string(),
            input: "data/project_items.json".to_string(),
            output: "docs/index.html".to_string(),
        }
    }
}

impl PolicyConfig {
    pub fn to_policy(&self) -> Policy {
        Policy {
            wip_limit: self.wip_limit,
            p1_limit: self.p1_limit,
        }
    }
}

impl ReportConfig {
    /// The configured UTC offset.
    pub fn offset(&self) -> Result<FixedOffset> {
        if self.utc_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(Error::Config(format!(
                "utc_offset_minutes out of range: {} (max ±{})",
                self.utc_offset_minutes, MAX_OFFSET_MINUTES
            )));
        }
        FixedOffset::east_opt(self.utc_offset_minutes * 60).ok_or_else(|| {
            Error::Config(format!(
                "invalid utc_offset_minutes: {}",
                self.utc_offset_minutes
            ))
        })
    }
}

impl Config {
    /// Parses and validates configuration text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        config.report.offset()?;
        Ok(config)
    }

    /// Loads configuration from the given file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read config {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }

    /// Finds and loads configuration, falling back to defaults.
    ///
    /// Returns the path the configuration was read from, if any.
    pub fn resolve(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        let cwd = std::env::current_dir()?;
        let user_dir = dirs::config_dir().map(|d| d.join(USER_CONFIG_DIR));
        match locate(explicit, env::config_path(), &cwd, user_dir.as_deref())? {
            Some(path) => Ok((Self::load(&path)?, Some(path))),
            None => Ok((Config::default(), None)),
        }
    }
}

/// Pick the configuration file to read.
pub(crate) fn locate(
    explicit: Option<&Path>,
    from_env: Option<PathBuf>,
    cwd: &Path,
    user_dir: Option<&Path>,
) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit.map(Path::to_path_buf).or(from_env) {
        if !path.is_file() {
            return Err(Error::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        return Ok(Some(path));
    }

    let local = cwd.join(CONFIG_FILE_NAME);
    if local.is_file() {
        return Ok(Some(local));
    }

    Ok(user_dir
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.is_file()))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
