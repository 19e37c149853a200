// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod build;
pub mod check;
pub mod list;
pub mod repos;
pub mod schema;

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset, Utc};
use tracing::{debug, info};
use wb_core::{count_statuses, Snapshot};

use crate::config::Config;
use crate::error::{Error, Result};

/// Where a snapshot is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// The `--input` value if given, otherwise `report.input`. `-` is stdin.
    pub fn resolve(flag: Option<&str>, config: &Config) -> Input {
        match flag.unwrap_or(&config.report.input) {
            "-" => Input::Stdin,
            path => Input::File(PathBuf::from(path)),
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Stdin => write!(f, "<stdin>"),
            Input::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolve configuration from the flag, environment or default locations.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let (config, source) = Config::resolve(explicit)?;
    match source {
        Some(path) => debug!(path = %path.display(), "loaded configuration"),
        None => debug!("no configuration file, using defaults"),
    }
    Ok(config)
}

/// Read and decode a snapshot.
pub fn load_snapshot(input: &Input) -> Result<Snapshot> {
    let snapshot = match input {
        Input::Stdin => Snapshot::from_reader(io::stdin().lock())?,
        Input::File(path) => {
            let file = File::open(path).map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => Error::InputNotFound(path.display().to_string()),
                _ => Error::Io(e),
            })?;
            Snapshot::from_reader(BufReader::new(file))?
        }
    };

    let counts = count_statuses(&snapshot.items);
    info!(
        source = %input,
        items = snapshot.processed(),
        reported = snapshot.reported_total(),
        "loaded snapshot"
    );
    if counts.unknown > 0 {
        debug!(count = counts.unknown, "items without a recognized status");
    }
    Ok(snapshot)
}

/// Current time in the configured report offset.
pub fn current_time(config: &Config) -> Result<DateTime<FixedOffset>> {
    let offset = config.report.offset()?;
    Ok(Utc::now().with_timezone(&offset))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
