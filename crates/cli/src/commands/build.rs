// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `workboard build`: render the dashboard to a file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset};
use tempfile::NamedTempFile;
use tracing::{info, warn};
use wb_core::{Report, Snapshot};

use super::{current_time, load_snapshot, Input};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::html::{render_report, RenderOptions};

/// What a build wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub path: PathBuf,
    pub items: usize,
    pub violations: usize,
}

pub fn run(config: &Config, input: Option<&str>, output: Option<&Path>) -> Result<()> {
    let output = output_path(output, config)?;
    let snapshot = load_snapshot(&Input::resolve(input, config))?;
    let summary = run_impl(&snapshot, config, &output, current_time(config)?)?;
    println!(
        "Wrote {} ({} items, {} violations)",
        summary.path.display(),
        summary.items,
        summary.violations
    );
    Ok(())
}

/// Render `snapshot` as of `now` and write it to `output`.
pub(crate) fn run_impl(
    snapshot: &Snapshot,
    config: &Config,
    output: &Path,
    now: DateTime<FixedOffset>,
) -> Result<BuildSummary> {
    let report = Report::build(snapshot, &config.policy.to_policy(), now);
    let html = render_report(&report, &RenderOptions::from(&config.report))?;
    write_atomic(output, html.as_bytes())?;

    for violation in &report.violations {
        warn!("{}", violation);
    }
    info!(path = %output.display(), bytes = html.len(), "wrote dashboard");

    Ok(BuildSummary {
        path: output.to_path_buf(),
        items: report.processed,
        violations: report.violations.len(),
    })
}

/// The `--output` value if given, otherwise `report.output`.
pub(crate) fn output_path(flag: Option<&Path>, config: &Config) -> Result<PathBuf> {
    let path = match flag {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(&config.report.output),
    };
    if path.as_os_str().is_empty() {
        return Err(Error::OutputPathEmpty);
    }
    Ok(path)
}

/// Replace `path` with `contents` in one step, creating parent directories.
///
/// Readers never observe a partially written file.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.flush()?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))?;
    }
    tmp.persist(path).map_err(|e| Error::Io(e.error))?;
    Ok(())
}

#[cfg(test)]
#[path = "build_tests.rs"]
mod tests;
