// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.
//!
//! Stdout carries command output only. Log records go to stderr, filtered
//! by `WORKBOARD_LOG` (an `EnvFilter` directive such as `wbrs=debug`).

use tracing_subscriber::EnvFilter;

use crate::env;

/// Directive used when `WORKBOARD_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Build the filter: `WORKBOARD_LOG` when set and valid, otherwise the
/// default for the verbosity.
pub fn filter(verbose: bool) -> EnvFilter {
    env::log_filter()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
