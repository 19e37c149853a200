// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Snapshot loading.
//!
//! A snapshot is one JSON document `{ "totalCount": n, "items": [...] }`.
//! Structural problems are fatal; item-level anomalies are not.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::Read;

use crate::error::{Error, Result};
use crate::item::WorkItem;

/// An immutable set of work items captured from the tracker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Item count reported upstream. May exceed `items.len()` when the
    /// upstream query was paginated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
    /// Items in upstream order.
    pub items: Vec<WorkItem>,
}

impl Snapshot {
    pub fn new(items: Vec<WorkItem>) -> Self {
        Snapshot {
            total_count: None,
            items,
        }
    }

    /// Parse a snapshot from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| Error::MalformedSnapshot(format!("invalid JSON: {}", e)))?;
        Self::from_value(value)
    }

    /// Parse a snapshot from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let value: Value = serde_json::from_reader(reader)
            .map_err(|e| Error::MalformedSnapshot(format!("invalid JSON: {}", e)))?;
        Self::from_value(value)
    }

    /// Validate the top-level shape and decode each item.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut top) = value else {
            return Err(Error::MalformedSnapshot(
                "top-level value must be an object".to_string(),
            ));
        };
        let items = match top.remove("items") {
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(Error::MalformedSnapshot(
                    "'items' must be an array".to_string(),
                ))
            }
            None => return Err(Error::MalformedSnapshot("missing 'items'".to_string())),
        };

        let items = items
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                if !raw.is_object() {
                    return Err(Error::MalformedItem {
                        index,
                        reason: "expected an object".to_string(),
                    });
                }
                serde_json::from_value::<WorkItem>(raw).map_err(|e| Error::MalformedItem {
                    index,
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let total_count = top.get("totalCount").and_then(Value::as_u64);
        Ok(Snapshot { total_count, items })
    }

    /// Number of items actually present.
    pub fn processed(&self) -> usize {
        self.items.len()
    }

    /// Total reported upstream, defaulting to the processed count.
    pub fn reported_total(&self) -> u64 {
        self.total_count.unwrap_or(self.items.len() as u64)
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
