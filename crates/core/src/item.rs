// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Work items as they appear in a snapshot.
//!
//! Items are never mutated after load. Everything derived from them
//! (normalized status, task type, repository key) is computed on demand.

use regex::Regex;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::status::Status;

/// Name shown for items without a valid `owner/name` repository.
pub const UNKNOWN_REPO: &str = "(unknown repo)";

static TASK_TYPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"(?i)^\[(investigate|decide|implement|verify)\]\s*") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
});

/// One tracked task from the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct WorkItem {
    /// Tracker-assigned item identifier.
    #[serde(
        default,
        deserialize_with = "de::lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Free text, possibly starting with a `[Type]` tag.
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub title: Option<String>,
    /// Raw status value. Non-string values are read as absent.
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub status: Option<String>,
    /// Item-level repository, used when `content.repository` is missing.
    #[serde(
        default,
        deserialize_with = "de::lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub repository: Option<String>,
    /// Metadata of the underlying tracker entry. Anything but an object
    /// reads as empty content.
    #[serde(default, deserialize_with = "de::lenient_content")]
    pub content: Content,
}

/// Tracker-entry metadata attached to a work item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Content {
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub url: Option<String>,
    /// Issue or pull request number. Non-numeric values are read as absent.
    #[serde(default, deserialize_with = "de::lenient_number")]
    pub number: Option<u64>,
    /// `owner/name` of the repository holding the entry.
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub repository: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub body: Option<String>,
    /// Entry kind reported by the tracker (`Issue`, `PullRequest`, `DraftIssue`).
    #[serde(default, rename = "type", deserialize_with = "de::lenient_string")]
    pub kind: Option<String>,
}

impl WorkItem {
    /// Normalized workflow status.
    pub fn status(&self) -> Status {
        Status::normalize(self.status.as_deref())
    }

    /// Title, or the empty string when absent.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Body text, or the empty string when absent.
    pub fn body(&self) -> &str {
        self.content.body.as_deref().unwrap_or("")
    }

    /// URL, or the empty string when absent.
    pub fn url(&self) -> &str {
        self.content.url.as_deref().unwrap_or("")
    }

    /// Task type encoded in the title prefix.
    pub fn task_type(&self) -> TaskType {
        TaskType::infer(self.title())
    }

    /// Trimmed title with a recognized `[Type]` tag removed.
    pub fn display_title(&self) -> &str {
        let trimmed = self.title().trim();
        match TASK_TYPE_RE.find(trimmed) {
            Some(m) => &trimmed[m.end()..],
            None => trimmed,
        }
    }

    /// Repository this item is grouped under.
    ///
    /// `content.repository` wins over the item-level field; blank values
    /// fall through to the next source.
    pub fn repo_key(&self) -> RepoKey {
        let raw = [self.content.repository.as_deref(), self.repository.as_deref()]
            .into_iter()
            .flatten()
            .find(|r| !r.trim().is_empty());
        match raw {
            Some(raw) => RepoKey::from_raw(raw),
            None => RepoKey::Unknown,
        }
    }
}

/// Kind of task inferred from the title prefix tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum TaskType {
    Investigate,
    Decide,
    Implement,
    Verify,
    /// No recognized `[Type]` prefix.
    Unknown,
}

impl TaskType {
    /// Infer the task type from a title such as `"[implement] Add cache"`.
    ///
    /// The tag is matched case-insensitively after trimming the title.
    pub fn infer(title: &str) -> TaskType {
        let Some(caps) = TASK_TYPE_RE.captures(title.trim()) else {
            return TaskType::Unknown;
        };
        match caps.get(1).map(|m| m.as_str().to_lowercase()).as_deref() {
            Some("investigate") => TaskType::Investigate,
            Some("decide") => TaskType::Decide,
            Some("implement") => TaskType::Implement,
            Some("verify") => TaskType::Verify,
            _ => TaskType::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Investigate => "Investigate",
            TaskType::Decide => "Decide",
            TaskType::Implement => "Implement",
            TaskType::Verify => "Verify",
            TaskType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TaskType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "investigate" => Ok(TaskType::Investigate),
            "decide" => Ok(TaskType::Decide),
            "implement" => Ok(TaskType::Implement),
            "verify" => Ok(TaskType::Verify),
            "unknown" => Ok(TaskType::Unknown),
            _ => Err(Error::InvalidTaskType(s.to_string())),
        }
    }
}

/// Grouping key for per-repository summaries.
///
/// Orthogonal to [`Status::Unknown`]: an item can have a known status in
/// an unknown repository and vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RepoKey {
    /// A valid `owner/name`.
    Named(String),
    /// Missing or malformed repository.
    Unknown,
}

impl RepoKey {
    /// Parse a raw repository value.
    ///
    /// Accepts `owner/name`, or a URL like `https://github.com/owner/name`
    /// which is reduced to its first two path segments.
    pub fn from_raw(raw: &str) -> RepoKey {
        let trimmed = raw.trim();
        let candidate = match trimmed.split_once("://") {
            Some((_, rest)) => {
                let mut segments = rest.split('/').skip(1);
                match (segments.next(), segments.next()) {
                    (Some(owner), Some(name)) => format!("{owner}/{name}"),
                    _ => return RepoKey::Unknown,
                }
            }
            None => trimmed.to_string(),
        };
        if is_owner_name(&candidate) {
            RepoKey::Named(candidate)
        } else {
            RepoKey::Unknown
        }
    }

    /// Display name; the sentinel for [`RepoKey::Unknown`].
    pub fn name(&self) -> &str {
        match self {
            RepoKey::Named(name) => name,
            RepoKey::Unknown => UNKNOWN_REPO,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, RepoKey::Unknown)
    }
}

fn is_owner_name(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    match s.split_once('/') {
        Some((owner, name)) => !owner.is_empty() && !name.is_empty() && !name.contains('/'),
        None => false,
    }
}

impl fmt::Display for RepoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for RepoKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Tolerant field decoders. A wrong type in one of these fields is an
/// item-level anomaly, not a malformed snapshot.
mod de {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn lenient_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::String(s) => Some(s),
            _ => None,
        })
    }

    pub fn lenient_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u64>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
    }

    pub fn lenient_content<'de, D: Deserializer<'de>>(d: D) -> Result<super::Content, D::Error> {
        Ok(match Value::deserialize(d)? {
            value @ Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => super::Content::default(),
        })
    }
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod tests;
