//! Commit records parsed from the git log.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a file was touched by a commit.
///
/// Only the path participates in matching; the status is carried for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeStatus {
    Added,
    Modified,
    Deleted,
}

impl ChangeStatus {
    /// Map a `--name-status` code to a status.
    ///
    /// `A` and `D` are recognised; every other code (including `M`, renames,
    /// copies and type changes) is treated as a modification.
    pub fn from_code(code: &str) -> Self {
        match code.chars().next() {
            Some('A') => ChangeStatus::Added,
            Some('D') => ChangeStatus::Deleted,
            _ => ChangeStatus::Modified,
        }
    }
}

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeStatus::Added => write!(f, "A"),
            ChangeStatus::Modified => write!(f, "M"),
            ChangeStatus::Deleted => write!(f, "D"),
        }
    }
}

/// A single changed path within a commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChange {
    pub status: ChangeStatus,
    pub path: String,
}

/// One commit from the log, newest-first order is preserved by the reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commit {
    /// Full object id. Never truncated for matching.
    pub hash: String,
    pub author: String,
    /// Pre-formatted relative date such as "3 days ago". Treated as opaque.
    pub relative_date: String,
    /// First line of the commit message.
    pub subject: String,
    /// Remaining message text, possibly empty.
    pub body: String,
    pub changed_files: Vec<FileChange>,
}

impl Commit {
    /// Subject and body joined by a newline, trimmed.
    ///
    /// This is the text surface every message heuristic operates on.
    pub fn full_message(&self) -> String {
        format!("{}\n{}", self.subject, self.body).trim().to_string()
    }

    /// Abbreviated hash for display.
    pub fn short_hash(&self) -> &str {
        let end = self
            .hash
            .char_indices()
            .nth(7)
            .map(|(i, _)| i)
            .unwrap_or(self.hash.len());
        &self.hash[..end]
    }
}
