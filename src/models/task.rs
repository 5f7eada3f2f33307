//! Tracked work items supplied by the caller.

use serde::{Deserialize, Deserializer, Serialize};

/// A tracked task, conventionally identified as `LETTERS-DIGITS` (e.g. `HK-004`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Canonical upper-case identifier.
    #[serde(deserialize_with = "upper_case")]
    pub id: String,
    pub title: String,
    #[serde(default, alias = "acceptance_criteria")]
    pub acceptance_criteria: Vec<String>,
}

impl Task {
    /// Build a task, canonicalising the id to upper case.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        acceptance_criteria: Vec<String>,
    ) -> Self {
        Self {
            id: id.into().trim().to_uppercase(),
            title: title.into(),
            acceptance_criteria,
        }
    }
}

fn upper_case<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(s.trim().to_uppercase())
}
