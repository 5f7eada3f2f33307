//! Explicit task-id references in commit messages.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Commit, MatchType, Task, TaskMatch};

/// Two or more letters, a hyphen, digits; whole word, any case.
static TASK_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b([A-Z]{2,}-\d+)\b").expect("valid task-id regex"));

/// Upper-cased task-id tokens referenced in `text`, in order of appearance.
///
/// Tokens embedded in longer identifiers (`XHK-4`, `HK-4X`, `HK-4_1`) do not
/// count because the word boundary fails there.
pub fn referenced_ids(text: &str) -> Vec<String> {
    TASK_ID
        .captures_iter(text)
        .map(|caps| caps[1].to_uppercase())
        .collect()
}

/// One `Explicit` match per referenced id that names a known task.
pub fn find_explicit_matches(commit: &Commit, tasks: &[Task]) -> Vec<TaskMatch> {
    let message = commit.full_message();

    referenced_ids(&message)
        .into_iter()
        .filter_map(|id| tasks.iter().find(|t| t.id == id))
        .map(|task| TaskMatch {
            task_id: task.id.clone(),
            commit_hash: commit.hash.clone(),
            commit_message: commit.subject.clone(),
            author: commit.author.clone(),
            date: commit.relative_date.clone(),
            match_type: MatchType::Explicit,
            confidence: 1.0,
            reason: format!("Commit explicitly references {}", task.id),
            matched_keywords: None,
            matched_files: None,
        })
        .collect()
}
