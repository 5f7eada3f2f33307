//! File-path analysis: does a commit touch files associated with a task's area?
//!
//! A task's title is mapped to zero or more categories through substring
//! triggers; each category contributes path substrings that mark a changed
//! file as relevant. File co-location is weaker evidence than a message
//! match, so confidence is capped at [`MAX_FILE_CONFIDENCE`].

use crate::models::{Commit, MatchType, Task, TaskMatch};

/// Upper bound on `FileAnalysis` confidence.
pub const MAX_FILE_CONFIDENCE: f64 = 0.8;

/// Number of relevant files that would reach full confidence before the cap.
const FILES_FOR_FULL_CONFIDENCE: f64 = 3.0;

/// Files named in the reason string.
const REASON_FILE_LIMIT: usize = 3;

/// Files carried in `matched_files`.
const MATCHED_FILE_LIMIT: usize = 5;

/// A title category and the path fragments that indicate work on it.
#[derive(Debug)]
pub struct FileCategory {
    pub name: &'static str,
    /// Lower-case substrings of a task title that select this category.
    pub triggers: &'static [&'static str],
    /// Lower-case substrings of a changed path that count as relevant.
    pub patterns: &'static [&'static str],
}

/// Categories are evaluated in order; every matching one contributes patterns.
pub static CATEGORIES: &[FileCategory] = &[
    FileCategory {
        name: "auth",
        triggers: &["auth", "login", "signup"],
        patterns: &["auth", "login", "signup", "session", "user"],
    },
    FileCategory {
        name: "database",
        triggers: &["database", "schema", "prisma"],
        patterns: &["schema", "prisma", "database", "migration", ".sql"],
    },
    FileCategory {
        name: "api",
        triggers: &["api", "endpoint", "route"],
        patterns: &["/api/", "route", "endpoint", "trpc", "router"],
    },
    FileCategory {
        name: "ui",
        triggers: &["component", "ui", "page"],
        patterns: &["component", "/app/", "/page", ".tsx", ".jsx"],
    },
    FileCategory {
        name: "styling",
        triggers: &["style", "css", "tailwind"],
        patterns: &["tailwind", ".css", "style", "theme"],
    },
    FileCategory {
        name: "testing",
        triggers: &["test"],
        patterns: &[".test.", ".spec.", "__test__"],
    },
    FileCategory {
        name: "config",
        triggers: &["config", "setup"],
        patterns: &["config", ".config.", "package.json", ".env"],
    },
    FileCategory {
        name: "game",
        triggers: &["cat", "game", "3d"],
        patterns: &["cats/", "play/", "game", "three", "rapier", "physics"],
    },
    FileCategory {
        name: "performance",
        triggers: &["performance", "optim"],
        patterns: &["fps", "performance", "optimization", "cache"],
    },
];

/// Categories selected by a task title.
pub fn categories_for(title: &str) -> Vec<&'static FileCategory> {
    let lower = title.to_lowercase();
    CATEGORIES
        .iter()
        .filter(|c| c.triggers.iter().any(|t| lower.contains(t)))
        .collect()
}

/// Union of path patterns for a task title, in table order.
pub fn patterns_for(title: &str) -> Vec<&'static str> {
    categories_for(title)
        .into_iter()
        .flat_map(|c| c.patterns.iter().copied())
        .collect()
}

/// One `FileAnalysis` match per task whose category patterns hit changed files.
pub fn find_file_matches(commit: &Commit, tasks: &[Task]) -> Vec<TaskMatch> {
    let mut matches = Vec::new();

    for task in tasks {
        let patterns = patterns_for(&task.title);
        if patterns.is_empty() {
            continue;
        }

        let relevant: Vec<&str> = commit
            .changed_files
            .iter()
            .map(|change| change.path.as_str())
            .filter(|path| {
                let lower = path.to_lowercase();
                patterns.iter().any(|p| lower.contains(p))
            })
            .collect();

        if relevant.is_empty() {
            continue;
        }

        let confidence = (relevant.len() as f64 / FILES_FOR_FULL_CONFIDENCE).min(MAX_FILE_CONFIDENCE);
        let named: Vec<&str> = relevant.iter().take(REASON_FILE_LIMIT).copied().collect();

        matches.push(TaskMatch {
            task_id: task.id.clone(),
            commit_hash: commit.hash.clone(),
            commit_message: commit.subject.clone(),
            author: commit.author.clone(),
            date: commit.relative_date.clone(),
            match_type: MatchType::FileAnalysis,
            confidence,
            reason: format!("Modified relevant files: {}", named.join(", ")),
            matched_keywords: None,
            matched_files: Some(
                relevant
                    .iter()
                    .take(MATCHED_FILE_LIMIT)
                    .map(|p| p.to_string())
                    .collect(),
            ),
        });
    }

    matches
}
