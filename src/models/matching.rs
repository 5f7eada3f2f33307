//! Match types produced by the commit-to-task matcher.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which heuristic produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchType {
    /// The commit message names the task id.
    Explicit,
    /// The commit message shares enough keywords with the task.
    Keyword,
    /// The commit touches files associated with the task's category.
    FileAnalysis,
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchType::Explicit => write!(f, "explicit"),
            MatchType::Keyword => write!(f, "keyword"),
            MatchType::FileAnalysis => write!(f, "file-analysis"),
        }
    }
}

/// Evidence that a commit likely satisfies a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskMatch {
    pub task_id: String,
    pub commit_hash: String,
    /// The commit subject.
    pub commit_message: String,
    pub author: String,
    /// The commit's relative date.
    pub date: String,
    pub match_type: MatchType,
    /// Heuristic score in `[0.0, 1.0]`; not a calibrated probability.
    pub confidence: f64,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_files: Option<Vec<String>>,
}

impl TaskMatch {
    /// Confidence as a rounded percentage.
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence * 100.0).round() as u32
    }

    /// One-line summary: `"{task}: {subject} ({pct}% confidence)"`.
    pub fn summary_line(&self) -> String {
        format!(
            "{}: {} ({}% confidence)",
            self.task_id,
            self.commit_message,
            self.confidence_percent()
        )
    }
}

/// Outcome of one matcher invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// At most one match per task id.
    pub matches: Vec<TaskMatch>,
    /// Newest commit hash seen, or the caller's watermark when nothing was read.
    pub last_commit: Option<String>,
}

/// Per-type counts for a match list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub explicit: usize,
    pub keyword: usize,
    pub file_analysis: usize,
}

impl Summary {
    /// Compute summary from a list of matches.
    pub fn from_matches(matches: &[TaskMatch]) -> Self {
        let mut s = Summary::default();
        for m in matches {
            s.total += 1;
            match m.match_type {
                MatchType::Explicit => s.explicit += 1,
                MatchType::Keyword => s.keyword += 1,
                MatchType::FileAnalysis => s.file_analysis += 1,
            }
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(confidence: f64, match_type: MatchType) -> TaskMatch {
        TaskMatch {
            task_id: "HK-004".into(),
            commit_hash: "abc".into(),
            commit_message: "Add login form".into(),
            author: "Dev".into(),
            date: "1 hour ago".into(),
            match_type,
            confidence,
            reason: "r".into(),
            matched_keywords: None,
            matched_files: None,
        }
    }

    #[test]
    fn summary_line_rounds_confidence() {
        let m = sample(1.0 / 3.0, MatchType::FileAnalysis);
        assert_eq!(m.summary_line(), "HK-004: Add login form (33% confidence)");
        let m = sample(0.666, MatchType::Keyword);
        assert_eq!(m.summary_line(), "HK-004: Add login form (67% confidence)");
    }

    #[test]
    fn match_type_serializes_kebab_case() {
        let json = serde_json::to_string(&MatchType::FileAnalysis).unwrap();
        assert_eq!(json, "\"file-analysis\"");
        assert_eq!(MatchType::FileAnalysis.to_string(), "file-analysis");
    }

    #[test]
    fn match_serializes_camel_case_and_skips_empty_extras() {
        let value = serde_json::to_value(sample(1.0, MatchType::Explicit)).unwrap();
        assert_eq!(value["taskId"], "HK-004");
        assert_eq!(value["matchType"], "explicit");
        assert!(value.get("matchedFiles").is_none());
    }

    #[test]
    fn summary_counts_types() {
        let matches = vec![
            sample(1.0, MatchType::Explicit),
            sample(0.5, MatchType::Keyword),
            sample(0.4, MatchType::FileAnalysis),
            sample(0.7, MatchType::FileAnalysis),
        ];
        let s = Summary::from_matches(&matches);
        assert_eq!(s.total, 4);
        assert_eq!(s.explicit, 1);
        assert_eq!(s.keyword, 1);
        assert_eq!(s.file_analysis, 2);
    }
}
