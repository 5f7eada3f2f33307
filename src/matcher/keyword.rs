//! Keyword overlap between a task's text and a commit message.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Commit, MatchType, Task, TaskMatch};

/// Minimum ratio of matched keywords; the comparison is strict.
pub const MIN_KEYWORD_RATIO: f64 = 0.3;

/// Minimum number of distinct matched keywords.
pub const MIN_KEYWORD_HITS: usize = 2;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-z]{3,}\b").expect("valid keyword regex"));

const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "is", "are",
    "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did", "will",
    "would", "should", "could", "may", "might", "must", "can", "this", "that", "these", "those",
];

/// Distinct keywords of `text`, in first-seen order.
///
/// The text is lower-cased, split into runs of three or more ASCII letters
/// bounded by word boundaries, and stripped of stop words.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut seen = HashSet::new();

    WORD.find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|w| !STOP_WORDS.contains(w))
        .filter(|w| seen.insert(*w))
        .map(str::to_string)
        .collect()
}

/// Keywords describing a task: its title plus all acceptance criteria.
pub fn task_keywords(task: &Task) -> Vec<String> {
    extract_keywords(&format!("{} {}", task.title, task.acceptance_criteria.join(" ")))
}

/// Keywords that occur as substrings of the lower-cased `message`.
pub fn matched_keywords<'a>(keywords: &'a [String], message: &str) -> Vec<&'a str> {
    let lower = message.to_lowercase();
    keywords
        .iter()
        .map(String::as_str)
        .filter(|k| lower.contains(k))
        .collect()
}

/// One `Keyword` match per task whose keywords overlap the commit message enough.
pub fn find_keyword_matches(commit: &Commit, tasks: &[Task]) -> Vec<TaskMatch> {
    let message = commit.full_message();
    let mut matches = Vec::new();

    for task in tasks {
        let keywords = task_keywords(task);
        if keywords.is_empty() {
            continue;
        }

        let hits = matched_keywords(&keywords, &message);
        let confidence = hits.len() as f64 / keywords.len() as f64;

        if confidence > MIN_KEYWORD_RATIO && hits.len() >= MIN_KEYWORD_HITS {
            matches.push(TaskMatch {
                task_id: task.id.clone(),
                commit_hash: commit.hash.clone(),
                commit_message: commit.subject.clone(),
                author: commit.author.clone(),
                date: commit.relative_date.clone(),
                match_type: MatchType::Keyword,
                confidence,
                reason: format!("Matched keywords: {}", hits.join(", ")),
                matched_keywords: Some(hits.iter().map(|k| k.to_string()).collect()),
                matched_files: None,
            });
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn commit(subject: &str) -> Commit {
        Commit {
            hash: "feed000000000000000000000000000000000000".into(),
            author: "Ada".into(),
            relative_date: "now".into(),
            subject: subject.into(),
            body: String::new(),
            changed_files: Vec::new(),
        }
    }

    #[test]
    fn extract_drops_stop_words_short_words_and_duplicates() {
        let keywords = extract_keywords("The user should be able to Reset the password, reset it");
        assert_eq!(keywords, vec!["user", "able", "reset", "password"]);
    }

    #[test]
    fn extract_ignores_digits_and_mixed_tokens() {
        assert_eq!(extract_keywords("add 3d physics v2engine"), vec!["add", "physics"]);
    }

    #[test]
    fn task_keywords_include_criteria() {
        let task = Task::new(
            "HK-1",
            "Password reset",
            vec!["Email link".into(), "Token expires".into()],
        );
        assert_eq!(
            task_keywords(&task),
            vec!["password", "reset", "email", "link", "token", "expires"]
        );
    }

    #[test]
    fn two_of_six_keywords_match() {
        let task = Task::new(
            "HK-1",
            "Password reset",
            vec!["Email link".into(), "Token expires".into()],
        );
        let matches = find_keyword_matches(&commit("Implement password reset"), &[task]);
        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert_eq!(m.match_type, MatchType::Keyword);
        assert!((m.confidence - 2.0 / 6.0).abs() < 1e-9);
        assert_eq!(m.reason, "Matched keywords: password, reset");
        assert_eq!(
            m.matched_keywords,
            Some(vec!["password".to_string(), "reset".to_string()])
        );
    }

    #[test]
    fn single_hit_never_matches_even_with_high_ratio() {
        // One keyword out of two is a 0.5 ratio but only one hit.
        let task = Task::new("HK-2", "Leaderboard scores", vec![]);
        assert!(find_keyword_matches(&commit("Leaderboard tweaks"), &[task]).is_empty());
    }

    #[test]
    fn ratio_at_threshold_does_not_match() {
        // 3 of 10 keywords is exactly 0.3, which is not strictly greater.
        let task = Task::new(
            "HK-3",
            "alpha bravo charlie delta echo foxtrot golf hotel india juliet",
            vec![],
        );
        assert!(find_keyword_matches(&commit("alpha bravo charlie"), &[task]).is_empty());
    }

    #[test]
    fn keywords_match_as_substrings() {
        let task = Task::new("HK-4", "Render cats", vec![]);
        let matches = find_keyword_matches(&commit("Rendering bobcats"), &[task]);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].confidence, 1.0);
    }

    #[test]
    fn task_without_keywords_is_skipped() {
        let task = Task::new("HK-5", "Do it", vec![]);
        assert!(find_keyword_matches(&commit("do it now"), &[task]).is_empty());
    }
}
