//! Commit-to-task matcher: heuristics, candidate merging, and deduplication.
//!
//! Three independent heuristics run for every commit x task pair:
//!
//! 1. **Explicit**: the message names the task id (confidence 1.0).
//! 2. **Keyword**: the message shares enough of the task's keywords.
//! 3. **FileAnalysis**: the commit touches paths tied to the task's area.
//!
//! Candidates are collapsed to one match per task by [`dedup::deduplicate`].
//! The matcher holds no watermark of its own; the caller passes the last
//! processed commit in and receives the newest one back.

pub mod criteria;
pub mod dedup;
pub mod explicit;
pub mod files;
pub mod keyword;

use std::sync::Arc;

use crate::git::CommitSource;
use crate::models::{AnalysisResult, Commit, Task, TaskMatch};

/// Run all heuristics over `commits` (newest first) and `tasks`, without dedup.
pub fn collect_candidates(commits: &[Commit], tasks: &[Task]) -> Vec<TaskMatch> {
    let mut candidates = Vec::new();
    for commit in commits {
        candidates.extend(explicit::find_explicit_matches(commit, tasks));
        candidates.extend(keyword::find_keyword_matches(commit, tasks));
        candidates.extend(files::find_file_matches(commit, tasks));
    }
    candidates
}

/// Best match per task for the given commits.
pub fn match_commits(commits: &[Commit], tasks: &[Task]) -> Vec<TaskMatch> {
    dedup::deduplicate(collect_candidates(commits, tasks))
}

/// Matches tasks against the commits a [`CommitSource`] reports.
pub struct TaskCommitMatcher {
    source: Arc<dyn CommitSource>,
}

impl TaskCommitMatcher {
    pub fn new(source: Arc<dyn CommitSource>) -> Self {
        Self { source }
    }

    /// Analyze commits newer than `last_known_commit` against `tasks`.
    ///
    /// Never fails. When the source is unavailable or has nothing new, the
    /// result carries no matches and echoes `last_known_commit` back. When any
    /// commits were read, `last_commit` is the newest hash even if nothing
    /// matched, so unmatched commits are not rescanned.
    pub async fn analyze_commits(
        &self,
        tasks: &[Task],
        last_known_commit: Option<&str>,
    ) -> AnalysisResult {
        let unchanged = || AnalysisResult {
            matches: Vec::new(),
            last_commit: last_known_commit.map(str::to_string),
        };

        let commits = match self.source.commits_since(last_known_commit).await {
            Ok(commits) => commits,
            Err(e) => {
                tracing::warn!("error reading commits: {e}");
                return unchanged();
            }
        };

        let Some(newest) = commits.first() else {
            return unchanged();
        };

        tracing::debug!(
            "analyzing {} commit(s) against {} task(s)",
            commits.len(),
            tasks.len()
        );

        AnalysisResult {
            matches: match_commits(&commits, tasks),
            last_commit: Some(newest.hash.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::LogError;
    use crate::models::{ChangeStatus, FileChange, MatchType};
    use async_trait::async_trait;

    struct Fixed(Vec<Commit>);

    #[async_trait]
    impl CommitSource for Fixed {
        async fn commits_since(&self, _since: Option<&str>) -> Result<Vec<Commit>, LogError> {
            Ok(self.0.clone())
        }
    }

    struct Broken;

    #[async_trait]
    impl CommitSource for Broken {
        async fn commits_since(&self, _since: Option<&str>) -> Result<Vec<Commit>, LogError> {
            Err(LogError::SourceUnavailable("boom".into()))
        }
    }

    fn commit(hash: &str, subject: &str, files: &[&str]) -> Commit {
        Commit {
            hash: hash.into(),
            author: "Ada".into(),
            relative_date: "now".into(),
            subject: subject.into(),
            body: String::new(),
            changed_files: files
                .iter()
                .map(|p| FileChange {
                    status: ChangeStatus::Added,
                    path: p.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn candidates_run_all_heuristics() {
        let task = Task::new("HK-1", "Login page", vec!["login form works".into()]);
        let commits = vec![commit("c1", "HK-1 login form", &["src/login/page.tsx"])];
        let types: Vec<_> = collect_candidates(&commits, &[task])
            .into_iter()
            .map(|m| m.match_type)
            .collect();
        assert_eq!(
            types,
            vec![MatchType::Explicit, MatchType::Keyword, MatchType::FileAnalysis]
        );
    }

    #[test]
    fn match_commits_keeps_one_per_task() {
        let task = Task::new("HK-1", "Login page", vec![]);
        let commits = vec![
            commit("c2", "HK-1 done", &[]),
            commit("c1", "login page skeleton", &["src/login.tsx"]),
        ];
        let matches = match_commits(&commits, &[task]);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].match_type, MatchType::Explicit);
        assert_eq!(matches[0].commit_hash, "c2");
    }

    #[tokio::test]
    async fn source_failure_keeps_watermark() {
        let matcher = TaskCommitMatcher::new(Arc::new(Broken));
        let result = matcher.analyze_commits(&[], Some("abc123")).await;
        assert!(result.matches.is_empty());
        assert_eq!(result.last_commit.as_deref(), Some("abc123"));
    }

    #[tokio::test]
    async fn newest_commit_becomes_watermark() {
        let matcher = TaskCommitMatcher::new(Arc::new(Fixed(vec![
            commit("new", "a", &[]),
            commit("old", "b", &[]),
        ])));
        let result = matcher.analyze_commits(&[], None).await;
        assert_eq!(result.last_commit.as_deref(), Some("new"));
    }
}
