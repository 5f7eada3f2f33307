//! Commit log reader: git CLI wrapper and log parsing.
//!
//! The matcher only depends on [`CommitSource`], so tests and embedders can
//! feed commits from memory while the binary reads them from `git log`.

pub mod command;
pub mod parser;

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use crate::constants::DEFAULT_MAX_COMMITS;
use crate::models::Commit;

/// Errors from the commit log reader.
#[derive(Error, Debug)]
pub enum LogError {
    /// Repository missing, git not runnable, or the command failed.
    #[error("commit source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("git output is not valid UTF-8: {0}")]
    InvalidUtf8(String),
}

/// Anything that can list commits newer than a watermark.
#[async_trait]
pub trait CommitSource: Send + Sync {
    /// Return commits strictly after `since` (or the most recent window when
    /// `since` is `None`), newest first.
    async fn commits_since(&self, since: Option<&str>) -> Result<Vec<Commit>, LogError>;
}

/// Reads commits by shelling out to `git log` in a repository.
#[derive(Debug, Clone)]
pub struct GitLogSource {
    repo_path: PathBuf,
    max_commits: usize,
}

impl GitLogSource {
    pub fn new(repo_path: impl Into<PathBuf>) -> Self {
        Self {
            repo_path: repo_path.into(),
            max_commits: DEFAULT_MAX_COMMITS,
        }
    }

    /// Override the lookback window. Zero is clamped to one.
    pub fn with_max_commits(mut self, max_commits: usize) -> Self {
        self.max_commits = max_commits.max(1);
        self
    }

    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }
}

#[async_trait]
impl CommitSource for GitLogSource {
    async fn commits_since(&self, since: Option<&str>) -> Result<Vec<Commit>, LogError> {
        if !self.repo_path.is_dir() {
            return Err(LogError::SourceUnavailable(format!(
                "repository path not found: {}",
                self.repo_path.display()
            )));
        }

        // A watermark rewritten away by a rebase falls back to the recent window.
        let mut range = since;
        if let Some(rev) = since {
            if !command::commit_exists(&self.repo_path, rev).await {
                tracing::warn!(
                    "watermark {rev} no longer exists in {}; rescanning the latest {} commits",
                    self.repo_path.display(),
                    self.max_commits
                );
                range = None;
            }
        }

        let raw = command::git_log(&self.repo_path, range, self.max_commits).await?;
        let parsed = parser::parse_log(&raw);
        if parsed.skipped > 0 {
            tracing::debug!("skipped {} unrecognised log line(s)", parsed.skipped);
        }

        let mut commits = parsed.commits;
        commits.truncate(self.max_commits);
        Ok(commits)
    }
}

/// Read commits newer than `since` from the repository at `repo_path`.
///
/// Never fails: an unavailable source is logged and yields an empty list so
/// the caller can simply retry on its next poll.
pub async fn get_new_commits(repo_path: &Path, since: Option<&str>) -> Vec<Commit> {
    match GitLogSource::new(repo_path).commits_since(since).await {
        Ok(commits) => commits,
        Err(e) => {
            tracing::warn!("{e}");
            Vec::new()
        }
    }
}
