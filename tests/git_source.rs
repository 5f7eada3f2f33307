//! End-to-end tests against real scratch repositories.
//!
//! These drive the git-backed commit source through the matcher the way the
//! `scan` and `watch` commands do, threading the watermark between runs.

use std::path::Path;
use std::sync::Arc;

use taskscout::git::{CommitSource, GitLogSource, LogError};
use taskscout::matcher::TaskCommitMatcher;
use taskscout::models::MatchType;
use taskscout::tasks;

async fn git(dir: &Path, args: &[&str]) -> String {
    let output = tokio::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .await
        .unwrap();
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

async fn init_repo(dir: &Path) {
    git(dir, &["init", "-q"]).await;
    git(dir, &["config", "user.email", "test@test.com"]).await;
    git(dir, &["config", "user.name", "Test"]).await;
    git(dir, &["config", "commit.gpgsign", "false"]).await;
}

async fn commit(dir: &Path, files: &[&str], message: &str) -> String {
    for file in files {
        let path = dir.join(file);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.unwrap();
        }
        tokio::fs::write(&path, message).await.unwrap();
    }
    git(dir, &["add", "."]).await;
    git(dir, &["commit", "-q", "-m", message]).await;
    git(dir, &["rev-parse", "HEAD"]).await
}

const TASKS_JSON: &str = r#"[
  {"id": "HK-004", "title": "Login page", "acceptanceCriteria": ["Users can sign in"]},
  {"id": "HK-007", "title": "Cat physics", "acceptanceCriteria": []},
  {"id": "HK-009", "title": "Leaderboard", "acceptanceCriteria": []}
]"#;

#[tokio::test]
async fn scan_then_rescan_with_watermark() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path();
    init_repo(p).await;
    commit(p, &["README.md"], "Initial commit").await;
    let explicit = commit(p, &["src/pages/home.rs"], "hk-004: sign-in form").await;
    let physics = commit(p, &["src/game/physics.rs", "src/cats/body.rs"], "Stiffer springs").await;

    let tasks_path = p.join("tasks.json");
    std::fs::write(&tasks_path, TASKS_JSON).unwrap();
    let tasks = tasks::load_tasks(&tasks_path).await.unwrap();

    let matcher = TaskCommitMatcher::new(Arc::new(GitLogSource::new(p)));
    let first = matcher.analyze_commits(&tasks, None).await;

    assert_eq!(first.last_commit.as_deref(), Some(physics.as_str()));

    let login = first.matches.iter().find(|m| m.task_id == "HK-004").unwrap();
    assert_eq!(login.match_type, MatchType::Explicit);
    assert_eq!(login.commit_hash, explicit);
    assert_eq!(login.summary_line(), "HK-004: hk-004: sign-in form (100% confidence)");

    let cats = first.matches.iter().find(|m| m.task_id == "HK-007").unwrap();
    assert_eq!(cats.match_type, MatchType::FileAnalysis);
    assert_eq!(cats.commit_hash, physics);
    assert!(first.matches.iter().all(|m| m.task_id != "HK-009"));

    // Nothing new since the watermark.
    let second = matcher
        .analyze_commits(&tasks, first.last_commit.as_deref())
        .await;
    assert!(second.matches.is_empty());
    assert_eq!(second.last_commit, first.last_commit);

    // A new commit is picked up on the next pass, and only it is scanned.
    let leaderboard = commit(p, &["src/board.rs"], "HK-009 leaderboard").await;
    let third = matcher
        .analyze_commits(&tasks, second.last_commit.as_deref())
        .await;
    assert_eq!(third.matches.len(), 1);
    assert_eq!(third.matches[0].task_id, "HK-009");
    assert_eq!(third.last_commit.as_deref(), Some(leaderboard.as_str()));
}

#[tokio::test]
async fn unavailable_repository_degrades_to_no_matches() {
    let dir = tempfile::tempdir().unwrap();
    let source = GitLogSource::new(dir.path());
    assert!(matches!(
        source.commits_since(None).await,
        Err(LogError::SourceUnavailable(_))
    ));

    let tasks = taskscout::tasks::parse_tasks(TASKS_JSON).unwrap();
    let matcher = TaskCommitMatcher::new(Arc::new(source));
    let result = matcher.analyze_commits(&tasks, Some("abc123")).await;
    assert!(result.matches.is_empty());
    assert_eq!(result.last_commit.as_deref(), Some("abc123"));
}

#[tokio::test]
async fn rewritten_history_rescans_recent_window() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path();
    init_repo(p).await;
    commit(p, &["README.md"], "Initial commit").await;
    let head = commit(p, &["src/x.rs"], "HK-007 cat physics").await;

    let tasks = taskscout::tasks::parse_tasks(TASKS_JSON).unwrap();
    let matcher = TaskCommitMatcher::new(Arc::new(GitLogSource::new(p)));
    let result = matcher
        .analyze_commits(&tasks, Some("1234567890abcdef1234567890abcdef12345678"))
        .await;

    assert_eq!(result.last_commit.as_deref(), Some(head.as_str()));
    assert!(result.matches.iter().any(|m| m.task_id == "HK-007"));
}
