//! Git CLI wrapper for reading commit history.
//!
//! Shells out to `git` via `tokio::process::Command`.

use std::path::Path;

use super::LogError;

/// Pretty format for one header line per commit.
pub const LOG_FORMAT: &str = "--pretty=format:%H|%an|%ar|%s|%b";

/// Run `git log` for at most `limit` commits, optionally scoped to `<since>..HEAD`.
pub async fn git_log(repo_root: &Path, since: Option<&str>, limit: usize) -> Result<String, LogError> {
    let limit_arg = format!("-{limit}");
    let mut args = vec!["log".to_string(), limit_arg, LOG_FORMAT.to_string(), "--name-status".to_string()];
    if let Some(since) = since {
        args.push(format!("{since}..HEAD"));
    }

    let output = tokio::process::Command::new("git")
        .args(&args)
        .current_dir(repo_root)
        .output()
        .await
        .map_err(|e| LogError::SourceUnavailable(format!("failed to run git: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(LogError::SourceUnavailable(format!(
            "git log failed (exit {}): {}",
            output.status,
            stderr.trim()
        )));
    }

    String::from_utf8(output.stdout).map_err(|e| LogError::InvalidUtf8(e.to_string()))
}

/// Check whether `rev` still resolves to a commit in the repository.
///
/// Returns `false` for anything that looks like an option, so a watermark can
/// never be smuggled in as a git flag.
pub async fn commit_exists(repo_root: &Path, rev: &str) -> bool {
    if rev.is_empty() || rev.starts_with('-') {
        return false;
    }

    tokio::process::Command::new("git")
        .args(["rev-parse", "--verify", "--quiet", &format!("{rev}^{{commit}}")])
        .current_dir(repo_root)
        .output()
        .await
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Find the root of the git repository containing `start_dir`.
pub async fn find_repo_root(start_dir: &Path) -> Result<String, LogError> {
    let output = tokio::process::Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .current_dir(start_dir)
        .output()
        .await
        .map_err(|e| LogError::SourceUnavailable(format!("failed to run git: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(LogError::SourceUnavailable(format!(
            "not a git repository: {}",
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
