//! Parser for `git log --pretty=format:%H|%an|%ar|%s|%b --name-status` output.
//!
//! Each commit starts with a pipe-delimited header line and is followed by
//! zero or more `<STATUS>\t<path>` lines. Anything else is skipped without
//! disturbing the records parsed so far.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::commit::{ChangeStatus, Commit, FileChange};

/// `<STATUS>\t<path>` with an optional similarity score for renames/copies.
static FILE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z])(\d{0,3})\t(.+)$").expect("valid file-line regex"));

/// Result of parsing a log, including how many lines were unrecognised.
#[derive(Debug, Default)]
pub struct ParsedLog {
    pub commits: Vec<Commit>,
    /// Lines matching neither the header nor the file-change shape.
    pub skipped: usize,
}

/// Parse raw log output into commits, preserving the log's order.
pub fn parse_log(input: &str) -> ParsedLog {
    let mut parsed = ParsedLog::default();
    let mut current: Option<Commit> = None;

    for line in input.lines() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        if let Some(change) = parse_file_line(line) {
            match current.as_mut() {
                Some(commit) => commit.changed_files.push(change),
                None => parsed.skipped += 1,
            }
            continue;
        }

        if let Some(commit) = parse_header(line) {
            if let Some(done) = current.replace(commit) {
                parsed.commits.push(done);
            }
            continue;
        }

        tracing::debug!("skipping unrecognised log line: {line}");
        parsed.skipped += 1;
    }

    if let Some(done) = current {
        parsed.commits.push(done);
    }

    parsed
}

/// Parse a `hash|author|date|subject|body` header line.
///
/// The body re-joins any further `|` separators. The first field must look
/// like a git object id, which keeps stray body lines containing pipes from
/// being mistaken for new commits.
fn parse_header(line: &str) -> Option<Commit> {
    let parts: Vec<&str> = line.split('|').collect();
    if parts.len() < 4 || !is_object_id(parts[0]) {
        return None;
    }

    Some(Commit {
        hash: parts[0].to_string(),
        author: parts[1].to_string(),
        relative_date: parts[2].to_string(),
        subject: parts[3].to_string(),
        body: parts.get(4..).map(|rest| rest.join("|")).unwrap_or_default(),
        changed_files: Vec::new(),
    })
}

/// Parse a `--name-status` line. Renames and copies keep the destination path.
fn parse_file_line(line: &str) -> Option<FileChange> {
    let caps = FILE_LINE.captures(line)?;
    let status = ChangeStatus::from_code(&caps[1]);
    let paths = &caps[3];
    let path = paths.rsplit('\t').next().unwrap_or(paths);
    if path.is_empty() {
        return None;
    }
    Some(FileChange {
        status,
        path: path.to_string(),
    })
}

fn is_object_id(s: &str) -> bool {
    (7..=64).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_hexdigit())
}
