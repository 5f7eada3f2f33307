//! Task list loading.
//!
//! Accepts either a bare JSON array of tasks or an object with a `tasks`
//! array. Ids are canonicalised to upper case on load; duplicate ids are
//! reported because the matcher keeps at most one match per id.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::models::Task;

/// Errors while loading a task list.
#[derive(Error, Debug)]
pub enum TaskError {
    #[error("failed to read task file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse task file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TaskFile {
    List(Vec<Task>),
    Wrapped { tasks: Vec<Task> },
}

/// Parse a task list from JSON text.
pub fn parse_tasks(content: &str) -> Result<Vec<Task>, serde_json::Error> {
    let tasks = match serde_json::from_str::<TaskFile>(content)? {
        TaskFile::List(tasks) | TaskFile::Wrapped { tasks } => tasks,
    };

    let mut seen = HashSet::new();
    for task in &tasks {
        if !seen.insert(task.id.as_str()) {
            tracing::warn!("duplicate task id {}; only one match will be reported for it", task.id);
        }
    }

    Ok(tasks)
}

/// Load a task list from a JSON file.
pub async fn load_tasks(path: &Path) -> Result<Vec<Task>, TaskError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| TaskError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

    parse_tasks(&content).map_err(|e| TaskError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
