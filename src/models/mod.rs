//! Shared types used across all modules.
//!
//! Commits, tasks and matches live here so the log reader, the matcher and
//! the renderers can depend on the record shapes without reaching into each
//! other's internals.

pub mod commit;
pub mod matching;
pub mod task;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use commit::{ChangeStatus, Commit, FileChange};
pub use matching::{AnalysisResult, MatchType, Summary, TaskMatch};
pub use task::Task;

/// Supported output formats for match reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Terminal => write!(f, "terminal"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unsupported output format: '{other}'. Supported: terminal, json"
            )),
        }
    }
}
