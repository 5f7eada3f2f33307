//! Acceptance-criteria coverage: which criteria of a task look satisfied by commits.

use serde::Serialize;

use super::keyword::{extract_keywords, matched_keywords};
use crate::models::{Commit, Task};

/// Share of criteria that must be met for the task to count as met.
const MET_THRESHOLD: f64 = 0.7;

/// Evidence (or lack of it) for a single criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionDetail {
    pub criterion: String,
    pub met: bool,
    /// Short hash of the first commit that satisfied the criterion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
    /// Subject of that commit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Coverage report for one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriteriaReport {
    pub task_id: String,
    pub met: bool,
    pub met_count: usize,
    pub total: usize,
    pub percentage: u32,
    pub details: Vec<CriterionDetail>,
}

/// Check each acceptance criterion of `task` against `commits`.
///
/// A criterion is met by the first commit whose message contains more than
/// half of the criterion's keywords. The task is met when at least 70% of its
/// criteria are. A task without criteria is never met.
pub fn check_acceptance_criteria(task: &Task, commits: &[Commit]) -> CriteriaReport {
    let total = task.acceptance_criteria.len();
    if total == 0 {
        return CriteriaReport {
            task_id: task.id.clone(),
            met: false,
            met_count: 0,
            total: 0,
            percentage: 0,
            details: Vec::new(),
        };
    }

    let messages: Vec<String> = commits.iter().map(Commit::full_message).collect();
    let mut details = Vec::with_capacity(total);

    for criterion in &task.acceptance_criteria {
        let keywords = extract_keywords(criterion);
        let evidence = commits.iter().zip(&messages).find(|(_, message)| {
            let hits = matched_keywords(&keywords, message).len();
            hits as f64 > keywords.len() as f64 * 0.5
        });

        details.push(match evidence {
            Some((commit, _)) => CriterionDetail {
                criterion: criterion.clone(),
                met: true,
                commit: Some(commit.short_hash().to_string()),
                message: Some(commit.subject.clone()),
            },
            None => CriterionDetail {
                criterion: criterion.clone(),
                met: false,
                commit: None,
                message: None,
            },
        });
    }

    let met_count = details.iter().filter(|d| d.met).count();
    CriteriaReport {
        task_id: task.id.clone(),
        met: met_count as f64 >= total as f64 * MET_THRESHOLD,
        met_count,
        total,
        percentage: (met_count as f64 / total as f64 * 100.0).round() as u32,
        details,
    }
}
