//! Candidate deduplication: at most one match per task.
//!
//! Within a task the highest confidence wins. On an exact tie an `Explicit`
//! candidate replaces a non-explicit one; any other tie keeps whichever
//! candidate was seen first. Output follows the order in which task ids were
//! first seen, which makes repeated runs over the same input identical.

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::models::{MatchType, TaskMatch};

/// Collapse candidates to the single best match per task id.
pub fn deduplicate(candidates: Vec<TaskMatch>) -> Vec<TaskMatch> {
    let mut by_task: IndexMap<String, TaskMatch> = IndexMap::new();

    for candidate in candidates {
        match by_task.entry(candidate.task_id.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(candidate);
            }
            Entry::Occupied(mut slot) => {
                if supersedes(&candidate, slot.get()) {
                    slot.insert(candidate);
                }
            }
        }
    }

    by_task.into_values().collect()
}

/// Whether `candidate` should replace the currently kept match.
fn supersedes(candidate: &TaskMatch, kept: &TaskMatch) -> bool {
    if candidate.confidence > kept.confidence {
        return true;
    }
    candidate.confidence == kept.confidence
        && candidate.match_type == MatchType::Explicit
        && kept.match_type != MatchType::Explicit
}
