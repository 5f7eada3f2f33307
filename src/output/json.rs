//! JSON output renderer.
//!
//! Outputs `{"matches": [...], "lastCommit": ..., "summary": {...}}`.

use crate::models::{AnalysisResult, Summary};
use crate::output::OutputRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render(&self, result: &AnalysisResult) -> String {
        let summary = Summary::from_matches(&result.matches);

        let output = serde_json::json!({
            "matches": result.matches,
            "lastCommit": result.last_commit,
            "summary": summary,
        });

        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}
