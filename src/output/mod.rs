//! Output renderers: terminal and JSON.

pub mod json;
pub mod terminal;

use crate::models::{AnalysisResult, OutputFormat};

/// Trait for rendering an analysis result to an output format.
pub trait OutputRenderer: Send + Sync {
    /// Render the result to a string.
    fn render(&self, result: &AnalysisResult) -> String;
}

/// Renderer for the chosen format.
pub fn renderer_for(format: OutputFormat) -> Box<dyn OutputRenderer> {
    match format {
        OutputFormat::Terminal => Box::new(terminal::TerminalRenderer),
        OutputFormat::Json => Box::new(json::JsonRenderer),
    }
}
