//! Terminal renderer: one block per match, strongest evidence first.

use colored::Colorize;

use crate::models::{AnalysisResult, MatchType, Summary};
use crate::output::OutputRenderer;

/// Terminal output renderer with colored, flowing text.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render(&self, result: &AnalysisResult) -> String {
        let mut output = String::new();

        if result.matches.is_empty() {
            output.push_str(&format!("{}", "  ✔ No task matches found.\n".green()));
        } else {
            let mut sorted = result.matches.clone();
            sorted.sort_by(|a, b| {
                b.confidence
                    .total_cmp(&a.confidence)
                    .then_with(|| a.task_id.cmp(&b.task_id))
            });

            for m in &sorted {
                let kind = match m.match_type {
                    MatchType::Explicit => "explicit".green().bold().to_string(),
                    MatchType::Keyword => "keyword".yellow().bold().to_string(),
                    MatchType::FileAnalysis => "file-analysis".blue().bold().to_string(),
                };
                let short: String = m.commit_hash.chars().take(7).collect();

                output.push_str(&format!(
                    " {} {} {} ({}% confidence)\n",
                    "●".cyan(),
                    m.task_id.bold(),
                    kind,
                    m.confidence_percent()
                ));
                output.push_str(&format!(
                    "   {} {} · {} · {}\n",
                    short.dimmed(),
                    m.commit_message,
                    m.author,
                    m.date.dimmed()
                ));
                output.push_str(&format!("   {} {}\n\n", "→".cyan(), m.reason));
            }

            let summary = Summary::from_matches(&result.matches);
            output.push_str(&format!("{}\n", "───────────────────────────────────".dimmed()));
            output.push_str(&format!(
                " {} {}: {} explicit, {} keyword, {} file-analysis\n",
                summary.total.to_string().bold(),
                if summary.total == 1 { "match" } else { "matches" },
                summary.explicit,
                summary.keyword,
                summary.file_analysis,
            ));
        }

        if let Some(ref last) = result.last_commit {
            output.push_str(&format!(" {} {}\n", "last commit:".dimmed(), last));
        }

        output
    }
}
