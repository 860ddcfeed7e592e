//! Plain-text report rendering.
//!
//! [`ReportRenderer`] turns an [`AnalysisResult`] into a deterministic
//! text report: title and timestamp, overall statistics, the
//! certification standards table, ranked and full participant tables,
//! item analysis, and recommendations. Page layout and document formats
//! stay with external collaborators; this renderer guarantees the data
//! shape and a readable text form.
//!
//! # Example
//!
//! ```
//! use calificar::{Analyzer, ReportRenderer, ResponseMatrix};
//!
//! let matrix = ResponseMatrix::parse("1,1,0\n1,0,1\n0,1,1").unwrap();
//! let result = Analyzer::new().analyze(&matrix);
//! let report = ReportRenderer::new().with_top_n(2).render(&result);
//! assert!(report.contains("Overall Statistics"));
//! ```

use std::fmt::Write as _;

use crate::analysis::AnalysisResult;

/// Default number of ranked persons shown in the top table.
const DEFAULT_TOP_N: usize = 10;

/// Default character budget for feedback cells in the full table.
const DEFAULT_FEEDBACK_BUDGET: usize = 50;

/// Configurable text report renderer.
#[derive(Debug, Clone)]
pub struct ReportRenderer {
    top_n: usize,
    feedback_budget: usize,
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer {
    /// Create a renderer with the default top-10 table and 50-character
    /// feedback budget.
    #[must_use]
    pub fn new() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            feedback_budget: DEFAULT_FEEDBACK_BUDGET,
        }
    }

    /// Set how many ranked persons the top table shows.
    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Set the character budget for feedback cells in the full table.
    #[must_use]
    pub fn with_feedback_budget(mut self, budget: usize) -> Self {
        self.feedback_budget = budget;
        self
    }

    /// Render the full report.
    #[must_use]
    pub fn render(&self, result: &AnalysisResult) -> String {
        let mut out = String::new();

        self.render_header(&mut out, result);
        self.render_statistics(&mut out, result);
        self.render_standards(&mut out, result);
        self.render_top(&mut out, result);
        self.render_persons(&mut out, result);
        self.render_items(&mut out, result);
        self.render_recommendations(&mut out, result);

        out
    }

    fn render_header(&self, out: &mut String, result: &AnalysisResult) {
        let _ = writeln!(out, "Test Scoring Analysis Report");
        let _ = writeln!(out, "============================");
        let _ = writeln!(
            out,
            "Generated: {}",
            result.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
        let _ = writeln!(out);
    }

    fn render_statistics(&self, out: &mut String, result: &AnalysisResult) {
        let stats = &result.statistics;
        let _ = writeln!(out, "Overall Statistics");
        let _ = writeln!(out, "------------------");
        let _ = writeln!(out, "{:<22} {}", "Participants:", stats.total_participants);
        let _ = writeln!(out, "{:<22} {}", "Items:", stats.total_items);
        let _ = writeln!(
            out,
            "{:<22} {:.2}%",
            "Overall accuracy:", stats.overall_accuracy
        );
        let _ = writeln!(out, "{:<22} {:.2}", "Average score:", stats.average_score);
        let _ = writeln!(out, "{:<22} {:.2}", "Best score:", stats.best_score);
        let _ = writeln!(out, "{:<22} {:.2}", "Worst score:", stats.worst_score);
        let _ = writeln!(out);
    }

    fn render_standards(&self, out: &mut String, result: &AnalysisResult) {
        let _ = writeln!(out, "Certification Standards");
        let _ = writeln!(out, "-----------------------");
        let _ = writeln!(out, "{:<24} {:<10} DESCRIPTION", "LEVEL", "RANGE");
        let _ = writeln!(out, "{}", "-".repeat(60));
        for band in &result.standards {
            let _ = writeln!(
                out,
                "{:<24} {:<10} {}",
                band.level.label(),
                format!("{}-{}", band.min_score, band.max_score),
                band.description
            );
        }
        let _ = writeln!(out);
    }

    fn render_top(&self, out: &mut String, result: &AnalysisResult) {
        let top = result.top(self.top_n);
        let _ = writeln!(out, "Top {} Participants", top.len());
        let _ = writeln!(out, "-------------------");
        let _ = writeln!(
            out,
            "{:<6} {:<16} {:<7} {:<24} CATEGORY",
            "RANK", "PARTICIPANT", "SCORE", "LEVEL"
        );
        let _ = writeln!(out, "{}", "-".repeat(70));
        for (rank, person) in top.iter().enumerate() {
            let _ = writeln!(
                out,
                "{:<6} {:<16} {:<7} {:<24} {}",
                rank + 1,
                format!("Participant {}", person.person_index),
                person.certification_score,
                person.certification_level.label(),
                person.performance_category
            );
        }
        let _ = writeln!(out);
    }

    fn render_persons(&self, out: &mut String, result: &AnalysisResult) {
        let _ = writeln!(out, "All Participants");
        let _ = writeln!(out, "----------------");
        let _ = writeln!(
            out,
            "{:<5} {:<16} {:<9} {:<28} {:<15} FEEDBACK",
            "#", "PARTICIPANT", "ABILITY", "CERTIFICATION", "CATEGORY"
        );
        let _ = writeln!(out, "{}", "-".repeat(110));
        for person in &result.persons {
            let certification = format!(
                "{} ({})",
                person.certification_score,
                person.certification_level.label()
            );
            let _ = writeln!(
                out,
                "{:<5} {:<16} {:<9.2} {:<28} {:<15} {}",
                person.person_index,
                format!("Participant {}", person.person_index),
                person.ability,
                certification,
                person.performance_category.to_string(),
                truncate(&person.feedback, self.feedback_budget)
            );
        }
        let _ = writeln!(out);
    }

    fn render_items(&self, out: &mut String, result: &AnalysisResult) {
        let _ = writeln!(out, "Item Analysis");
        let _ = writeln!(out, "-------------");
        let _ = writeln!(
            out,
            "{:<8} {:<12} {:<10} DESCRIPTION",
            "ITEM", "DIFFICULTY", "LEVEL"
        );
        let _ = writeln!(out, "{}", "-".repeat(70));
        for item in &result.items {
            let _ = writeln!(
                out,
                "{:<8} {:<12.3} {:<10} {}",
                item.item_id,
                item.difficulty,
                item.level.to_string(),
                item.description
            );
        }
        let _ = writeln!(out);
    }

    fn render_recommendations(&self, out: &mut String, result: &AnalysisResult) {
        let recs = &result.recommendations;
        let _ = writeln!(out, "Recommendations");
        let _ = writeln!(out, "---------------");
        let _ = writeln!(out, "For participants: {}", recs.for_participants);
        let _ = writeln!(out, "For test design:  {}", recs.for_test_design);
        let _ = writeln!(out, "For improvement:  {}", recs.for_improvement);
    }
}

/// Truncate to the character budget, replacing the tail with `...` when
/// the text runs over.
fn truncate(text: &str, budget: usize) -> String {
    if text.chars().count() <= budget {
        return text.to_string();
    }
    let kept: String = text.chars().take(budget.saturating_sub(3)).collect();
    format!("{kept}...")
}
