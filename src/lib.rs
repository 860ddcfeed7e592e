//! calificar - Psychometric Scoring and Certification Reporting in Pure Rust
//!
//! Scores binary response matrices (test-takers x items): item
//! difficulties derived from column success rates, per-person ability
//! estimates, a four-tier certification scale, population aggregates,
//! and a deterministic text report.
//!
//! # Design Principles
//!
//! 1. **Pure pipeline** - matrix to difficulties to abilities to
//!    certification to aggregates, each stage a pure function of its
//!    inputs
//! 2. **Fail fast** - malformed matrices are rejected whole, never
//!    partially parsed
//! 3. **Reproducible artifacts** - numeric fields round at construction
//!    so serialized results are stable
//!
//! # Quick Start
//!
//! ```
//! use calificar::{Analyzer, ReportRenderer, ResponseMatrix};
//!
//! // Parse a response matrix: rows are persons, columns are items
//! let matrix = ResponseMatrix::parse("1,0,1\n1,1,0\n0,1,1\n1,1,1").unwrap();
//!
//! // Run the scoring pipeline
//! let result = Analyzer::new().analyze(&matrix);
//! println!("Accuracy: {}%", result.statistics.overall_accuracy);
//!
//! // Render the text report
//! println!("{}", ReportRenderer::new().render(&result));
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::cast_lossless,
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::similar_names,
        clippy::unreadable_literal
    )
)]
// Allow some pedantic lints for cleaner code
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

pub mod analysis;
pub mod error;
pub mod matrix;
pub mod report;
pub mod scoring;

// Re-exports for convenience
pub use analysis::{
    AnalysisResult, Analyzer, DifficultyBalance, DifficultyDistribution, OverallStatistics,
    PerformanceDistribution, PersonScore, Recommendations,
};
pub use error::{Error, Result};
pub use matrix::ResponseMatrix;
pub use report::ReportRenderer;
pub use scoring::{
    CertificationBand, CertificationLevel, DifficultyLevel, ItemDifficulty, PerformanceCategory,
};
