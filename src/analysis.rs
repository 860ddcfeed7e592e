//! Analysis pipeline and the published result artifact.
//!
//! [`Analyzer`] runs the full scoring pipeline over a validated
//! [`ResponseMatrix`]: item difficulties, person scores, certification
//! mapping, and population aggregates, collected into one serializable
//! [`AnalysisResult`]. Every entity is created fresh per analysis and the
//! artifact is the sole hand-off to reporting and persistence.
//!
//! # Example
//!
//! ```
//! use calificar::{Analyzer, ResponseMatrix};
//!
//! let matrix = ResponseMatrix::parse("1,1,0\n1,0,1\n0,1,1\n1,1,1").unwrap();
//! let result = Analyzer::new().analyze(&matrix);
//!
//! assert_eq!(result.persons.len(), 4);
//! for person in result.top(2) {
//!     println!("#{}: {}", person.person_index, person.certification_score);
//! }
//! ```

// Statistical computation requires usize->f64 casts
#![allow(clippy::cast_precision_loss)]

use std::{fmt, path::Path};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    matrix::ResponseMatrix,
    scoring::{
        ability, certification_score, feedback, normalize_scaled, raw_difficulties, round2,
        round6, standard_error, CertificationBand, CertificationLevel, ItemDifficulty,
        PerformanceCategory,
    },
};

/// Published score record for one person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonScore {
    /// 1-based row number in the input matrix
    pub person_index: usize,
    /// Raw ability estimate, rounded to 6 decimal places
    pub ability: f64,
    /// Dispersion-based standard error proxy, rounded to 6 decimal places
    pub standard_error: f64,
    /// Certification score on the integer 0-100 scale
    pub certification_score: u8,
    /// Certification level banded on the certification score
    pub certification_level: CertificationLevel,
    /// Performance category banded on the raw ability
    pub performance_category: PerformanceCategory,
    /// Composed feedback text
    pub feedback: String,
}

impl PersonScore {
    /// Build a record from a 1-based person number and the unrounded
    /// ability and standard error. Banding and feedback use the unrounded
    /// values; the published fields are rounded here.
    #[must_use]
    pub fn new(person_index: usize, ability: f64, standard_error: f64) -> Self {
        let certification = certification_score(ability);
        Self {
            person_index,
            ability: round6(ability),
            standard_error: round6(standard_error),
            certification_score: certification,
            certification_level: CertificationLevel::from_score(certification),
            performance_category: PerformanceCategory::from_ability(ability),
            feedback: feedback(certification, standard_error),
        }
    }
}

/// Population-level statistics over one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallStatistics {
    /// Number of persons in the matrix
    pub total_participants: usize,
    /// Number of items in the matrix
    pub total_items: usize,
    /// Share of correct responses over all cells, as a percentage
    pub overall_accuracy: f64,
    /// Mean raw ability
    pub average_score: f64,
    /// Highest raw ability
    pub best_score: f64,
    /// Lowest raw ability
    pub worst_score: f64,
}

impl OverallStatistics {
    /// Aggregate a matrix and its unrounded abilities. Percentages and
    /// scores publish rounded to 2 decimal places.
    #[must_use]
    pub fn from_matrix(matrix: &ResponseMatrix, abilities: &[f64]) -> Self {
        let total_cells = matrix.num_persons() * matrix.num_items();
        let accuracy = matrix.total_correct() as f64 / total_cells as f64 * 100.0;

        let best = abilities.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let worst = abilities.iter().copied().fold(f64::INFINITY, f64::min);
        let average = abilities.iter().sum::<f64>() / abilities.len() as f64;

        Self {
            total_participants: matrix.num_persons(),
            total_items: matrix.num_items(),
            overall_accuracy: round2(accuracy),
            average_score: round2(average),
            best_score: round2(best),
            worst_score: round2(worst),
        }
    }
}

/// Verdict on how evenly item difficulty is spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyBalance {
    /// Easy and hard item counts are within 2 of each other
    Good,
    /// The spread leans toward one end and the test design should adjust
    NeedsAdjustment,
}

impl DifficultyBalance {
    /// Human-readable account of the verdict.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Good => "Difficulty spread is balanced",
            Self::NeedsAdjustment => "Difficulty spread needs adjustment",
        }
    }
}

impl fmt::Display for DifficultyBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Good => write!(f, "Good"),
            Self::NeedsAdjustment => write!(f, "Needs adjustment"),
        }
    }
}

/// Item counts per coarse difficulty bucket, with a balance verdict.
///
/// These are the aggregate buckets (easy, middle, hard thirds on the
/// scaled value), not the four-level banding attached to each item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyDistribution {
    /// Items with scaled difficulty <= -1.5
    pub easy_items: usize,
    /// Items with scaled difficulty in (-1.5, 1.5]
    pub medium_items: usize,
    /// Items with scaled difficulty > 1.5
    pub hard_items: usize,
    /// Balance verdict: easy and hard counts within 2 of each other
    pub balance: DifficultyBalance,
}

impl DifficultyDistribution {
    /// Bucket the published item difficulties.
    #[must_use]
    pub fn from_items(items: &[ItemDifficulty]) -> Self {
        let easy_items = items.iter().filter(|i| i.difficulty <= -1.5).count();
        let hard_items = items.iter().filter(|i| i.difficulty > 1.5).count();
        let medium_items = items.len() - easy_items - hard_items;
        let balance = if easy_items.abs_diff(hard_items) <= 2 {
            DifficultyBalance::Good
        } else {
            DifficultyBalance::NeedsAdjustment
        };

        Self {
            easy_items,
            medium_items,
            hard_items,
            balance,
        }
    }
}

/// Person counts per raw-ability bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceDistribution {
    /// Persons with raw ability >= 85
    pub high: usize,
    /// Persons with raw ability in [70, 85)
    pub above_average: usize,
    /// Persons with raw ability in [55, 70)
    pub average: usize,
    /// Persons with raw ability < 55
    pub below_average: usize,
}

impl PerformanceDistribution {
    /// Bucket unrounded abilities.
    #[must_use]
    pub fn from_abilities(abilities: &[f64]) -> Self {
        let mut distribution = Self {
            high: 0,
            above_average: 0,
            average: 0,
            below_average: 0,
        };
        for &ability in abilities {
            if ability >= 85.0 {
                distribution.high += 1;
            } else if ability >= 70.0 {
                distribution.above_average += 1;
            } else if ability >= 55.0 {
                distribution.average += 1;
            } else {
                distribution.below_average += 1;
            }
        }
        distribution
    }
}

/// Fixed recommendation strings attached to every analysis.
///
/// Constant regardless of input; consumers show them alongside the
/// data-derived sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    /// Guidance for test takers
    pub for_participants: String,
    /// Guidance for test designers
    pub for_test_design: String,
    /// Guidance for followup work
    pub for_improvement: String,
}

impl Default for Recommendations {
    fn default() -> Self {
        Self {
            for_participants: "Practice more and identify your weak areas".to_string(),
            for_test_design: "Improve the balance of item difficulty levels".to_string(),
            for_improvement: "Review the questions missed most often".to_string(),
        }
    }
}

/// Complete result of one analysis run.
///
/// The sole artifact handed to reporting and persistence. Numeric fields
/// are rounded at construction (6 decimal places for scores and
/// difficulties, 2 for percentages) so serialization is reproducible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Published difficulty per item, in column order
    pub items: Vec<ItemDifficulty>,
    /// Published score per person, in row order
    pub persons: Vec<PersonScore>,
    /// The fixed certification standards table
    pub standards: Vec<CertificationBand>,
    /// Population statistics
    pub statistics: OverallStatistics,
    /// Item counts per difficulty bucket
    pub difficulty_distribution: DifficultyDistribution,
    /// Person counts per ability bucket
    pub performance_distribution: PerformanceDistribution,
    /// Fixed recommendation strings
    pub recommendations: Recommendations,
    /// When the analysis was generated
    pub generated_at: DateTime<Utc>,
}

impl AnalysisResult {
    /// Persons ranked by certification score descending. The sort is
    /// stable, so ties keep their original row order.
    #[must_use]
    pub fn ranking(&self) -> Vec<&PersonScore> {
        let mut ranked: Vec<&PersonScore> = self.persons.iter().collect();
        ranked.sort_by(|a, b| b.certification_score.cmp(&a.certification_score));
        ranked
    }

    /// The first `n` persons of the ranking.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<&PersonScore> {
        let mut ranked = self.ranking();
        ranked.truncate(n);
        ranked
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::serialization(e.to_string()))
    }

    /// Deserialize from JSON produced by [`AnalysisResult::to_json`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if decoding fails.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::serialization(e.to_string()))
    }

    /// Write the JSON artifact to an explicit, caller-scoped path.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the write fails.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|e| Error::io(e, path))
    }

    /// Read a JSON artifact back from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the read or decoding fails.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| Error::io(e, path))?;
        Self::from_json(&json)
    }
}

/// Pipeline runner: one call per analysis request.
///
/// Stateless and side-effect-free; concurrent callers each analyze their
/// own matrix.
#[derive(Debug, Clone, Copy, Default)]
pub struct Analyzer;

impl Analyzer {
    /// Create a new analyzer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Run the full pipeline over a validated matrix.
    ///
    /// Total for any valid matrix: the degenerate zero-variance
    /// difficulty case falls back to flat difficulties instead of
    /// failing.
    #[must_use]
    pub fn analyze(&self, matrix: &ResponseMatrix) -> AnalysisResult {
        // Ability scoring consumes the unrounded scaled difficulties;
        // the published item records round on construction.
        let raw = raw_difficulties(matrix);
        let scaled = normalize_scaled(&raw).unwrap_or_else(|_| vec![0.0; raw.len()]);
        let items: Vec<ItemDifficulty> = scaled
            .iter()
            .enumerate()
            .map(|(i, &difficulty)| ItemDifficulty::new(i + 1, difficulty))
            .collect();

        let mut abilities = Vec::with_capacity(matrix.num_persons());
        let mut persons = Vec::with_capacity(matrix.num_persons());
        for (i, row) in matrix.rows().enumerate() {
            let ability_estimate = ability(row, &scaled);
            let se = standard_error(row);
            abilities.push(ability_estimate);
            persons.push(PersonScore::new(i + 1, ability_estimate, se));
        }

        let statistics = OverallStatistics::from_matrix(matrix, &abilities);
        let difficulty_distribution = DifficultyDistribution::from_items(&items);
        let performance_distribution = PerformanceDistribution::from_abilities(&abilities);

        AnalysisResult {
            items,
            persons,
            standards: CertificationBand::standards(),
            statistics,
            difficulty_distribution,
            performance_distribution,
            recommendations: Recommendations::default(),
            generated_at: Utc::now(),
        }
    }
}
