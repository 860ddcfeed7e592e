//! Item difficulty estimation.
//!
//! Each column's difficulty is the negative logit of its success rate,
//! with fixed sentinels at the undefined endpoints. Raw difficulties are
//! then re-centered to zero mean, divided by the population standard
//! deviation, and scaled by a constant spread factor before publication.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    matrix::ResponseMatrix,
    scoring::round6,
};

/// Sentinel difficulty for an item no one answered correctly.
pub const HARDEST_SENTINEL: f64 = 5.0;

/// Sentinel difficulty for an item everyone answered correctly.
pub const EASIEST_SENTINEL: f64 = -5.0;

/// Spread factor applied after unit-variance normalization.
const DIFFICULTY_SCALE: f64 = 1.5;

/// Qualitative difficulty band, assigned on the scaled difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    /// Scaled difficulty <= -1.5
    Easy,
    /// Scaled difficulty in (-1.5, 0]
    Medium,
    /// Scaled difficulty in (0, 1.5]
    Hard,
    /// Scaled difficulty > 1.5
    VeryHard,
}

impl DifficultyLevel {
    /// Band a scaled difficulty value.
    #[must_use]
    pub fn from_difficulty(difficulty: f64) -> Self {
        match difficulty {
            d if d <= -1.5 => Self::Easy,
            d if d <= 0.0 => Self::Medium,
            d if d <= 1.5 => Self::Hard,
            _ => Self::VeryHard,
        }
    }

    /// Short human-readable account of what the band means.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Easy => "Most participants answer correctly",
            Self::Medium => "A typical share of participants answers correctly",
            Self::Hard => "Fewer participants answer correctly",
            Self::VeryHard => "Very few participants answer correctly",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Easy => write!(f, "Easy"),
            Self::Medium => write!(f, "Medium"),
            Self::Hard => write!(f, "Hard"),
            Self::VeryHard => write!(f, "Very hard"),
        }
    }
}

/// Published difficulty record for one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDifficulty {
    /// Item identifier, `Item1`, `Item2`, ... in column order
    pub item_id: String,
    /// Scaled difficulty, rounded to 6 decimal places
    pub difficulty: f64,
    /// Difficulty band on the scaled value
    pub level: DifficultyLevel,
    /// Human-readable label composed from the id and band
    pub description: String,
}

impl ItemDifficulty {
    /// Create a record from a 1-based item number and its scaled
    /// difficulty. The band is assigned before rounding.
    #[must_use]
    pub fn new(item_number: usize, difficulty: f64) -> Self {
        let level = DifficultyLevel::from_difficulty(difficulty);
        Self {
            item_id: format!("Item{item_number}"),
            difficulty: round6(difficulty),
            level,
            description: format!("Question {item_number} - {level} difficulty"),
        }
    }
}

/// Negative logit of a success probability.
///
/// Returns [`HARDEST_SENTINEL`] when `p` is 0 and [`EASIEST_SENTINEL`]
/// when `p` is 1, where the logit is undefined.
#[must_use]
pub fn raw_difficulty(p: f64) -> f64 {
    if p == 0.0 {
        HARDEST_SENTINEL
    } else if p == 1.0 {
        EASIEST_SENTINEL
    } else {
        -(p / (1.0 - p)).ln()
    }
}

/// Raw (pre-normalization) difficulty per column of the matrix.
#[must_use]
pub fn raw_difficulties(matrix: &ResponseMatrix) -> Vec<f64> {
    let n_persons = matrix.num_persons() as f64;
    matrix
        .column_sums()
        .iter()
        .map(|&correct| raw_difficulty(correct as f64 / n_persons))
        .collect()
}

/// Re-center raw difficulties to zero mean, divide by the population
/// standard deviation, and scale by the fixed spread factor.
///
/// # Errors
///
/// Returns [`Error::DegenerateInput`] when the input is empty or all
/// values are identical, leaving no spread to normalize against.
pub fn normalize_scaled(raw: &[f64]) -> Result<Vec<f64>> {
    let Some((&first, rest)) = raw.split_first() else {
        return Err(Error::degenerate_input("no difficulties to normalize"));
    };
    if rest.iter().all(|&d| d == first) {
        return Err(Error::degenerate_input(
            "item difficulties have zero variance",
        ));
    }

    let n = raw.len() as f64;
    let mean = raw.iter().sum::<f64>() / n;
    let variance = raw.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    Ok(raw
        .iter()
        .map(|d| (d - mean) / std_dev * DIFFICULTY_SCALE)
        .collect())
}

/// Full difficulty estimator: raw difficulties, normalization, and
/// published records per item.
///
/// When every column shares the same success rate there is no spread to
/// normalize against; all difficulties publish as 0.0 instead of failing.
#[must_use]
pub fn estimate_difficulties(matrix: &ResponseMatrix) -> Vec<ItemDifficulty> {
    let raw = raw_difficulties(matrix);
    let scaled = normalize_scaled(&raw).unwrap_or_else(|_| vec![0.0; raw.len()]);
    scaled
        .iter()
        .enumerate()
        .map(|(i, &difficulty)| ItemDifficulty::new(i + 1, difficulty))
        .collect()
}
