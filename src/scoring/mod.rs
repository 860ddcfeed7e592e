//! Scoring pipeline primitives
//!
//! Implements the arithmetic core: item difficulty estimation, person
//! ability scoring, certification mapping, and feedback text generation.
//!
//! # Pipeline
//!
//! 1. **Item difficulty** - negative logit of each column's success rate,
//!    re-centered to zero mean, unit variance, scaled by 1.5
//! 2. **Person ability** - difficulty-weighted sum of responses on a
//!    0-100 scale, with a dispersion-based standard error proxy
//! 3. **Certification score** - piecewise-linear rescaling of ability to
//!    an integer 0-100 certification score
//! 4. **Feedback** - table-driven message lookup per person
//!
//! # Certification Bands
//! - **Excellent (A)** [90, 100]
//! - **Good (B)** [75, 89]
//! - **Satisfactory (C)** [60, 74]
//! - **Needs improvement (D)** [0, 59]
//!
//! # Example
//!
//! ```
//! use calificar::{ResponseMatrix, scoring};
//!
//! let matrix = ResponseMatrix::parse("1,0,1\n1,1,0\n0,1,1\n1,1,1").unwrap();
//! let items = scoring::estimate_difficulties(&matrix);
//! assert_eq!(items.len(), 3);
//! ```

// Statistical computation on small matrices
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]

mod ability;
mod certification;
mod difficulty;
mod feedback;


// Re-export ability scoring
pub use ability::{ability, standard_error};

// Re-export certification mapping
pub use certification::{
    certification_score, CertificationBand, CertificationLevel, PerformanceCategory,
};

// Re-export difficulty estimation
pub use difficulty::{
    estimate_difficulties, normalize_scaled, raw_difficulties, raw_difficulty, DifficultyLevel,
    ItemDifficulty, EASIEST_SENTINEL, HARDEST_SENTINEL,
};

// Re-export feedback generation
pub use feedback::feedback;

/// Round to 6 decimal places, the precision published for raw scores,
/// standard errors, and difficulties.
pub(crate) fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

/// Round to 2 decimal places, the precision published for percentages
/// and aggregate statistics.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
