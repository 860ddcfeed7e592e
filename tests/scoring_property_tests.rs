#![allow(clippy::unwrap_used)]
//! Property-based tests for the scoring pipeline.
//!
//! Uses proptest to verify invariants hold across random response
//! matrices, ability values, and malformed inputs.

use calificar::{scoring, Analyzer, CertificationLevel, ResponseMatrix};
use proptest::prelude::*;

/// Strategy producing a valid response matrix with 1-12 persons and
/// 1-10 items.
fn matrix_strategy() -> impl Strategy<Value = ResponseMatrix> {
    (1usize..=12, 1usize..=10)
        .prop_flat_map(|(persons, items)| {
            proptest::collection::vec(proptest::collection::vec(0u8..=1, items), persons)
        })
        .prop_map(|rows| ResponseMatrix::new(rows).unwrap())
}

/// Strategy producing a matrix large enough to survive the text parser,
/// which requires at least two rows.
fn parseable_matrix_strategy() -> impl Strategy<Value = ResponseMatrix> {
    (2usize..=12, 1usize..=10)
        .prop_flat_map(|(persons, items)| {
            proptest::collection::vec(proptest::collection::vec(0u8..=1, items), persons)
        })
        .prop_map(|rows| ResponseMatrix::new(rows).unwrap())
}

/// Renders a matrix back to the comma-separated text form the parser
/// accepts.
fn to_text(matrix: &ResponseMatrix) -> String {
    matrix
        .rows()
        .map(|row| {
            row.iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ========== certification mapping ==========

proptest! {
    /// Property: Certification never decreases when ability increases,
    /// except across the floor seam just below 75
    #[test]
    fn prop_certification_monotone_off_seam(a in -50.0..150.0f64, b in -50.0..150.0f64) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        // The middle segment floors to 76 from 60 + 16/1.07 onward, one
        // above the value published at 75 exactly. Pairs straddling that
        // window fall under the bounded-step property instead.
        let straddles_seam = lo >= 74.95 && lo < 75.0 && hi >= 75.0;
        if !straddles_seam {
            prop_assert!(
                scoring::certification_score(hi) >= scoring::certification_score(lo)
            );
        }
    }

    /// Property: Certification drops by at most one point, and only when
    /// the pair straddles the 75 join
    #[test]
    fn prop_certification_bounded_step(a in -50.0..150.0f64, b in -50.0..150.0f64) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo_score = scoring::certification_score(lo);
        let hi_score = scoring::certification_score(hi);
        prop_assert!(hi_score + 1 >= lo_score);
        if hi_score < lo_score {
            prop_assert!(lo < 75.0 && hi >= 75.0);
            prop_assert_eq!(lo_score, 76);
            prop_assert_eq!(hi_score, 75);
        }
    }

    /// Property: Certification clamps to the 0-100 scale for any ability
    #[test]
    fn prop_certification_clamped(ability in -1000.0..1000.0f64) {
        let score = scoring::certification_score(ability);
        prop_assert!(score <= 100);
        if ability < 0.0 {
            prop_assert_eq!(score, 0);
        }
        if ability >= 90.0 {
            prop_assert_eq!(score, 100);
        }
    }

    /// Property: Below 60 the mapping is the plain floor of the ability
    #[test]
    fn prop_certification_floor_below_sixty(ability in 0.0..60.0f64) {
        let score = scoring::certification_score(ability);
        prop_assert_eq!(f64::from(score), ability.floor());
    }
}

// ========== difficulty normalization ==========

proptest! {
    /// Property: Normalized difficulties center on zero with spread 1.5
    #[test]
    fn prop_normalization_centers_and_scales(matrix in matrix_strategy()) {
        let raw = scoring::raw_difficulties(&matrix);
        if let Ok(scaled) = scoring::normalize_scaled(&raw) {
            let n = scaled.len() as f64;
            let mean = scaled.iter().sum::<f64>() / n;
            let variance = scaled.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / n;
            prop_assert!(mean.abs() < 1e-9, "mean was {mean}");
            prop_assert!((variance.sqrt() - 1.5).abs() < 1e-9);
        }
    }

    /// Property: Raising one response never lowers the ability estimate
    #[test]
    fn prop_extra_correct_answer_raises_ability(
        (responses, difficulties, target) in (1usize..=30).prop_flat_map(|n| {
            (
                proptest::collection::vec(0u8..=1, n),
                proptest::collection::vec(-4.0..4.0f64, n),
                0..n,
            )
        })
    ) {
        let before = scoring::ability(&responses, &difficulties);
        let was_incorrect = responses[target] == 0;
        let mut raised = responses;
        raised[target] = 1;
        let after = scoring::ability(&raised, &difficulties);
        if was_incorrect {
            prop_assert!(after > before);
        } else {
            prop_assert_eq!(after, before);
        }
    }

    /// Property: The standard error of a binary row stays within [0, 2.5]
    #[test]
    fn prop_standard_error_bounded(
        responses in proptest::collection::vec(0u8..=1, 1..=60)
    ) {
        let se = scoring::standard_error(&responses);
        prop_assert!(se >= 0.0);
        prop_assert!(se <= 2.5 + 1e-12);
    }
}

// ========== full analysis ==========

proptest! {
    /// Property: Analysis output shape mirrors the input matrix
    #[test]
    fn prop_analysis_shape(matrix in matrix_strategy()) {
        let result = Analyzer::new().analyze(&matrix);
        prop_assert_eq!(result.persons.len(), matrix.num_persons());
        prop_assert_eq!(result.items.len(), matrix.num_items());
        prop_assert_eq!(result.standards.len(), 4);
        for person in &result.persons {
            prop_assert!(person.certification_score <= 100);
            prop_assert_eq!(
                person.certification_level,
                CertificationLevel::from_score(person.certification_score)
            );
        }
    }

    /// Property: Abilities stay on the 0-100 scale up to float noise
    #[test]
    fn prop_abilities_within_scale(matrix in matrix_strategy()) {
        let result = Analyzer::new().analyze(&matrix);
        for person in &result.persons {
            prop_assert!(person.ability >= -1e-6);
            prop_assert!(person.ability <= 100.0 + 1e-6);
        }
    }

    /// Property: Overall accuracy equals the share of correct cells
    #[test]
    fn prop_accuracy_matches_cell_count(matrix in matrix_strategy()) {
        let result = Analyzer::new().analyze(&matrix);
        let cells = (matrix.num_persons() * matrix.num_items()) as f64;
        let expected = matrix.total_correct() as f64 / cells * 100.0;
        let expected = (expected * 100.0).round() / 100.0;
        prop_assert_eq!(result.statistics.overall_accuracy, expected);
    }

    /// Property: Ranking sorts by score and keeps row order within ties
    #[test]
    fn prop_ranking_is_stable(matrix in matrix_strategy()) {
        let result = Analyzer::new().analyze(&matrix);
        for pair in result.ranking().windows(2) {
            let ordered = pair[0].certification_score > pair[1].certification_score
                || (pair[0].certification_score == pair[1].certification_score
                    && pair[0].person_index < pair[1].person_index);
            prop_assert!(ordered);
        }
    }

    /// Property: JSON serialization round-trips the full result
    #[test]
    fn prop_json_round_trip(matrix in matrix_strategy()) {
        let result = Analyzer::new().analyze(&matrix);
        let json = result.to_json().unwrap();
        let restored = calificar::AnalysisResult::from_json(&json).unwrap();
        prop_assert_eq!(restored, result);
    }
}

// ========== parser ==========

proptest! {
    /// Property: Rendering then parsing reproduces the original matrix
    #[test]
    fn prop_parse_render_round_trip(matrix in parseable_matrix_strategy()) {
        let text = to_text(&matrix);
        let parsed = ResponseMatrix::parse(&text).unwrap();
        prop_assert_eq!(parsed, matrix);
    }

    /// Property: Any non-binary token is rejected with a clean error
    #[test]
    fn prop_parse_rejects_junk_token(junk in "[2-9a-zA-Z]{1,5}") {
        let text = format!("1,0\n{junk},1");
        prop_assert!(ResponseMatrix::parse(&text).is_err());
    }

    /// Property: Whitespace around tokens never changes the result
    #[test]
    fn prop_parse_ignores_token_padding(matrix in parseable_matrix_strategy()) {
        let padded = to_text(&matrix).replace(',', " , ");
        let parsed = ResponseMatrix::parse(&padded).unwrap();
        prop_assert_eq!(parsed, matrix);
    }
}

// ========== feedback ==========

proptest! {
    /// Property: Feedback always composes the three message parts
    #[test]
    fn prop_feedback_composes_three_parts(
        score in 0u8..=100,
        se in 0.0..20.0f64,
    ) {
        let text = scoring::feedback(score, se);
        prop_assert!(!text.is_empty());
        prop_assert_eq!(text.matches("Advice:").count(), 1);
        prop_assert!(!text.contains("  "), "double space in: {text}");
    }
}
