//! Feedback text generation.
//!
//! Three ordered rule tables evaluated top-down: a result message keyed
//! by certification score, a precision message keyed by standard error,
//! and a study recommendation keyed by certification score. The selected
//! messages are joined into one feedback string per person.

/// Result messages by minimum certification score, most demanding first.
const SCORE_MESSAGES: [(u8, &str); 3] = [
    (90, "Excellent result! You have a strong command of this area."),
    (75, "Good result! Your knowledge is at a high level."),
    (60, "Satisfactory result. You have mastered the core material."),
];

const SCORE_FALLBACK: &str =
    "Improvement needed. Additional study and practice are recommended.";

/// Precision messages by exclusive upper bound on the standard error,
/// tightest first.
const PRECISION_MESSAGES: [(f64, &str); 2] = [
    (5.0, "The result is precise and reliable."),
    (10.0, "The result is moderately precise."),
];

const PRECISION_FALLBACK: &str = "The result has low precision; retesting is recommended.";

/// Recommendations by exclusive upper bound on the certification score,
/// lowest first.
const ADVICE_MESSAGES: [(u8, &str); 3] = [
    (60, "Advice: revisit the core concepts and practice more."),
    (75, "Advice: focus more on the complex questions."),
    (90, "Advice: build experience solving the hardest questions."),
];

const ADVICE_FALLBACK: &str = "Advice: share your knowledge and teach others.";

pub(crate) fn score_message(certification_score: u8) -> &'static str {
    for (min, message) in SCORE_MESSAGES {
        if certification_score >= min {
            return message;
        }
    }
    SCORE_FALLBACK
}

pub(crate) fn precision_message(standard_error: f64) -> &'static str {
    for (bound, message) in PRECISION_MESSAGES {
        if standard_error < bound {
            return message;
        }
    }
    PRECISION_FALLBACK
}

pub(crate) fn advice_message(certification_score: u8) -> &'static str {
    for (bound, message) in ADVICE_MESSAGES {
        if certification_score < bound {
            return message;
        }
    }
    ADVICE_FALLBACK
}

/// Compose the per-person feedback string: result message, precision
/// message, and recommendation, joined by single spaces.
///
/// # Example
///
/// ```
/// use calificar::scoring::feedback;
///
/// let text = feedback(100, 0.0);
/// assert!(text.starts_with("Excellent result!"));
/// assert!(text.contains("precise and reliable"));
/// ```
#[must_use]
pub fn feedback(certification_score: u8, standard_error: f64) -> String {
    [
        score_message(certification_score),
        precision_message(standard_error),
        advice_message(certification_score),
    ]
    .join(" ")
}
