//! Person ability scoring.

/// Scale factor for the dispersion-based standard error proxy.
const SE_SCALE: f64 = 5.0;

/// Raw ability estimate for one person's responses against the scaled
/// item difficulties.
///
/// Each correct answer contributes `1 - d/10`, each incorrect answer
/// `-d/10`; the sum is averaged over the item count and stretched to a
/// 0-100 scale. The value is not strictly bounded but clusters inside
/// 0-100 under reasonable difficulty distributions.
///
/// `responses` and `difficulties` must have the same non-zero length;
/// the matrix invariants guarantee this for pipeline callers.
#[must_use]
pub fn ability(responses: &[u8], difficulties: &[f64]) -> f64 {
    let mut score = 0.0;
    for (&response, &difficulty) in responses.iter().zip(difficulties.iter()) {
        if response == 1 {
            score += 1.0 - difficulty / 10.0;
        } else {
            score -= difficulty / 10.0;
        }
    }
    score / responses.len() as f64 * 100.0
}

/// Dispersion-based standard error proxy for one person's responses.
///
/// The square root of the population variance of the 0/1 responses,
/// scaled by a constant. This is a heuristic carried for compatibility,
/// not a standard error of estimation.
#[must_use]
pub fn standard_error(responses: &[u8]) -> f64 {
    let n = responses.len() as f64;
    let mean = responses.iter().map(|&r| f64::from(r)).sum::<f64>() / n;
    let variance = responses
        .iter()
        .map(|&r| (f64::from(r) - mean).powi(2))
        .sum::<f64>()
        / n;
    variance.sqrt() * SE_SCALE
}
