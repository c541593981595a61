use std::time::Duration;

use crate::constants::MAX_SCORE;
use crate::penalty::Penalties;
use crate::similarity::SimilarityScores;

use super::types::ScoreBreakdown;

/// Rounds to one decimal place for presentation.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Equal-weight average of the two similarity scores, rounded once.
pub fn interim_score(similarity: &SimilarityScores) -> u32 {
    let average = 0.5 * similarity.reference_similarity + 0.5 * similarity.context_similarity;
    average.round().clamp(0.0, f64::from(MAX_SCORE)) as u32
}

/// Combines similarity and penalties into the final breakdown.
///
/// Similarities are averaged unrounded; only the average is rounded. The final score
/// is floored at zero and cannot exceed the interim score.
pub fn compose(
    reference_summary: String,
    similarity: &SimilarityScores,
    penalties: Penalties,
    elapsed: Duration,
) -> ScoreBreakdown {
    let interim = interim_score(similarity);

    ScoreBreakdown {
        reference_summary,
        reference_similarity: round_to_tenth(similarity.reference_similarity),
        context_similarity: round_to_tenth(similarity.context_similarity),
        interim_score: interim,
        length_penalty: penalties.length,
        grammar_penalty: penalties.grammar,
        final_score: interim.saturating_sub(penalties.total()),
        elapsed,
    }
}
