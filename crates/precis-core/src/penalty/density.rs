use crate::constants::{GRAMMAR_DENSITY_UNIT, GRAMMAR_PENALTY_CAP};

/// Grammar issues per 100 words, truncated.
///
/// With no words the raw issue count stands in for the density. That fallback keeps
/// malformed-but-non-empty input penalised; it is kept for compatibility with existing
/// scores rather than because it is a meaningful density.
pub fn issue_density(issue_count: usize, word_count: usize) -> usize {
    if word_count == 0 {
        issue_count
    } else {
        // floor(issues / (words / 100)) without the float round trip
        issue_count.saturating_mul(GRAMMAR_DENSITY_UNIT) / word_count
    }
}

/// Grammar penalty: truncated density capped at [`GRAMMAR_PENALTY_CAP`].
pub fn grammar_penalty(issue_count: usize, word_count: usize) -> u32 {
    let density = issue_density(issue_count, word_count);
    density.min(GRAMMAR_PENALTY_CAP as usize) as u32
}
