use crate::constants::MIN_STUDENT_WORDS;

/// Condition of one length tier. All comparisons are strict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LengthRule {
    /// Student response has fewer than `n` words.
    StudentWordsBelow(usize),
    /// Student/reference word ratio is below the bound.
    RatioBelow(f64),
    /// Student/reference word ratio is above the bound.
    RatioAbove(f64),
}

impl LengthRule {
    pub fn matches(&self, student_words: usize, ratio: f64) -> bool {
        match *self {
            LengthRule::StudentWordsBelow(n) => student_words < n,
            LengthRule::RatioBelow(bound) => ratio < bound,
            LengthRule::RatioAbove(bound) => ratio > bound,
        }
    }
}

/// One `(rule, penalty)` row of the length table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthTier {
    pub rule: LengthRule,
    pub penalty: u32,
}

/// Length penalty table, evaluated top to bottom; the first matching row wins and no
/// match means no penalty.
///
/// The order is load-bearing: the more extreme bound of each side is checked first, so
/// a ratio above 0.75 gets 10 rather than the 5 of the looser `> 0.65` row.
pub const LENGTH_TIERS: [LengthTier; 6] = [
    LengthTier {
        rule: LengthRule::StudentWordsBelow(MIN_STUDENT_WORDS),
        penalty: 15,
    },
    LengthTier {
        rule: LengthRule::RatioBelow(0.15),
        penalty: 15,
    },
    LengthTier {
        rule: LengthRule::RatioBelow(0.25),
        penalty: 10,
    },
    LengthTier {
        rule: LengthRule::RatioBelow(0.35),
        penalty: 5,
    },
    LengthTier {
        rule: LengthRule::RatioAbove(0.75),
        penalty: 10,
    },
    LengthTier {
        rule: LengthRule::RatioAbove(0.65),
        penalty: 5,
    },
];

/// Student words over reference words; `0.0` when the reference is empty.
pub fn length_ratio(student_words: usize, reference_words: usize) -> f64 {
    if reference_words == 0 {
        0.0
    } else {
        student_words as f64 / reference_words as f64
    }
}

/// First tier of `tiers` matching the inputs, if any.
pub fn matching_tier(
    tiers: &[LengthTier],
    student_words: usize,
    reference_words: usize,
) -> Option<&LengthTier> {
    let ratio = length_ratio(student_words, reference_words);
    tiers.iter().find(|t| t.rule.matches(student_words, ratio))
}

/// Length penalty from [`LENGTH_TIERS`].
pub fn length_penalty(student_words: usize, reference_words: usize) -> u32 {
    matching_tier(&LENGTH_TIERS, student_words, reference_words).map_or(0, |t| t.penalty)
}
