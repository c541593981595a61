//! Penalty engine: rule-based deductions for response length and grammar quality.
//!
//! Both penalties are non-negative integers with a fixed cap and are computed
//! independently of each other and of the similarity scores.

pub mod density;
pub mod length;

#[cfg(test)]
mod tests;

pub use density::{grammar_penalty, issue_density};
pub use length::{
    LENGTH_TIERS, LengthRule, LengthTier, length_penalty, length_ratio, matching_tier,
};

use serde::{Deserialize, Serialize};

use crate::text::word_count;

/// Both penalties of one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Penalties {
    pub length: u32,
    pub grammar: u32,
}

impl Penalties {
    /// Computes both penalties from the texts and the grammar issue count.
    pub fn assess(student_response: &str, reference_summary: &str, issue_count: usize) -> Self {
        let student_words = word_count(student_response);
        Self {
            length: length_penalty(student_words, word_count(reference_summary)),
            grammar: grammar_penalty(issue_count, student_words),
        }
    }

    pub fn total(&self) -> u32 {
        self.length + self.grammar
    }
}
