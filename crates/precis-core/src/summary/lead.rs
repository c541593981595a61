use async_trait::async_trait;
use tracing::debug;

use crate::text::{split_sentences, word_count};

use super::{SummaryError, SummaryGenerator};

/// Share of the passage the lead summary aims for.
pub const DEFAULT_LEAD_RATIO: f64 = 0.25;

/// Extractive summarizer that keeps the leading sentences of a passage.
///
/// Sentences are taken in order until their word count reaches `ratio` of the passage
/// (always at least one sentence). Output is a pure function of the input.
#[derive(Debug, Clone, Copy)]
pub struct LeadSummarizer {
    ratio: f64,
}

impl Default for LeadSummarizer {
    fn default() -> Self {
        Self {
            ratio: DEFAULT_LEAD_RATIO,
        }
    }
}

impl LeadSummarizer {
    /// Creates a summarizer targeting `ratio` of the passage (clamped to `(0, 1]`).
    pub fn new(ratio: f64) -> Self {
        let ratio = if ratio.is_finite() && ratio > 0.0 {
            ratio.min(1.0)
        } else {
            DEFAULT_LEAD_RATIO
        };
        Self { ratio }
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Synchronous form of [`SummaryGenerator::generate_summary`].
    pub fn summarize(&self, passage: &str) -> String {
        let budget = ((word_count(passage) as f64 * self.ratio).ceil() as usize).max(1);

        let mut taken = 0;
        let mut kept = Vec::new();
        for sentence in split_sentences(passage) {
            if taken >= budget {
                break;
            }
            taken += word_count(sentence);
            kept.push(sentence);
        }

        debug!(budget, taken, sentences = kept.len(), "Lead summary built");
        kept.join(" ")
    }
}

#[async_trait]
impl SummaryGenerator for LeadSummarizer {
    async fn generate_summary(&self, passage: &str) -> Result<String, SummaryError> {
        let summary = self.summarize(passage);
        if summary.is_empty() && !passage.trim().is_empty() {
            return Err(SummaryError::EmptySummary);
        }
        Ok(summary)
    }

    fn mode(&self) -> &'static str {
        "lead"
    }
}
