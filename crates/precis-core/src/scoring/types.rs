use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A passage and the student's summary of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRequest {
    /// Source passage.
    pub context: String,
    /// Text being evaluated.
    pub student_response: String,
}

impl ScoringRequest {
    pub fn new(context: impl Into<String>, student_response: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            student_response: student_response.into(),
        }
    }
}

/// Explainable result of scoring one request.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    /// Reference summary the response was compared with.
    pub reference_summary: String,
    /// Student vs reference, 0-100, one decimal.
    pub reference_similarity: f64,
    /// Student vs passage, 0-100, one decimal.
    pub context_similarity: f64,
    /// Average of the unrounded similarities, rounded once.
    pub interim_score: u32,
    /// Length tier penalty.
    pub length_penalty: u32,
    /// Grammar density penalty.
    pub grammar_penalty: u32,
    /// `max(0, interim - penalties)`.
    pub final_score: u32,
    /// Time spent on similarity and penalties (reference generation excluded).
    pub elapsed: Duration,
}

impl ScoreBreakdown {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Elapsed seconds with two decimals, e.g. `"0.42"`.
    pub fn elapsed_display(&self) -> String {
        format!("{:.2}", self.elapsed_secs())
    }
}

impl std::fmt::Display for ScoreBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "score {} (interim {}, ref {:.1}, ctx {:.1}, length -{}, grammar -{})",
            self.final_score,
            self.interim_score,
            self.reference_similarity,
            self.context_similarity,
            self.length_penalty,
            self.grammar_penalty
        )
    }
}
