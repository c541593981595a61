use serde::{Deserialize, Serialize};

use precis::{ScoreBreakdown, ScoringRequest};

/// Wire form of `POST /score/summary`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreRequest {
    pub context: String,
    pub student_response: String,
}

impl From<ScoreRequest> for ScoringRequest {
    fn from(req: ScoreRequest) -> Self {
        ScoringRequest::new(req.context, req.student_response)
    }
}

/// Wire form of a successful score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreResponse {
    pub reference_summary: String,
    pub reference_similarity: f64,
    pub context_similarity: f64,
    pub length_penalty: u32,
    pub grammar_penalty: u32,
    pub final_score: u32,
    /// Seconds with two decimals, as a string.
    pub elapsed_time_s: String,
}

impl From<ScoreBreakdown> for ScoreResponse {
    fn from(breakdown: ScoreBreakdown) -> Self {
        let elapsed_time_s = breakdown.elapsed_display();
        Self {
            reference_summary: breakdown.reference_summary,
            reference_similarity: breakdown.reference_similarity,
            context_similarity: breakdown.context_similarity,
            length_penalty: breakdown.length_penalty,
            grammar_penalty: breakdown.grammar_penalty,
            final_score: breakdown.final_score,
            elapsed_time_s,
        }
    }
}
