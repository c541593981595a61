use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, instrument};

use crate::embedding::Embedder;
use crate::grammar::GrammarChecker;
use crate::penalty::Penalties;
use crate::similarity::SimilarityEngine;
use crate::summary::SummaryGenerator;

use super::composer::compose;
use super::error::ScoringError;
use super::types::{ScoreBreakdown, ScoringRequest};

/// Scores student summaries against a passage.
///
/// Holds the three long-lived collaborators; each call to [`score`](Self::score) is
/// independent and shares nothing mutable with concurrent calls.
pub struct ScoringPipeline {
    summarizer: Arc<dyn SummaryGenerator>,
    similarity: Arc<SimilarityEngine<Arc<dyn Embedder>>>,
    grammar: Arc<dyn GrammarChecker>,
}

impl std::fmt::Debug for ScoringPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoringPipeline")
            .field("summarizer", &self.summarizer.mode())
            .field("similarity", &self.similarity)
            .field("grammar", &self.grammar.mode())
            .finish()
    }
}

impl ScoringPipeline {
    pub fn new(
        embedder: Arc<dyn Embedder>,
        summarizer: Arc<dyn SummaryGenerator>,
        grammar: Arc<dyn GrammarChecker>,
    ) -> Self {
        Self {
            summarizer,
            similarity: Arc::new(SimilarityEngine::new(embedder)),
            grammar,
        }
    }

    pub fn summarizer_mode(&self) -> &'static str {
        self.summarizer.mode()
    }

    pub fn grammar_mode(&self) -> &'static str {
        self.grammar.mode()
    }

    pub fn embedder_mode(&self) -> &'static str {
        if self.similarity.embedder().is_stub() {
            "stub"
        } else {
            "model"
        }
    }

    pub fn embedding_dim(&self) -> usize {
        self.similarity.embedder().embedding_dim()
    }

    /// Runs the full pipeline for one request.
    ///
    /// The reference summary is generated first and is not part of `elapsed`. Embedding
    /// runs on the blocking pool while the grammar engine is queried.
    #[instrument(skip_all, fields(
        context_len = request.context.len(),
        response_len = request.student_response.len()
    ))]
    pub async fn score(&self, request: &ScoringRequest) -> Result<ScoreBreakdown, ScoringError> {
        let reference = self.reference_summary(&request.context).await?;

        let started = Instant::now();

        let engine = Arc::clone(&self.similarity);
        let reference_text = reference.clone();
        let student = request.student_response.clone();
        let passage = request.context.clone();
        let similarity_task = tokio::task::spawn_blocking(move || {
            engine.measure(&reference_text, &student, &passage)
        });

        let (similarity, issue_count) = tokio::join!(
            similarity_task,
            self.grammar.count_issues(&request.student_response)
        );

        let similarity = similarity.map_err(|e| ScoringError::TaskFailed {
            reason: e.to_string(),
        })??;
        let issue_count = issue_count?;

        let penalties = Penalties::assess(&request.student_response, &reference, issue_count);
        let breakdown = compose(reference, &similarity, penalties, started.elapsed());

        info!(
            final_score = breakdown.final_score,
            interim_score = breakdown.interim_score,
            length_penalty = breakdown.length_penalty,
            grammar_penalty = breakdown.grammar_penalty,
            grammar_issues = issue_count,
            elapsed_ms = breakdown.elapsed.as_millis() as u64,
            "Summary scored"
        );

        Ok(breakdown)
    }

    async fn reference_summary(&self, passage: &str) -> Result<String, ScoringError> {
        if passage.trim().is_empty() {
            debug!("Blank passage; skipping reference generation");
            return Ok(String::new());
        }

        let summary = self.summarizer.generate_summary(passage).await?;
        debug!(
            summarizer = self.summarizer.mode(),
            reference_len = summary.len(),
            "Reference summary generated"
        );
        Ok(summary)
    }
}
