//! Fixed-output collaborators for tests and offline wiring.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::embedding::{Embedder, EmbeddingError};
use crate::grammar::{GrammarChecker, GrammarError, GrammarIssue};
use crate::summary::{SummaryError, SummaryGenerator};

/// Returns registered vectors per exact text; anything else embeds to zeros.
#[derive(Debug, Clone, Default)]
pub struct FixedEmbedder {
    dim: usize,
    vectors: HashMap<String, Vec<f32>>,
}

impl FixedEmbedder {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            vectors: HashMap::new(),
        }
    }

    /// Registers the vector returned for `text`. Its length is not checked.
    pub fn with_vector(mut self, text: impl Into<String>, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.into(), vector);
        self
    }

    /// Places `student` on the first axis and the other two texts at the given cosines.
    ///
    /// `dim` must be at least 2.
    pub fn with_cosines(
        dim: usize,
        reference: &str,
        student: &str,
        passage: &str,
        reference_cosine: f32,
        context_cosine: f32,
    ) -> Self {
        Self::new(dim)
            .with_vector(student, axis_vector(dim, 1.0))
            .with_vector(reference, axis_vector(dim, reference_cosine))
            .with_vector(passage, axis_vector(dim, context_cosine))
    }
}

/// Unit vector in the first two dimensions whose cosine with `e0` is `cosine`.
fn axis_vector(dim: usize, cosine: f32) -> Vec<f32> {
    let mut v = vec![0.0; dim];
    if dim > 0 {
        v[0] = cosine;
    }
    if dim > 1 {
        v[1] = (1.0 - cosine * cosine).max(0.0).sqrt();
    }
    v
}

impl Embedder for FixedEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(self
            .vectors
            .get(text)
            .cloned()
            .unwrap_or_else(|| vec![0.0; self.dim]))
    }

    fn embedding_dim(&self) -> usize {
        self.dim
    }

    fn is_stub(&self) -> bool {
        true
    }
}

/// Embedder whose inference always fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingEmbedder;

impl Embedder for FailingEmbedder {
    fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Err(EmbeddingError::InferenceFailed {
            reason: "mock embedder failure".to_string(),
        })
    }

    fn embedding_dim(&self) -> usize {
        crate::constants::SENTENCE_EMBEDDING_DIM
    }
}

/// Returns the same summary for every passage and counts calls.
#[derive(Debug, Default)]
pub struct FixedSummarizer {
    summary: String,
    calls: AtomicUsize,
}

impl FixedSummarizer {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SummaryGenerator for FixedSummarizer {
    async fn generate_summary(&self, _passage: &str) -> Result<String, SummaryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.summary.clone())
    }

    fn mode(&self) -> &'static str {
        "fixed"
    }
}

/// Summarizer whose provider is always down.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingSummarizer;

#[async_trait]
impl SummaryGenerator for FailingSummarizer {
    async fn generate_summary(&self, _passage: &str) -> Result<String, SummaryError> {
        Err(SummaryError::ProviderFailed {
            reason: "mock provider unavailable".to_string(),
        })
    }

    fn mode(&self) -> &'static str {
        "failing"
    }
}

/// Reports `issues` identical issues for any text, blank included.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedGrammarChecker {
    issues: usize,
}

impl FixedGrammarChecker {
    pub fn new(issues: usize) -> Self {
        Self { issues }
    }
}

#[async_trait]
impl GrammarChecker for FixedGrammarChecker {
    async fn check(&self, _text: &str) -> Result<Vec<GrammarIssue>, GrammarError> {
        Ok((0..self.issues)
            .map(|i| GrammarIssue::new("MOCK_RULE", format!("mock issue {i}")))
            .collect())
    }

    fn mode(&self) -> &'static str {
        "fixed"
    }
}

/// Grammar engine that always answers 503.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingGrammarChecker;

#[async_trait]
impl GrammarChecker for FailingGrammarChecker {
    async fn check(&self, _text: &str) -> Result<Vec<GrammarIssue>, GrammarError> {
        Err(GrammarError::EngineStatus {
            status: 503,
            body: "mock engine unavailable".to_string(),
        })
    }

    fn mode(&self) -> &'static str {
        "failing"
    }
}
