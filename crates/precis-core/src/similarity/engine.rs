use tracing::debug;

use crate::constants::validate_embedding_dim;
use crate::embedding::{Embedder, EmbeddingError};

use super::{context_similarity, cosine_similarity, reference_similarity};

/// Both similarity measurements of one request, unrounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityScores {
    /// Raw cosine between student response and reference summary.
    pub reference_cosine: f64,
    /// Raw cosine between student response and passage.
    pub context_cosine: f64,
    /// `reference_cosine` rescaled onto `[0, 100]`.
    pub reference_similarity: f64,
    /// `context_cosine` rescaled onto `[0, 100]`.
    pub context_similarity: f64,
}

impl SimilarityScores {
    /// Builds scores from the two raw cosines.
    pub fn from_cosines(reference_cosine: f64, context_cosine: f64) -> Self {
        Self {
            reference_cosine,
            context_cosine,
            reference_similarity: reference_similarity(reference_cosine),
            context_similarity: context_similarity(context_cosine),
        }
    }

    /// Builds scores from already rescaled similarities (inverse of the rescale).
    pub fn from_similarities(reference_similarity: f64, context_similarity: f64) -> Self {
        Self {
            reference_cosine: reference_similarity / 50.0 - 1.0,
            context_cosine: (context_similarity - 50.0) / 50.0,
            reference_similarity,
            context_similarity,
        }
    }
}

/// Embeds the three texts of a request with one pinned embedder and compares them.
pub struct SimilarityEngine<E: Embedder> {
    embedder: E,
}

impl<E: Embedder> std::fmt::Debug for SimilarityEngine<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarityEngine")
            .field("embedding_dim", &self.embedder.embedding_dim())
            .field("stub", &self.embedder.is_stub())
            .finish()
    }
}

impl<E: Embedder> SimilarityEngine<E> {
    pub fn new(embedder: E) -> Self {
        Self { embedder }
    }

    pub fn embedder(&self) -> &E {
        &self.embedder
    }

    /// Embeds `reference`, `student` and `passage` and returns both similarity scores.
    pub fn measure(
        &self,
        reference: &str,
        student: &str,
        passage: &str,
    ) -> Result<SimilarityScores, EmbeddingError> {
        let reference_vec = self.embed_checked(reference)?;
        let student_vec = self.embed_checked(student)?;
        let passage_vec = self.embed_checked(passage)?;

        let scores = SimilarityScores::from_cosines(
            cosine_similarity(&reference_vec, &student_vec),
            cosine_similarity(&passage_vec, &student_vec),
        );

        debug!(
            reference_cosine = scores.reference_cosine,
            context_cosine = scores.context_cosine,
            reference_similarity = scores.reference_similarity,
            context_similarity = scores.context_similarity,
            "Similarity measured"
        );

        Ok(scores)
    }

    fn embed_checked(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let vector = self.embedder.embed(text)?;
        validate_embedding_dim(vector.len(), self.embedder.embedding_dim())?;
        Ok(vector)
    }
}
