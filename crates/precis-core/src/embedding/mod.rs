//! Embedding + model utilities.
//!
//! - [`Embedder`] is the seam the similarity engine depends on.
//! - [`sentence`] provides the sentence-transformer embedder (with a stub mode).

/// BERT sentence encoder (mean pooled).
pub mod bert;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
/// Sentence embedder.
pub mod sentence;
/// Tokenizer loading helpers.
pub mod utils;

pub use error::EmbeddingError;
pub use sentence::{SentenceConfig, SentenceEmbedder};

/// Turns text into a fixed-length vector.
///
/// Implementations must be safe for concurrent read-only use: one instance is built at
/// startup and shared by every request. Blank text must still produce a vector of
/// [`embedding_dim`](Embedder::embedding_dim) entries (the all-zero vector is fine).
pub trait Embedder: Send + Sync {
    /// Embeds a single text.
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Length of every vector this embedder returns.
    fn embedding_dim(&self) -> usize;

    /// Returns `true` when no model is loaded and vectors are synthetic.
    fn is_stub(&self) -> bool {
        false
    }
}

impl<E: Embedder + ?Sized> Embedder for std::sync::Arc<E> {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        (**self).embed(text)
    }

    fn embedding_dim(&self) -> usize {
        (**self).embedding_dim()
    }

    fn is_stub(&self) -> bool {
        (**self).is_stub()
    }
}
