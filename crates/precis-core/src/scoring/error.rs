use thiserror::Error;

use crate::embedding::EmbeddingError;
use crate::grammar::GrammarError;
use crate::summary::SummaryError;

#[derive(Debug, Error)]
/// Errors returned by the scoring pipeline. Every variant fails the whole request.
pub enum ScoringError {
    /// Reference summary could not be generated.
    #[error("reference summary failed: {0}")]
    Summary(#[from] SummaryError),

    /// Embedding or similarity computation failed.
    #[error("embedding failed: {0}")]
    Embedding(#[from] EmbeddingError),

    /// Grammar engine failed.
    #[error("grammar check failed: {0}")]
    Grammar(#[from] GrammarError),

    /// The blocking similarity task panicked or was cancelled.
    #[error("scoring task failed: {reason}")]
    TaskFailed {
        /// Error message.
        reason: String,
    },
}
