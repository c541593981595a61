//! Precis library crate (used by the server and integration tests).
//!
//! # Public API Surface
//!
//! ## Scoring algorithm
//! - [`SimilarityEngine`], [`SimilarityScores`] - cosine similarity and 0-100 rescaling
//! - [`length_penalty`], [`grammar_penalty`], [`LENGTH_TIERS`] - rule-based penalties
//! - [`compose`], [`ScoreBreakdown`] - final score and its explanation
//! - [`ScoringPipeline`], [`ScoringRequest`] - the request-scoped pipeline over the collaborators
//!
//! ## Collaborators
//! - [`Embedder`], [`SentenceEmbedder`], [`SentenceConfig`] - text embedding
//! - [`SummaryGenerator`], [`LeadSummarizer`] - reference summary generation
//! - [`GrammarChecker`], [`LanguageToolChecker`], [`RuleBasedChecker`] - grammar issue counting
//!
//! ## Configuration
//! - [`Config`], [`ConfigError`] - `PRECIS_*` environment configuration
//!
//! ## Test/Mock Support
//! Fixed-output collaborators are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod embedding;
pub mod grammar;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod penalty;
pub mod scoring;
pub mod similarity;
pub mod summary;
pub mod text;

pub use config::{Config, ConfigError};
pub use constants::{
    GRAMMAR_PENALTY_CAP, LENGTH_PENALTY_CAP, SENTENCE_EMBEDDING_DIM, validate_embedding_dim,
};
pub use embedding::{Embedder, EmbeddingError, SentenceConfig, SentenceEmbedder};
pub use grammar::{GrammarChecker, GrammarError, LanguageToolChecker, RuleBasedChecker};
pub use penalty::{
    LENGTH_TIERS, LengthRule, LengthTier, Penalties, grammar_penalty, length_penalty,
};
pub use scoring::{
    ScoreBreakdown, ScoringError, ScoringPipeline, ScoringRequest, compose, round_to_tenth,
};
pub use similarity::{
    SimilarityEngine, SimilarityScores, context_similarity, cosine_similarity,
    reference_similarity,
};
pub use summary::{LeadSummarizer, SummaryError, SummaryGenerator};
pub use text::{split_sentences, word_count};
