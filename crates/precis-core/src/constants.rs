//! Cross-cutting, shared constants.
//!
//! Penalty caps bound the penalty tables; the penalty tests check the tables against them.
//!
//! # Dimension Invariants
//!
//! Similarity is only meaningful between vectors produced by the same embedder.
//! The pipeline pins one [`Embedder`](crate::embedding::Embedder) per deployment and
//! uses [`validate_embedding_dim`] before every cosine computation to catch a mixed-up
//! vector early instead of silently comparing unrelated spaces.

/// Output dimension of the default sentence-transformer (MiniLM-L6 family).
pub const SENTENCE_EMBEDDING_DIM: usize = 384;

/// Max tokens fed to the sentence-transformer; longer inputs are truncated.
pub const SENTENCE_MAX_SEQ_LEN: usize = 512;

/// Student responses shorter than this are penalised regardless of ratio.
pub const MIN_STUDENT_WORDS: usize = 20;

/// Largest penalty any length tier can assign.
pub const LENGTH_PENALTY_CAP: u32 = 15;

/// Grammar penalty ceiling (issues per 100 words are truncated to this).
pub const GRAMMAR_PENALTY_CAP: u32 = 20;

/// Words per grammar-density unit.
pub const GRAMMAR_DENSITY_UNIT: usize = 100;

/// Upper bound of every similarity score and of the final score.
pub const MAX_SCORE: u32 = 100;

/// Error returned when two vectors come from differently sized embedding spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimValidationError {
    /// Embedding dimension cannot be zero.
    ZeroDimension,
    /// Runtime dimension does not match expected dimension.
    DimensionMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for DimValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroDimension => write!(f, "embedding dimension cannot be zero"),
            Self::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "dimension mismatch: expected {}, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for DimValidationError {}

/// Validates that a runtime embedding dimension matches the expected dimension.
///
/// # Example
///
/// ```
/// use precis::constants::{validate_embedding_dim, SENTENCE_EMBEDDING_DIM};
///
/// validate_embedding_dim(384, SENTENCE_EMBEDDING_DIM).unwrap();
/// assert!(validate_embedding_dim(768, SENTENCE_EMBEDDING_DIM).is_err());
/// ```
pub fn validate_embedding_dim(actual: usize, expected: usize) -> Result<(), DimValidationError> {
    if expected == 0 {
        return Err(DimValidationError::ZeroDimension);
    }
    if actual != expected {
        return Err(DimValidationError::DimensionMismatch { expected, actual });
    }
    Ok(())
}
