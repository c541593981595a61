//! Similarity engine: embeddings in, two 0-100 similarity scores out.
//!
//! `reference_similarity` compares the student response with the reference summary,
//! `context_similarity` compares it with the source passage. Both rescale a cosine in
//! `[-1, 1]` linearly onto `[0, 100]` (cosine 0 lands on 50). Scores stay unrounded
//! here; [`crate::scoring::compose`] rounds once, at presentation.

pub mod engine;


pub use engine::{SimilarityEngine, SimilarityScores};

/// Cosine similarity clamped to `[-1, 1]`.
///
/// Empty input, mismatched lengths and zero-magnitude vectors yield `0.0`: the ratio is
/// undefined there and 0 maps to the neutral score of 50.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let (dot, norm_a_sq, norm_b_sq) =
        a.iter()
            .zip(b.iter())
            .fold((0.0f64, 0.0f64, 0.0f64), |(dot, na, nb), (&av, &bv)| {
                let av = f64::from(av);
                let bv = f64::from(bv);
                (dot + av * bv, na + av * av, nb + bv * bv)
            });

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        (dot / (norm_a * norm_b)).clamp(-1.0, 1.0)
    }
}

/// Student vs reference summary: `((cos + 1) / 2) * 100`.
#[inline]
pub fn reference_similarity(cosine: f64) -> f64 {
    ((cosine + 1.0) / 2.0) * 100.0
}

/// Student vs source passage: `cos * 50 + 50`.
#[inline]
pub fn context_similarity(cosine: f64) -> f64 {
    cosine * 50.0 + 50.0
}
