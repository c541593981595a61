//! Score composition and the request pipeline.
//!
//! ```text
//! passage ──► SummaryGenerator ──► reference
//!                                     │
//!            ┌────────────────────────┴──────────────┐
//!            ▼                                       ▼
//!   SimilarityEngine (blocking pool)        GrammarChecker (async)
//!            │                                       │
//!            └──────────► Penalties + compose ◄──────┘
//! ```

pub mod composer;
pub mod error;
pub mod pipeline;
pub mod types;


pub use composer::{compose, interim_score, round_to_tenth};
pub use error::ScoringError;
pub use pipeline::ScoringPipeline;
pub use types::{ScoreBreakdown, ScoringRequest};
