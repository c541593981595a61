//! Reference summary generation.
//!
//! The reference summary is the baseline the student response is compared against. Any
//! [`SummaryGenerator`] works as long as it is deterministic for a given passage; the
//! server wires a chat model with sampling disabled, tests and offline deployments use
//! [`LeadSummarizer`].

pub mod error;
pub mod lead;


pub use error::SummaryError;
pub use lead::LeadSummarizer;

use async_trait::async_trait;

/// Produces a reference summary from a passage.
#[async_trait]
pub trait SummaryGenerator: Send + Sync {
    /// Summarizes `passage`. Non-empty passages must yield non-empty prose.
    async fn generate_summary(&self, passage: &str) -> Result<String, SummaryError>;

    /// Short label for readiness reporting (`"lead"`, `"genai"`, ...).
    fn mode(&self) -> &'static str;
}
